//! Error types for the repertoire crate

use thiserror::Error;

type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the repertoire crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// the statistics source could not be reached or refused the request
    #[error("failed to fetch [{line}]: {source}")]
    Fetch {
        line: String,
        #[source]
        source: Cause,
    },

    /// the statistics source answered with an unexpected payload
    #[error("failed to decode [{line}]: {source}")]
    Decode {
        line: String,
        #[source]
        source: serde_json::Error,
    },

    /// percentages of zero games are undefined
    #[error("no games played after [{line}]")]
    EmptyStats { line: String },

    #[error("failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: Cause,
    },

    #[error("misaligned notations: {uci} uci moves, {san} san moves")]
    Misaligned { uci: usize, san: usize },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn fetch(line: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Fetch {
            line: line.into(),
            source: source.into(),
        }
    }
    pub fn persist(key: impl Into<String>, source: impl Into<Cause>) -> Self {
        Self::Persist {
            key: key.into(),
            source: source.into(),
        }
    }
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            operation: operation.into(),
            source,
        }
    }
    /// failures at the provider boundary that are worth one more attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::Decode { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
