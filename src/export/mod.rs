mod exporter;
mod pgn;

#[cfg(feature = "server")]
mod prompt;

pub use exporter::*;
pub use pgn::*;
