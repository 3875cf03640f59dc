mod provider;

#[cfg(feature = "server")]
mod lichess;

pub use provider::*;

#[cfg(feature = "server")]
pub use lichess::*;
