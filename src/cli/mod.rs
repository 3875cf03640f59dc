mod args;
mod thresholds;

#[cfg(feature = "database")]
mod lookup;

pub use args::*;
pub use thresholds::*;

#[cfg(feature = "database")]
pub use lookup::*;
