mod cache;
mod memory;

#[cfg(feature = "database")]
mod postgres;

pub use cache::*;
pub use memory::*;
