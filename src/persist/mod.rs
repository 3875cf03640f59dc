mod persist;
mod row;
mod schema;
mod void;

#[cfg(feature = "database")]
mod connect;
#[cfg(feature = "database")]
mod postgres;
#[cfg(feature = "database")]
mod search;

pub use persist::*;
pub use row::*;
pub use schema::*;
pub use void::*;

#[cfg(feature = "database")]
pub use connect::*;
#[cfg(feature = "database")]
pub use search::*;
