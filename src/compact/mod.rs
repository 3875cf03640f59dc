mod compact;
mod flatten;
mod tree;

pub use compact::*;
pub use flatten::*;
pub use tree::*;
