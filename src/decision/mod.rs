mod arena;
mod choice;
mod decision;

pub use arena::*;
pub use choice::*;
pub use decision::*;
