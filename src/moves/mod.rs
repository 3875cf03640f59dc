mod board;
mod line;
mod outcomes;
mod side;
mod stat;

pub use board::*;
pub use line::*;
pub use outcomes::*;
pub use side::*;
pub use stat::*;
