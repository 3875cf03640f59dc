mod policy;
mod rules;

pub use policy::*;
pub use rules::*;
