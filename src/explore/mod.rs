mod explorer;
mod record;
mod state;

pub use explorer::*;
pub use record::*;
pub use state::*;
