mod stats;
mod visit;

pub use stats::*;
pub use visit::*;
