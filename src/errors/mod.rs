mod beacon;
mod visit;

pub use beacon::*;
pub use visit::*;
