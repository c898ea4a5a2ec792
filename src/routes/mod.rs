mod health_check;
mod log;
mod stats;

pub use health_check::*;
pub use log::*;
pub use stats::*;
