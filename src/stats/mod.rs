mod aggregate;
mod render;

pub use aggregate::*;
pub use render::*;
