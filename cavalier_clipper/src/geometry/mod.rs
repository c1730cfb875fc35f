//! Points and edges in the integer coordinate space of a clip operation.
mod edge;
mod point;

pub use edge::*;
pub use point::*;
