//! Core/common traits for use in cavalier_clipper.
mod coord;
mod fuzzy_eq;

pub use coord::Coord;
pub use fuzzy_eq::FuzzyEq;
