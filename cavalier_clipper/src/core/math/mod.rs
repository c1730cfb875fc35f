//! Core/common numeric predicates used by the sweep.
mod base_math;

pub use base_math::*;
