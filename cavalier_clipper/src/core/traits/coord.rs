use num_traits::{AsPrimitive, PrimInt, Signed};
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// Trait representing an integer coordinate value (e.g. `i32`, `i64`) that all points of one clip
/// operation share.
///
/// Edges are interpolated in `f64` while orientation and collinearity tests are evaluated exactly
/// in `i128`.
pub trait Coord:
    PrimInt
    + Signed
    + AsPrimitive<f64>
    + AsPrimitive<i128>
    + Default
    + Debug
    + Display
    + Hash
    + 'static
{
    /// Convert to `f64` for interpolation.
    #[inline]
    fn as_f64(self) -> f64 {
        AsPrimitive::<f64>::as_(self)
    }

    /// Widen to `i128` for exact products.
    #[inline]
    fn as_wide(self) -> i128 {
        AsPrimitive::<i128>::as_(self)
    }
}

impl Coord for i16 {}
impl Coord for i32 {}
impl Coord for i64 {}
