use crate::core::traits::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer point, all points of one clip operation share the same coordinate space.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Point<T = i64> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T>
where
    T: Coord,
{
    /// Create a new point with x and y components.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Point { x, y }
    }
}

/// Largest coordinate magnitude accepted for ring input (`2^62 - 1`).
///
/// Differences of two coordinates in range fit in 63 bits, so the products in [slopes_equal]
/// fit in `i128`.
pub const MAX_COORD: i128 = 0x3FFF_FFFF_FFFF_FFFF;

/// Returns `true` if both components of `pt` lie within `±`[MAX_COORD].
///
/// # Examples
///
/// ```
/// # use cavalier_clipper::geometry::*;
/// assert!(in_coord_range(point(i32::MIN, i32::MAX)));
/// assert!(in_coord_range(point(-(1i64 << 62) + 1, 1 << 40)));
/// assert!(!in_coord_range(point(0, i64::MIN)));
/// ```
#[inline]
pub fn in_coord_range<T>(pt: Point<T>) -> bool
where
    T: Coord,
{
    pt.x.as_wide().abs() <= MAX_COORD && pt.y.as_wide().abs() <= MAX_COORD
}

#[inline(always)]
pub fn point<T>(x: T, y: T) -> Point<T>
where
    T: Coord,
{
    Point::new(x, y)
}

/// Returns `true` if `pt1`, `pt2` and `pt3` are collinear (this includes `pt2` being a spike
/// that doubles back along the segment).
///
/// Products are computed in `i128`, exact for points within [MAX_COORD] (every `i16` and `i32`
/// point). Points outside that range may overflow.
///
/// # Examples
///
/// ```
/// # use cavalier_clipper::geometry::*;
/// assert!(slopes_equal(point(0, 0), point(1, 1), point(3, 3)));
/// assert!(slopes_equal(point(0, 0), point(4, 0), point(2, 0)));
/// assert!(!slopes_equal(point(0, 0), point(1, 0), point(1, 1)));
/// ```
pub fn slopes_equal<T>(pt1: Point<T>, pt2: Point<T>, pt3: Point<T>) -> bool
where
    T: Coord,
{
    let lhs = (pt1.y.as_wide() - pt2.y.as_wide()) * (pt2.x.as_wide() - pt3.x.as_wide());
    let rhs = (pt1.x.as_wide() - pt2.x.as_wide()) * (pt2.y.as_wide() - pt3.y.as_wide());
    lhs == rhs
}
