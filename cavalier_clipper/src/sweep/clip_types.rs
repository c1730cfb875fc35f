//! Operation level configuration types.
use crate::bound::{Bound, PolygonType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Boolean operation to apply between the subject and clip polygon sets.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum ClipType {
    /// Area inside both subject and clip.
    #[default]
    Intersection,
    /// Area inside subject or clip.
    Union,
    /// Area inside subject but not clip.
    Difference,
    /// Area inside exactly one of subject or clip.
    Xor,
}

/// Rule deciding which winding counts are inside a polygon set.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum FillType {
    /// Odd winding counts are inside.
    #[default]
    EvenOdd,
    /// Any non zero winding count is inside.
    NonZero,
    /// Positive winding counts are inside.
    Positive,
    /// Negative winding counts are inside.
    Negative,
}

/// Struct to hold the configuration of one clip operation, fixed for the whole sweep.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClipOptions {
    pub clip_type: ClipType,
    pub subject_fill_type: FillType,
    pub clip_fill_type: FillType,
}

impl ClipOptions {
    #[inline]
    pub fn new(clip_type: ClipType, subject_fill_type: FillType, clip_fill_type: FillType) -> Self {
        Self {
            clip_type,
            subject_fill_type,
            clip_fill_type,
        }
    }

    /// Options using the same fill type for both polygon sets.
    #[inline]
    pub fn with_fill(clip_type: ClipType, fill_type: FillType) -> Self {
        Self::new(clip_type, fill_type, fill_type)
    }
}

/// `(own, other)` fill types for a bound of `poly_type`.
#[inline]
pub fn fill_types_for(
    poly_type: PolygonType,
    subject_fill_type: FillType,
    clip_fill_type: FillType,
) -> (FillType, FillType) {
    match poly_type {
        PolygonType::Subject => (subject_fill_type, clip_fill_type),
        PolygonType::Clip => (clip_fill_type, subject_fill_type),
    }
}

/// The bound's own polygon set uses even-odd filling.
#[inline]
pub fn is_even_odd_fill_type<T>(
    bound: &Bound<T>,
    subject_fill_type: FillType,
    clip_fill_type: FillType,
) -> bool {
    fill_types_for(bound.poly_type, subject_fill_type, clip_fill_type).0 == FillType::EvenOdd
}

/// The other polygon set uses even-odd filling.
#[inline]
pub fn is_even_odd_alt_fill_type<T>(
    bound: &Bound<T>,
    subject_fill_type: FillType,
    clip_fill_type: FillType,
) -> bool {
    fill_types_for(bound.poly_type, subject_fill_type, clip_fill_type).1 == FillType::EvenOdd
}
