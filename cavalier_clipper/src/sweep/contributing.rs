use super::{fill_types_for, ClipType, FillType};
use crate::bound::{Bound, PolygonType};

/// Returns `true` if the bound forms part of the output boundary for `clip_type`.
///
/// The bound must first be on the boundary of its own polygon set (per its own fill type), then
/// the winding count of the other polygon set decides based on the operation. Difference keeps
/// subject bounds outside the clip set and clip bounds inside the subject set.
pub fn is_contributing<T>(
    bound: &Bound<T>,
    clip_type: ClipType,
    subject_fill_type: FillType,
    clip_fill_type: FillType,
) -> bool {
    let (pft, pft2) = fill_types_for(bound.poly_type, subject_fill_type, clip_fill_type);

    let own_boundary = match pft {
        FillType::EvenOdd => true,
        FillType::NonZero => bound.winding_count.abs() == 1,
        FillType::Positive => bound.winding_count == 1,
        FillType::Negative => bound.winding_count == -1,
    };
    if !own_boundary {
        return false;
    }

    let wc2 = bound.winding_count2;
    let inside_other = || match pft2 {
        FillType::EvenOdd | FillType::NonZero => wc2 != 0,
        FillType::Positive => wc2 > 0,
        FillType::Negative => wc2 < 0,
    };
    let outside_other = || match pft2 {
        FillType::EvenOdd | FillType::NonZero => wc2 == 0,
        FillType::Positive => wc2 <= 0,
        FillType::Negative => wc2 >= 0,
    };

    match clip_type {
        ClipType::Intersection => inside_other(),
        ClipType::Union => outside_other(),
        ClipType::Difference => match bound.poly_type {
            PolygonType::Subject => outside_other(),
            PolygonType::Clip => inside_other(),
        },
        ClipType::Xor => true,
    }
}
