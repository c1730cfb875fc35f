use super::{is_even_odd_alt_fill_type, is_even_odd_fill_type, ActiveBoundList, FillType};
use crate::{bound::BoundArena, core::traits::Coord};

/// Compute `winding_count` and `winding_count2` for the bound at `pos` in the active bound list
/// from the bounds to its left.
///
/// The own count continues from the nearest bound to the left of the same polygon type, the other
/// count accumulates every bound of the other type between that bound and `pos` (toggled
/// between 0 and 1 when the other type is filled even-odd).
pub fn set_winding_count<T>(
    pos: usize,
    abl: &ActiveBoundList,
    bounds: &mut BoundArena<T>,
    subject_fill_type: FillType,
    clip_fill_type: FillType,
) where
    T: Coord,
{
    let bnd_idx = abl[pos];
    if pos == 0 {
        let bnd = &mut bounds[bnd_idx];
        bnd.winding_count = bnd.winding_delta;
        bnd.winding_count2 = 0;
        return;
    }

    let poly_type = bounds[bnd_idx].poly_type;
    let winding_delta = bounds[bnd_idx].winding_delta;
    let prev_pos = abl.as_slice()[..pos]
        .iter()
        .rposition(|&b| bounds[b].poly_type == poly_type);

    let (winding_count, mut winding_count2) = match prev_pos {
        None => (winding_delta, 0),
        Some(p) => {
            let prev = &bounds[abl[p]];
            if is_even_odd_fill_type(&bounds[bnd_idx], subject_fill_type, clip_fill_type) {
                (winding_delta, prev.winding_count2)
            } else {
                let reversing = prev.winding_delta * winding_delta < 0;
                let wc = if prev.winding_count * prev.winding_delta < 0 {
                    // previous bound winds back toward zero, we are outside it
                    if prev.winding_count.abs() > 1 {
                        // still inside another polygon of the same type
                        if reversing {
                            prev.winding_count
                        } else {
                            prev.winding_count + winding_delta
                        }
                    } else {
                        // outside every polygon of the same type
                        winding_delta
                    }
                } else if reversing {
                    prev.winding_count
                } else {
                    prev.winding_count + winding_delta
                };
                (wc, prev.winding_count2)
            }
        }
    };

    let start = prev_pos.map_or(0, |p| p + 1);
    let others = &abl.as_slice()[start..pos];
    if is_even_odd_alt_fill_type(&bounds[bnd_idx], subject_fill_type, clip_fill_type) {
        for _ in others {
            winding_count2 = if winding_count2 == 0 { 1 } else { 0 };
        }
    } else {
        for &b in others {
            winding_count2 += bounds[b].winding_delta;
        }
    }

    let bnd = &mut bounds[bnd_idx];
    bnd.winding_count = winding_count;
    bnd.winding_count2 = winding_count2;
    log::trace!(
        "bound {bnd_idx:?} winding_count {winding_count}, winding_count2 {winding_count2}"
    );
}
