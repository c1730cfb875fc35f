use super::{
    insert_bound_into_abl, is_contributing, set_winding_count, ActiveBoundList, ClipOptions,
    RingManager, Scanbeam,
};
use crate::{
    bound::{BoundArena, BoundIdx},
    core::traits::Coord,
    local_minimum::{initialize_lm, LocalMinimum},
};

/// Insert the two bounds of one local minimum, give them their shared winding state and start a
/// ring if they contribute to the output.
///
/// Returns the position of `left` in the active bound list (`right` follows it).
pub fn insert_lm_left_and_right_bound<T, R>(
    left: BoundIdx,
    right: BoundIdx,
    bounds: &mut BoundArena<T>,
    abl: &mut ActiveBoundList,
    rings: &mut R,
    scanbeam: &mut Scanbeam<T>,
    options: &ClipOptions,
) -> usize
where
    T: Coord,
    R: RingManager<T>,
{
    let lb_pos = insert_bound_into_abl(left, right, bounds, abl);
    let rb_pos = lb_pos + 1;
    debug_assert_eq!(abl[rb_pos], right);

    set_winding_count(
        lb_pos,
        abl,
        bounds,
        options.subject_fill_type,
        options.clip_fill_type,
    );
    let (lb, rb) = bounds.pair_mut(left, right);
    rb.winding_count = lb.winding_count;
    rb.winding_count2 = lb.winding_count2;

    if is_contributing(
        lb,
        options.clip_type,
        options.subject_fill_type,
        options.clip_fill_type,
    ) {
        let pt = lb.current_edge().bot;
        rings.add_local_minimum_point(bounds, left, right, pt);
    }

    scanbeam.push(bounds[left].current_edge().top.y);
    if !bounds[right].current_edge_is_horizontal() {
        scanbeam.push(bounds[right].current_edge().top.y);
    }

    lb_pos
}

/// Insert every not yet consumed local minimum at `bot_y`, advancing `current_lm`.
///
/// `minima_sorted` must be sorted ascending by y, `current_lm` only ever moves forward.
#[allow(clippy::too_many_arguments)]
pub fn insert_local_minima_into_abl<T, R>(
    bot_y: T,
    minima_sorted: &[LocalMinimum<T>],
    current_lm: &mut usize,
    bounds: &mut BoundArena<T>,
    abl: &mut ActiveBoundList,
    rings: &mut R,
    scanbeam: &mut Scanbeam<T>,
    options: &ClipOptions,
) where
    T: Coord,
    R: RingManager<T>,
{
    insert_minima_while(
        |lm| lm.y == bot_y,
        minima_sorted,
        current_lm,
        bounds,
        abl,
        rings,
        scanbeam,
        options,
    );
}

/// Same as [insert_local_minima_into_abl] keyed on the top of the scanbeam and limited to minima
/// with a horizontal bottom edge, used while processing horizontals.
#[allow(clippy::too_many_arguments)]
pub fn insert_horizontal_local_minima_into_abl<T, R>(
    top_y: T,
    minima_sorted: &[LocalMinimum<T>],
    current_lm: &mut usize,
    bounds: &mut BoundArena<T>,
    abl: &mut ActiveBoundList,
    rings: &mut R,
    scanbeam: &mut Scanbeam<T>,
    options: &ClipOptions,
) where
    T: Coord,
    R: RingManager<T>,
{
    insert_minima_while(
        |lm| lm.y == top_y && lm.minimum_has_horizontal,
        minima_sorted,
        current_lm,
        bounds,
        abl,
        rings,
        scanbeam,
        options,
    );
}

#[allow(clippy::too_many_arguments)]
fn insert_minima_while<T, R, F>(
    mut pred: F,
    minima_sorted: &[LocalMinimum<T>],
    current_lm: &mut usize,
    bounds: &mut BoundArena<T>,
    abl: &mut ActiveBoundList,
    rings: &mut R,
    scanbeam: &mut Scanbeam<T>,
    options: &ClipOptions,
) where
    T: Coord,
    R: RingManager<T>,
    F: FnMut(&LocalMinimum<T>) -> bool,
{
    while let Some(lm) = minima_sorted.get(*current_lm) {
        if !pred(lm) {
            break;
        }
        log::debug!(
            "inserting local minimum {} at y = {} (horizontal: {})",
            *current_lm,
            lm.y,
            lm.minimum_has_horizontal
        );
        initialize_lm(lm, bounds);
        insert_lm_left_and_right_bound(
            lm.left_bound,
            lm.right_bound,
            bounds,
            abl,
            rings,
            scanbeam,
            options,
        );
        *current_lm += 1;
    }
}
