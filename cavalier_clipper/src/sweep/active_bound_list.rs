//! Ordered list of the bounds crossing the current sweep line.
use std::ops::Index;

use super::Scanbeam;
use crate::{
    bound::{Bound, BoundArena, BoundIdx},
    core::{math::values_are_equal, traits::Coord},
};

/// Bounds currently crossing the sweep line, ordered left to right by their x position at the
/// current sweep y.
///
/// Holds handles only, the bounds themselves live in a [BoundArena].
#[derive(Debug, Clone, Default)]
pub struct ActiveBoundList {
    bounds: Vec<BoundIdx>,
}

impl ActiveBoundList {
    #[inline]
    pub fn new() -> Self {
        Self { bounds: Vec::new() }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, BoundIdx> {
        self.bounds.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[BoundIdx] {
        &self.bounds
    }

    /// Position of `bound` in the list.
    #[inline]
    pub fn position(&self, bound: BoundIdx) -> Option<usize> {
        self.bounds.iter().position(|&b| b == bound)
    }

    /// Remove the bound at `pos`, used once a bound reaches its maximum.
    #[inline]
    pub fn remove(&mut self, pos: usize) -> BoundIdx {
        self.bounds.remove(pos)
    }

    /// Exchange the bounds at `a` and `b`, used when two bounds cross between scanbeams.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.bounds.swap(a, b);
    }
}

impl Index<usize> for ActiveBoundList {
    type Output = BoundIdx;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.bounds[index]
    }
}

impl<'a> IntoIterator for &'a ActiveBoundList {
    type Item = &'a BoundIdx;
    type IntoIter = std::slice::Iter<'a, BoundIdx>;

    fn into_iter(self) -> Self::IntoIter {
        self.bounds.iter()
    }
}

/// Returns `true` if `new_bound` belongs to the left of `existing`.
///
/// When both sit at the same x (within [values_are_equal]) the bound whose current edge tops out
/// higher is extrapolated to the lower top and the x values are compared there.
pub fn bound_insert_location<T>(existing: &Bound<T>, new_bound: &Bound<T>) -> bool
where
    T: Coord,
{
    if values_are_equal(new_bound.current_x, existing.current_x) {
        let new_edge = new_bound.current_edge();
        let existing_edge = existing.current_edge();
        if new_edge.top.y < existing_edge.top.y {
            new_edge.top.x.as_f64() < existing_edge.current_x_at(new_edge.top.y)
        } else {
            existing_edge.top.x.as_f64() > new_edge.current_x_at(existing_edge.top.y)
        }
    } else {
        new_bound.current_x < existing.current_x
    }
}

/// Insert the bound pair of a local minimum as one contiguous block, `right` directly after
/// `left`. Returns the position of `left`.
///
/// # Panics
///
/// Panics if the left bound's `current_x` is NaN, there is no valid place for it in the list.
pub fn insert_bound_into_abl<T>(
    left: BoundIdx,
    right: BoundIdx,
    bounds: &BoundArena<T>,
    abl: &mut ActiveBoundList,
) -> usize
where
    T: Coord,
{
    assert_ne!(left, right, "local minimum must insert two distinct bounds");
    let new_bound = &bounds[left];
    assert!(
        !new_bound.current_x.is_nan(),
        "bound current_x is NaN, active bound order undefined"
    );

    let pos = abl
        .bounds
        .iter()
        .position(|&b| bound_insert_location(&bounds[b], new_bound))
        .unwrap_or(abl.bounds.len());
    abl.bounds.splice(pos..pos, [left, right]);
    log::trace!("inserted bounds {left:?}, {right:?} into active bound list at {pos}");
    pos
}

/// Move the bound onto its next edge.
///
/// `current_x` becomes the bottom x of the new edge and, unless the new edge is horizontal, its
/// top y is pushed onto `scanbeam`. Horizontal edges are revisited through horizontal
/// processing instead.
pub fn next_edge_in_bound<T>(bound: &mut Bound<T>, scanbeam: &mut Scanbeam<T>)
where
    T: Coord,
{
    bound.current_edge += 1;
    if let Some(edge) = bound.edges.get(bound.current_edge) {
        bound.current_x = edge.bot.x.as_f64();
        if !edge.is_horizontal() {
            scanbeam.push(edge.top.y);
        }
    }
}

/// Position of the bound that `abl[pos]` meets at its maximum, `None` if that bound is not
/// active (not yet inserted or already removed).
pub fn get_maxima_pair<T>(
    pos: usize,
    abl: &ActiveBoundList,
    bounds: &BoundArena<T>,
) -> Option<usize>
where
    T: Coord,
{
    let maximum = bounds[abl[pos]].maximum_bound?;
    abl.position(maximum)
}

/// Same as [get_maxima_pair] for callers whose invariants require the partner to be active.
///
/// # Panics
///
/// Panics if the maxima partner is not in the active bound list.
pub fn expect_maxima_pair<T>(pos: usize, abl: &ActiveBoundList, bounds: &BoundArena<T>) -> usize
where
    T: Coord,
{
    match get_maxima_pair(pos, abl, bounds) {
        Some(p) => p,
        None => panic!(
            "maxima pair of bound {:?} is not active, bounds were constructed inconsistently",
            abl[pos]
        ),
    }
}

/// Re-evaluate `current_x` of every active bound at sweep line `y`.
pub fn update_current_x<T>(abl: &ActiveBoundList, bounds: &mut BoundArena<T>, y: T)
where
    T: Coord,
{
    for &idx in abl {
        let bound = &mut bounds[idx];
        bound.current_x = bound.current_edge().current_x_at(y);
    }
}
