//! Active bound list and winding rule engine driven by a Vatti style sweep.
//!
//! The sweep driver calls into this module once per scanbeam: new local minima are inserted in
//! left to right order, given winding counts relative to both polygon sets and classified as
//! contributing to the output or not.
mod active_bound_list;
mod clip_types;
mod contributing;
mod ingest;
mod ring_manager;
mod scanbeam;
mod winding;

pub use active_bound_list::*;
pub use clip_types::*;
pub use contributing::*;
pub use ingest::*;
pub use ring_manager::*;
pub use scanbeam::*;
pub use winding::*;

use crate::{
    bound::{Bound, BoundArena, BoundIdx},
    core::traits::Coord,
    local_minimum::LocalMinimumList,
};

/// State of one clip operation: the local minima (owning all bounds), the active bound list,
/// the scanbeam, the forward cursor into the sorted minima and the ring manager.
///
/// Nothing here is shared between operations so independent operations may run on separate
/// threads.
#[derive(Debug, Clone)]
pub struct ClipSweep<T = i64, R = RingStarts<T>> {
    minima: LocalMinimumList<T>,
    abl: ActiveBoundList,
    scanbeam: Scanbeam<T>,
    current_lm: usize,
    rings: R,
    options: ClipOptions,
}

impl<T, R> ClipSweep<T, R>
where
    T: Coord,
    R: RingManager<T>,
{
    /// Sort the minima and seed the scanbeam with their y values.
    pub fn new(mut minima: LocalMinimumList<T>, options: ClipOptions, rings: R) -> Self {
        minima.sort_minima();
        let scanbeam = Scanbeam::setup(minima.minima());
        log::debug!(
            "clip sweep with {} local minima, options: {:?}",
            minima.len(),
            options
        );
        Self {
            minima,
            abl: ActiveBoundList::new(),
            scanbeam,
            current_lm: 0,
            rings,
            options,
        }
    }

    /// Next sweep y to visit.
    #[inline]
    pub fn pop_scanbeam(&mut self) -> Option<T> {
        self.scanbeam.pop_next()
    }

    /// `true` while local minima remain to be inserted.
    #[inline]
    pub fn has_pending_minima(&self) -> bool {
        self.current_lm < self.minima.len()
    }

    /// Insert the local minima whose y is `bot_y`.
    pub fn insert_local_minima(&mut self, bot_y: T) {
        let (minima_sorted, bounds) = self.minima.split_mut();
        insert_local_minima_into_abl(
            bot_y,
            minima_sorted,
            &mut self.current_lm,
            bounds,
            &mut self.abl,
            &mut self.rings,
            &mut self.scanbeam,
            &self.options,
        );
    }

    /// Insert the local minima at `top_y` that start with a horizontal edge.
    pub fn insert_horizontal_local_minima(&mut self, top_y: T) {
        let (minima_sorted, bounds) = self.minima.split_mut();
        insert_horizontal_local_minima_into_abl(
            top_y,
            minima_sorted,
            &mut self.current_lm,
            bounds,
            &mut self.abl,
            &mut self.rings,
            &mut self.scanbeam,
            &self.options,
        );
    }

    /// Move `bound` onto its next edge, see [next_edge_in_bound].
    pub fn advance_bound(&mut self, bound: BoundIdx) {
        next_edge_in_bound(&mut self.minima.bounds_mut()[bound], &mut self.scanbeam);
    }

    /// Move every active bound to its x position at sweep line `y`.
    pub fn update_current_x(&mut self, y: T) {
        update_current_x(&self.abl, self.minima.bounds_mut(), y);
    }

    /// Active bounds in left to right order.
    pub fn active_bounds(&self) -> impl Iterator<Item = &Bound<T>> + '_ {
        let bounds = self.minima.bounds();
        self.abl.iter().map(move |&idx| &bounds[idx])
    }

    #[inline]
    pub fn abl(&self) -> &ActiveBoundList {
        &self.abl
    }

    /// Split borrow for driver steps that edit the active bound list and bounds together.
    #[inline]
    pub fn abl_and_bounds_mut(&mut self) -> (&mut ActiveBoundList, &mut BoundArena<T>) {
        (&mut self.abl, self.minima.bounds_mut())
    }

    #[inline]
    pub fn bounds(&self) -> &BoundArena<T> {
        self.minima.bounds()
    }

    #[inline]
    pub fn bounds_mut(&mut self) -> &mut BoundArena<T> {
        self.minima.bounds_mut()
    }

    #[inline]
    pub fn minima(&self) -> &LocalMinimumList<T> {
        &self.minima
    }

    #[inline]
    pub fn scanbeam(&self) -> &Scanbeam<T> {
        &self.scanbeam
    }

    #[inline]
    pub fn scanbeam_mut(&mut self) -> &mut Scanbeam<T> {
        &mut self.scanbeam
    }

    /// Index of the next local minimum to insert.
    #[inline]
    pub fn current_lm(&self) -> usize {
        self.current_lm
    }

    #[inline]
    pub fn rings(&self) -> &R {
        &self.rings
    }

    #[inline]
    pub fn options(&self) -> &ClipOptions {
        &self.options
    }
}
