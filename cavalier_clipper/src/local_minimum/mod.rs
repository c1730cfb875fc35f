//! Local minima of the input rings and the list that owns their bounds.
mod build;

pub use build::build_edge_list;

use crate::{
    bound::{Bound, BoundArena, BoundIdx, EdgeSide, PolygonType},
    core::traits::Coord,
    error::BuildError,
    geometry::{in_coord_range, Point},
};

/// Valley of a ring where a left and a right bound start.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LocalMinimum<T = i64> {
    pub y: T,
    pub left_bound: BoundIdx,
    pub right_bound: BoundIdx,
    /// The bottom edge of either bound is horizontal.
    pub minimum_has_horizontal: bool,
}

/// Owns all bounds of a clip operation together with the local minima they start from.
#[derive(Debug, Clone, Default)]
pub struct LocalMinimumList<T = i64> {
    bounds: BoundArena<T>,
    minima: Vec<LocalMinimum<T>>,
    ring_count: usize,
}

impl<T> LocalMinimumList<T>
where
    T: Coord,
{
    pub fn new() -> Self {
        Self {
            bounds: BoundArena::new(),
            minima: Vec::new(),
            ring_count: 0,
        }
    }

    /// Add a local minimum from an already constructed bound pair.
    ///
    /// The left bound should be the one that lies to the left just above `y`. `maximum_bound`
    /// links are left to the caller.
    pub fn push_bound_pair(
        &mut self,
        left: Bound<T>,
        right: Bound<T>,
        y: T,
        minimum_has_horizontal: bool,
    ) -> (BoundIdx, BoundIdx) {
        let left_bound = self.bounds.push(left);
        let right_bound = self.bounds.push(right);
        self.minima.push(LocalMinimum {
            y,
            left_bound,
            right_bound,
            minimum_has_horizontal,
        });
        (left_bound, right_bound)
    }

    /// Decompose a closed ring into bounds and add its local minima.
    ///
    /// Returns `Ok(false)` if the ring collapses to fewer than 3 distinct, non collinear points
    /// and nothing was added. Every point must lie within
    /// [MAX_COORD](crate::geometry::MAX_COORD).
    pub fn add_ring(
        &mut self,
        ring: &[Point<T>],
        poly_type: PolygonType,
    ) -> Result<bool, BuildError> {
        let ring_index = self.ring_count;
        self.ring_count += 1;
        if let Some(pt) = ring.iter().find(|&&pt| !in_coord_range(pt)) {
            return Err(BuildError::CoordinateOutOfRange {
                ring_index,
                x: pt.x.as_wide(),
                y: pt.y.as_wide(),
            });
        }
        let Some(edges) = build_edge_list(ring) else {
            log::warn!("skipping degenerate {poly_type:?} ring {ring_index}");
            return Ok(false);
        };

        build::add_ring_to_local_minima_list(self, edges, poly_type, ring_index)?;
        Ok(true)
    }

    /// Add each ring in `rings`, returns how many were added (degenerate rings are skipped).
    pub fn add_rings<R>(&mut self, rings: &[R], poly_type: PolygonType) -> Result<usize, BuildError>
    where
        R: AsRef<[Point<T>]>,
    {
        let mut added = 0;
        for ring in rings {
            if self.add_ring(ring.as_ref(), poly_type)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Stable sort of the minima by ascending y, at the same y minima with a horizontal bottom
    /// edge come first.
    pub fn sort_minima(&mut self) {
        self.minima.sort_by(|a, b| {
            a.y.cmp(&b.y)
                .then_with(|| b.minimum_has_horizontal.cmp(&a.minimum_has_horizontal))
        });
    }

    #[inline]
    pub fn minima(&self) -> &[LocalMinimum<T>] {
        &self.minima
    }

    #[inline]
    pub fn bounds(&self) -> &BoundArena<T> {
        &self.bounds
    }

    #[inline]
    pub fn bounds_mut(&mut self) -> &mut BoundArena<T> {
        &mut self.bounds
    }

    /// Split borrow of the (sorted) minima and the bound arena, used while inserting minima.
    #[inline]
    pub fn split_mut(&mut self) -> (&[LocalMinimum<T>], &mut BoundArena<T>) {
        (&self.minima, &mut self.bounds)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.minima.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.minima.is_empty()
    }
}

/// Reset both bounds of `lm` so they start at the bottom of their first edge, left bound on the
/// left side and right bound on the right side.
pub fn initialize_lm<T>(lm: &LocalMinimum<T>, bounds: &mut BoundArena<T>)
where
    T: Coord,
{
    bounds[lm.left_bound].initialize(EdgeSide::Left);
    bounds[lm.right_bound].initialize(EdgeSide::Right);
}
