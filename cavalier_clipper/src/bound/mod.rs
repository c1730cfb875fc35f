//! Bounds (monotonic edge chains) and the arena that owns them for a clip operation.
use std::ops::{Index, IndexMut};

use crate::{core::traits::Coord, geometry::Edge};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which input polygon set a bound came from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PolygonType {
    #[default]
    Subject,
    Clip,
}

/// Side of an output ring a bound is currently building.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EdgeSide {
    #[default]
    Left,
    Right,
}

/// Handle of a bound stored in a [BoundArena].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoundIdx(pub usize);

/// Handle of an output ring opened by a [RingManager](crate::sweep::RingManager).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RingIdx(pub usize);

/// Monotonic chain of edges of one ring, walked upward from a local minimum to a local maximum.
#[derive(Debug, Clone)]
pub struct Bound<T = i64> {
    pub edges: Vec<Edge<T>>,
    /// Index of the current edge in `edges`, the next edge is always at `current_edge + 1`.
    pub current_edge: usize,
    /// X position of the current edge at the active sweep y.
    pub current_x: f64,
    pub poly_type: PolygonType,
    /// `+1` or `-1` depending on ring orientation.
    pub winding_delta: i32,
    /// Winding count with respect to the bound's own polygon type.
    pub winding_count: i32,
    /// Winding count with respect to the other polygon type.
    pub winding_count2: i32,
    /// Bound this one meets at its local maximum.
    pub maximum_bound: Option<BoundIdx>,
    pub ring: Option<RingIdx>,
    pub side: EdgeSide,
}

impl<T> Bound<T>
where
    T: Coord,
{
    pub fn new(edges: Vec<Edge<T>>, poly_type: PolygonType, winding_delta: i32) -> Self {
        debug_assert!(winding_delta == 1 || winding_delta == -1);
        let current_x = edges.first().map_or(0.0, |e| e.bot.x.as_f64());
        Self {
            edges,
            current_edge: 0,
            current_x,
            poly_type,
            winding_delta,
            winding_count: 0,
            winding_count2: 0,
            maximum_bound: None,
            ring: None,
            side: EdgeSide::Left,
        }
    }

    /// Current edge of the bound.
    ///
    /// # Panics
    ///
    /// Panics if the bound has been walked past its last edge.
    #[inline]
    pub fn current_edge(&self) -> &Edge<T> {
        &self.edges[self.current_edge]
    }

    #[inline]
    pub fn next_edge(&self) -> Option<&Edge<T>> {
        self.edges.get(self.current_edge + 1)
    }

    /// `true` once the edge cursor has moved past the last edge.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.current_edge >= self.edges.len()
    }

    /// The bound terminates at sweep line `y` (no edge after the current one and the current
    /// edge tops out at `y`).
    #[inline]
    pub fn is_maxima(&self, y: T) -> bool {
        self.next_edge().is_none() && self.current_edge().top.y == y
    }

    /// The bound continues with a new edge at sweep line `y`.
    #[inline]
    pub fn is_intermediate(&self, y: T) -> bool {
        self.next_edge().is_some() && self.current_edge().top.y == y
    }

    #[inline]
    pub fn current_edge_is_horizontal(&self) -> bool {
        self.current_edge().is_horizontal()
    }

    #[inline]
    pub fn next_edge_is_horizontal(&self) -> bool {
        self.next_edge().is_some_and(|e| e.is_horizontal())
    }

    /// Reset the bound to the bottom of its first edge with cleared winding state.
    pub fn initialize(&mut self, side: EdgeSide) {
        if self.edges.is_empty() {
            return;
        }
        self.current_edge = 0;
        self.current_x = self.edges[0].bot.x.as_f64();
        self.winding_count = 0;
        self.winding_count2 = 0;
        self.side = side;
        self.ring = None;
    }
}

/// Owns every bound of a clip operation, bounds are addressed by [BoundIdx] so the active bound
/// list and `maximum_bound` links never hold references.
#[derive(Debug, Clone, Default)]
pub struct BoundArena<T = i64> {
    bounds: Vec<Bound<T>>,
}

impl<T> BoundArena<T>
where
    T: Coord,
{
    #[inline]
    pub fn new() -> Self {
        Self { bounds: Vec::new() }
    }

    pub fn push(&mut self, bound: Bound<T>) -> BoundIdx {
        self.bounds.push(bound);
        BoundIdx(self.bounds.len() - 1)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Mutable access to two distinct bounds at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: BoundIdx, b: BoundIdx) -> (&mut Bound<T>, &mut Bound<T>) {
        assert_ne!(a, b, "bound pair must be two distinct bounds");
        if a.0 < b.0 {
            let (lo, hi) = self.bounds.split_at_mut(b.0);
            (&mut lo[a.0], &mut hi[0])
        } else {
            let (lo, hi) = self.bounds.split_at_mut(a.0);
            (&mut hi[0], &mut lo[b.0])
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (BoundIdx, &Bound<T>)> {
        self.bounds.iter().enumerate().map(|(i, b)| (BoundIdx(i), b))
    }
}

impl<T> Index<BoundIdx> for BoundArena<T> {
    type Output = Bound<T>;

    #[inline]
    fn index(&self, index: BoundIdx) -> &Self::Output {
        &self.bounds[index.0]
    }
}

impl<T> IndexMut<BoundIdx> for BoundArena<T> {
    #[inline]
    fn index_mut(&mut self, index: BoundIdx) -> &mut Self::Output {
        &mut self.bounds[index.0]
    }
}
