use crate::{
    bound::{BoundArena, BoundIdx, EdgeSide, RingIdx},
    core::traits::Coord,
    geometry::Point,
};

/// Receiver of the output boundary chains started by contributing local minima.
pub trait RingManager<T>
where
    T: Coord,
{
    /// A contributing bound pair starts at `pt`, the bottom point of its local minimum.
    fn add_local_minimum_point(
        &mut self,
        bounds: &mut BoundArena<T>,
        left: BoundIdx,
        right: BoundIdx,
        pt: Point<T>,
    );
}

/// Output ring opened at a local minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct RingStart<T = i64> {
    pub index: RingIdx,
    /// Bottom point of the minimum.
    pub point: Point<T>,
    /// Bound that received the point first.
    pub first_bound: BoundIdx,
    pub second_bound: BoundIdx,
}

/// [RingManager] that opens one ring per contributing local minimum and tags the bound pair with
/// it.
#[derive(Debug, Clone, Default)]
pub struct RingStarts<T = i64> {
    rings: Vec<RingStart<T>>,
}

impl<T> RingStarts<T>
where
    T: Coord,
{
    pub fn new() -> Self {
        Self { rings: Vec::new() }
    }

    #[inline]
    pub fn rings(&self) -> &[RingStart<T>] {
        &self.rings
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rings.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

impl<T> RingManager<T> for RingStarts<T>
where
    T: Coord,
{
    fn add_local_minimum_point(
        &mut self,
        bounds: &mut BoundArena<T>,
        left: BoundIdx,
        right: BoundIdx,
        pt: Point<T>,
    ) {
        let index = RingIdx(self.rings.len());
        let (b1, b2) = bounds.pair_mut(left, right);
        let left_first =
            b2.current_edge_is_horizontal() || b1.current_edge().dx < b2.current_edge().dx;
        b1.ring = Some(index);
        b2.ring = Some(index);
        let (first_bound, second_bound) = if left_first {
            b1.side = EdgeSide::Left;
            b2.side = EdgeSide::Right;
            (left, right)
        } else {
            b1.side = EdgeSide::Right;
            b2.side = EdgeSide::Left;
            (right, left)
        };

        log::debug!("ring {} started at ({}, {})", index.0, pt.x, pt.y);
        self.rings.push(RingStart {
            index,
            point: pt,
            first_bound,
            second_bound,
        });
    }
}
