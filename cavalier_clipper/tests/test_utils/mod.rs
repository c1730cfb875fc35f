#![allow(dead_code)]

use cavalier_clipper::{
    bound::{Bound, BoundArena, BoundIdx, PolygonType},
    geometry::{point, Edge},
    sweep::{
        insert_bound_into_abl, insert_lm_left_and_right_bound, ActiveBoundList, ClipOptions,
        RingStarts, Scanbeam,
    },
};

/// Bound made of a single edge between the two points.
pub fn line_bound(
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    poly_type: PolygonType,
    winding_delta: i32,
) -> Bound<i64> {
    Bound::new(
        vec![Edge::new(point(x0, y0), point(x1, y1))],
        poly_type,
        winding_delta,
    )
}

/// Vertical bound at `x` spanning y 0 to 10.
pub fn vertical_bound(x: i64, poly_type: PolygonType, winding_delta: i32) -> Bound<i64> {
    line_bound(x, 0, x, 10, poly_type, winding_delta)
}

/// Bounds, active bound list, scanbeam and ring manager for driving the engine directly.
#[derive(Debug, Default)]
pub struct AblFixture {
    pub bounds: BoundArena<i64>,
    pub abl: ActiveBoundList,
    pub scanbeam: Scanbeam<i64>,
    pub rings: RingStarts<i64>,
}

impl AblFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair with ordering only (no winding evaluation).
    pub fn insert_pair(
        &mut self,
        left: Bound<i64>,
        right: Bound<i64>,
    ) -> (BoundIdx, BoundIdx, usize) {
        let l = self.bounds.push(left);
        let r = self.bounds.push(right);
        let pos = insert_bound_into_abl(l, r, &self.bounds, &mut self.abl);
        (l, r, pos)
    }

    /// Insert a pair the way a local minimum is inserted.
    pub fn insert_lm(
        &mut self,
        left: Bound<i64>,
        right: Bound<i64>,
        options: &ClipOptions,
    ) -> (BoundIdx, BoundIdx, usize) {
        let l = self.bounds.push(left);
        let r = self.bounds.push(right);
        let pos = insert_lm_left_and_right_bound(
            l,
            r,
            &mut self.bounds,
            &mut self.abl,
            &mut self.rings,
            &mut self.scanbeam,
            options,
        );
        (l, r, pos)
    }

    pub fn xs(&self) -> Vec<f64> {
        self.abl.iter().map(|&b| self.bounds[b].current_x).collect()
    }

    pub fn order(&self) -> Vec<BoundIdx> {
        self.abl.as_slice().to_vec()
    }
}

/// Asserts the active bound x positions never decrease (within fuzzy tolerance).
pub fn assert_non_decreasing(xs: &[f64]) {
    for w in xs.windows(2) {
        assert!(
            w[0] < w[1] || cavalier_clipper::core::math::values_are_equal(w[0], w[1]),
            "active bound list out of order: {:?}",
            xs
        );
    }
}
