use cavalier_clipper::{
    bound::{BoundArena, PolygonType::*},
    geometry::{point, Edge, Point, MAX_COORD},
    local_minimum::LocalMinimumList,
    ring, BuildError,
};

mod test_utils;
use test_utils::line_bound;

/// Every bound is linked to the bound it meets at its maximum and the link is mutual.
fn assert_maximum_links(bounds: &BoundArena<i64>) {
    for (idx, b) in bounds.iter() {
        let partner = b.maximum_bound.expect("every bound of a closed ring has a maximum partner");
        assert_ne!(partner, idx);
        assert_eq!(bounds[partner].maximum_bound, Some(idx));
        assert_eq!(
            b.edges.last().map(|e| e.top),
            bounds[partner].edges.last().map(|e| e.top),
            "bounds {:?} and {:?} do not meet",
            idx,
            partner
        );
    }
}

/// Consecutive edges of a bound join end to end walking upward.
fn assert_connected(edges: &[Edge<i64>]) {
    for w in edges.windows(2) {
        assert_eq!(w[0].top, w[1].bot, "bound edges not connected: {:?}", edges);
    }
}

#[test]
fn counter_clockwise_square() {
    let mut list = LocalMinimumList::new();
    let square: Vec<Point<i64>> = ring![(0, 0), (2, 0), (2, 2), (0, 2)];
    assert_eq!(list.add_ring(&square, Subject), Ok(true));
    assert_eq!(list.len(), 1);

    let lm = list.minima()[0];
    assert_eq!(lm.y, 0);
    assert!(lm.minimum_has_horizontal);

    let bounds = list.bounds();
    assert_eq!(bounds.len(), 2);
    let left = &bounds[lm.left_bound];
    let right = &bounds[lm.right_bound];
    assert_eq!(left.winding_delta, 1);
    assert_eq!(right.winding_delta, -1);
    assert_eq!(left.poly_type, Subject);
    assert_eq!(right.poly_type, Subject);

    assert_eq!(left.edges, vec![Edge::new(point(0, 0), point(0, 2))]);
    // bottom horizontal moved onto the right bound
    assert_eq!(right.edges.len(), 3);
    assert!(right.current_edge_is_horizontal());
    assert_eq!(right.edges[0].bot, point(0, 0));
    assert_eq!(right.edges[0].top, point(2, 0));
    assert_eq!(right.edges[1], Edge::new(point(2, 0), point(2, 2)));
    assert!(right.edges[2].is_horizontal());
    assert_connected(&right.edges);

    assert_eq!(left.maximum_bound, Some(lm.right_bound));
    assert_eq!(right.maximum_bound, Some(lm.left_bound));
}

#[test]
fn clockwise_square_winds_negative_on_the_left() {
    let mut list = LocalMinimumList::new();
    let square: Vec<Point<i64>> = ring![(0, 0), (0, 2), (2, 2), (2, 0)];
    assert_eq!(list.add_ring(&square, Clip), Ok(true));
    assert_eq!(list.len(), 1);

    let lm = list.minima()[0];
    let bounds = list.bounds();
    assert_eq!(bounds[lm.left_bound].winding_delta, -1);
    assert_eq!(bounds[lm.right_bound].winding_delta, 1);
    assert_eq!(bounds[lm.left_bound].edges[0], Edge::new(point(0, 0), point(0, 2)));
    assert!(bounds[lm.right_bound].current_edge_is_horizontal());
    assert_maximum_links(bounds);
}

#[test]
fn triangle_without_horizontals() {
    let mut list = LocalMinimumList::new();
    let tri: Vec<Point<i64>> = ring![(2, 0), (4, 3), (0, 5)];
    assert_eq!(list.add_ring(&tri, Subject), Ok(true));
    assert_eq!(list.len(), 1);

    let lm = list.minima()[0];
    assert_eq!(lm.y, 0);
    assert!(!lm.minimum_has_horizontal);

    let bounds = list.bounds();
    let left = &bounds[lm.left_bound];
    let right = &bounds[lm.right_bound];
    assert_eq!(left.edges, vec![Edge::new(point(2, 0), point(0, 5))]);
    assert_eq!(
        right.edges,
        vec![
            Edge::new(point(2, 0), point(4, 3)),
            Edge::new(point(4, 3), point(0, 5))
        ]
    );
    assert!(left.current_edge().dx < right.current_edge().dx);
    assert_eq!(left.winding_delta, 1);
    assert_eq!(left.current_x, 2.0);
    assert_maximum_links(bounds);
}

#[test]
fn ring_with_two_minima() {
    let mut list = LocalMinimumList::new();
    let w: Vec<Point<i64>> = ring![(0, 0), (2, 3), (4, 0), (5, 8), (-1, 9)];
    assert_eq!(list.add_ring(&w, Subject), Ok(true));
    assert_eq!(list.len(), 2);
    assert_eq!(list.bounds().len(), 4);

    let mut xs = Vec::new();
    for lm in list.minima() {
        assert_eq!(lm.y, 0);
        assert!(!lm.minimum_has_horizontal);
        let left = &list.bounds()[lm.left_bound];
        let right = &list.bounds()[lm.right_bound];
        assert_eq!(left.current_edge().bot, right.current_edge().bot);
        assert!(left.current_edge().dx < right.current_edge().dx);
        // counter clockwise ring
        assert_eq!(left.winding_delta, 1);
        assert_eq!(right.winding_delta, -1);
        xs.push(left.current_edge().bot.x);
    }
    xs.sort();
    assert_eq!(xs, vec![0, 4]);

    for (_, b) in list.bounds().iter() {
        assert_connected(&b.edges);
    }
    assert_maximum_links(list.bounds());

    // the inner peak joins the two minima
    let peak: Vec<_> = list
        .bounds()
        .iter()
        .filter(|(_, b)| b.edges.last().map(|e| e.top) == Some(point(2, 3)))
        .collect();
    assert_eq!(peak.len(), 2);
}

#[test]
fn duplicate_and_collinear_points_cleaned() {
    let mut list = LocalMinimumList::new();
    let noisy: Vec<Point<i64>> = ring![
        (0, 0),
        (0, 0),
        (1, 0),
        (2, 0),
        (2, 1),
        (2, 2),
        (0, 2),
        (0, 1),
        (0, 0)
    ];
    assert_eq!(list.add_ring(&noisy, Subject), Ok(true));
    assert_eq!(list.len(), 1);
    let edge_count: usize = list.bounds().iter().map(|(_, b)| b.edges.len()).sum();
    assert_eq!(edge_count, 4);
}

#[test]
fn degenerate_rings_skipped() {
    let mut list = LocalMinimumList::<i64>::new();
    assert_eq!(list.add_ring(&[point(0, 0), point(1, 1)], Subject), Ok(false));
    assert_eq!(
        list.add_ring(&[point(0, 0), point(1, 1), point(3, 3), point(2, 2)], Subject),
        Ok(false)
    );
    assert_eq!(list.add_ring(&[], Clip), Ok(false));
    assert!(list.is_empty());
    assert!(list.bounds().is_empty());
}

#[test]
fn coordinates_outside_range_rejected() {
    let mut list = LocalMinimumList::new();
    let huge: Vec<Point<i64>> = ring![(0, 0), (i64::MAX, 0), (0, 5)];
    assert_eq!(
        list.add_ring(&huge, Subject),
        Err(BuildError::CoordinateOutOfRange {
            ring_index: 0,
            x: i64::MAX as i128,
            y: 0
        })
    );
    assert!(list.is_empty());

    let low: Vec<Point<i64>> = ring![(0, 0), (5, 0), (0, i64::MIN)];
    assert!(matches!(
        list.add_ring(&low, Clip),
        Err(BuildError::CoordinateOutOfRange { ring_index: 1, .. })
    ));
}

#[test]
fn ring_at_range_limits() {
    let m = MAX_COORD as i64;
    let mut list = LocalMinimumList::new();
    // collinear midpoint on the full width diagonal is removed
    let big: Vec<Point<i64>> = ring![(-m, -m), (0, 0), (m, m), (-m, m)];
    assert_eq!(list.add_ring(&big, Subject), Ok(true));
    assert_eq!(list.len(), 1);
    let edge_count: usize = list.bounds().iter().map(|(_, b)| b.edges.len()).sum();
    assert_eq!(edge_count, 3);
    let lm = list.minima()[0];
    assert_eq!(lm.y, -m);
    assert_maximum_links(list.bounds());
}

#[test]
fn add_rings_counts_added() {
    let mut list = LocalMinimumList::new();
    let rings: Vec<Vec<Point<i64>>> = vec![
        ring![(0, 0), (2, 0), (2, 2), (0, 2)],
        ring![(5, 5), (6, 6), (7, 7)],
        ring![(2, 0), (4, 3), (0, 5)],
    ];
    assert_eq!(list.add_rings(&rings, Clip), Ok(2));
    assert_eq!(list.len(), 2);
    assert!(list.bounds().iter().all(|(_, b)| b.poly_type == Clip));
    assert_maximum_links(list.bounds());
}

#[test]
fn sort_minima_ascending_with_horizontals_first() {
    let mut list = LocalMinimumList::new();
    let mut push = |x: i64, y: i64, horizontal: bool| {
        list.push_bound_pair(
            line_bound(x, y, x - 1, y + 1, Subject, 1),
            line_bound(x, y, x + 1, y + 1, Subject, -1),
            y,
            horizontal,
        )
        .0
    };
    let a = push(0, 4, false);
    let b = push(1, -2, false);
    let c = push(2, 4, true);
    let d = push(3, 0, false);
    let e = push(4, 4, false);

    list.sort_minima();
    let order: Vec<_> = list.minima().iter().map(|lm| lm.left_bound).collect();
    assert_eq!(order, vec![b, d, c, a, e]);
}

#[test]
fn build_error_messages() {
    assert_eq!(
        BuildError::SingleBound { ring_index: 3 }.to_string(),
        "ring 3 produced a single bound, edges exhausted before reaching a maximum"
    );
    assert_eq!(
        BuildError::HorizontalOnlyBound { ring_index: 0 }.to_string(),
        "ring 0 produced a bound with only horizontal edges"
    );
}
