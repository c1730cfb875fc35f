//! Decomposition of closed rings into bound pairs starting at local minima.
use super::LocalMinimumList;
use crate::{
    bound::{Bound, BoundIdx, PolygonType},
    core::traits::Coord,
    error::BuildError,
    geometry::{slopes_equal, Edge, Point},
};

/// Build the edges of a closed ring.
///
/// Consecutive duplicate points and points collinear with their neighbours (including spikes)
/// are removed first. Returns `None` if fewer than 3 points remain. Points are expected within
/// [MAX_COORD](crate::geometry::MAX_COORD).
///
/// # Examples
///
/// ```
/// # use cavalier_clipper::geometry::*;
/// # use cavalier_clipper::local_minimum::build_edge_list;
/// // the duplicate and the collinear midpoint are dropped
/// let ring = [point(0, 0), point(0, 0), point(2, 0), point(4, 0), point(4, 4)];
/// let edges = build_edge_list(&ring).unwrap();
/// assert_eq!(edges.len(), 3);
///
/// assert!(build_edge_list(&[point(0, 0), point(1, 1), point(2, 2)]).is_none());
/// ```
pub fn build_edge_list<T>(ring: &[Point<T>]) -> Option<Vec<Edge<T>>>
where
    T: Coord,
{
    let pts = clean_ring(ring);
    if pts.len() < 3 {
        return None;
    }

    let n = pts.len();
    Some(
        (0..n)
            .map(|i| Edge::new(pts[i], pts[(i + 1) % n]))
            .collect(),
    )
}

fn clean_ring<T>(ring: &[Point<T>]) -> Vec<Point<T>>
where
    T: Coord,
{
    let mut pts: Vec<Point<T>> = Vec::with_capacity(ring.len());
    for &pt in ring {
        if pts.last() == Some(&pt) {
            continue;
        }
        while pts.len() >= 2 && slopes_equal(pts[pts.len() - 2], pts[pts.len() - 1], pt) {
            pts.pop();
        }
        if pts.last() != Some(&pt) {
            pts.push(pt);
        }
    }

    // wrap around
    loop {
        let n = pts.len();
        if n < 3 {
            break;
        }
        if pts[n - 1] == pts[0] || slopes_equal(pts[n - 2], pts[n - 1], pts[0]) {
            pts.pop();
        } else if slopes_equal(pts[n - 1], pts[0], pts[1]) {
            pts.remove(0);
        } else {
            break;
        }
    }

    pts
}

/// Rotate the edges so the list starts right after a local maximum.
fn start_list_on_local_maximum<T>(edges: &mut [Edge<T>])
where
    T: Coord,
{
    if edges.len() <= 2 {
        return;
    }

    let mut prev_idx = edges.len() - 1;
    let mut prev_is_horizontal = edges[prev_idx].is_horizontal();
    let mut rising_before_last_horizontal = false;
    let mut idx = 0;
    while idx < edges.len() {
        let edge = edges[idx];
        let prev = edges[prev_idx];
        let edge_is_horizontal = edge.is_horizontal();
        if !prev_is_horizontal && !edge_is_horizontal && edge.top == prev.top {
            break;
        }
        if !edge_is_horizontal && prev_is_horizontal {
            if rising_before_last_horizontal && (edge.top == prev.bot || edge.top == prev.top) {
                break;
            }
        } else if !rising_before_last_horizontal
            && !prev_is_horizontal
            && edge_is_horizontal
            && (prev.top == edge.top || prev.top == edge.bot)
        {
            rising_before_last_horizontal = true;
        }
        prev_is_horizontal = edge_is_horizontal;
        prev_idx = idx;
        idx += 1;
    }

    edges.rotate_left(idx);
}

/// Split off the edges from the front of `edges` that descend to the next local minimum, returned
/// in upward (minimum to maximum) order.
fn create_bound_towards_minimum<T>(edges: &mut Vec<Edge<T>>) -> Vec<Edge<T>>
where
    T: Coord,
{
    if edges.len() == 1 {
        if edges[0].is_horizontal() {
            edges[0].reverse_horizontal();
        }
        return std::mem::take(edges);
    }

    let mut edge_idx = 0;
    let mut next_idx = 1;
    let mut edge_is_horizontal = edges[0].is_horizontal();
    if edge_is_horizontal {
        edges[0].reverse_horizontal();
    }
    let mut falling_before_last_horizontal = false;
    while next_idx < edges.len() {
        let edge = edges[edge_idx];
        let next = edges[next_idx];
        let next_is_horizontal = next.is_horizontal();
        if !next_is_horizontal && !edge_is_horizontal && edge.bot == next.bot {
            break;
        }
        if !next_is_horizontal && edge_is_horizontal {
            if falling_before_last_horizontal && (next.bot == edge.bot || next.bot == edge.top) {
                break;
            }
        } else if !falling_before_last_horizontal
            && !edge_is_horizontal
            && next_is_horizontal
            && (edge.bot == next.top || edge.bot == next.bot)
        {
            falling_before_last_horizontal = true;
        }
        edge_is_horizontal = next_is_horizontal;
        edge_idx = next_idx;
        if edge_is_horizontal {
            edges[edge_idx].reverse_horizontal();
        }
        next_idx += 1;
    }

    let mut bound_edges = if next_idx == edges.len() {
        std::mem::take(edges)
    } else {
        edges.drain(..next_idx).collect()
    };
    bound_edges.reverse();
    bound_edges
}

/// Split off the edges from the front of `edges` that ascend to the next local maximum.
fn create_bound_towards_maximum<T>(edges: &mut Vec<Edge<T>>) -> Vec<Edge<T>>
where
    T: Coord,
{
    if edges.len() == 1 {
        return std::mem::take(edges);
    }

    let mut edge_idx = 0;
    let mut next_idx = 1;
    let mut edge_is_horizontal = edges[0].is_horizontal();
    let mut rising_before_last_horizontal = false;
    while next_idx < edges.len() {
        let edge = edges[edge_idx];
        let next = edges[next_idx];
        let next_is_horizontal = next.is_horizontal();
        if !next_is_horizontal && !edge_is_horizontal && edge.top == next.top {
            break;
        }
        if !next_is_horizontal && edge_is_horizontal {
            if rising_before_last_horizontal && (next.top == edge.bot || next.top == edge.top) {
                break;
            }
        } else if !rising_before_last_horizontal
            && !edge_is_horizontal
            && next_is_horizontal
            && (edge.top == next.top || edge.top == next.bot)
        {
            rising_before_last_horizontal = true;
        }
        edge_is_horizontal = next_is_horizontal;
        edge_idx = next_idx;
        next_idx += 1;
    }

    if next_idx == edges.len() {
        std::mem::take(edges)
    } else {
        edges.drain(..next_idx).collect()
    }
}

/// Orient horizontal edges so each one starts where the previous edge of the bound ends.
fn fix_horizontals<T>(edges: &mut [Edge<T>])
where
    T: Coord,
{
    if edges.len() < 2 {
        return;
    }
    if edges[0].is_horizontal() && edges[1].bot != edges[0].top {
        edges[0].reverse_horizontal();
    }
    for i in 1..edges.len() {
        if edges[i].is_horizontal() && edges[i - 1].top != edges[i].bot {
            edges[i].reverse_horizontal();
        }
    }
}

/// Horizontal edges lying at the minimum all belong on the right bound.
fn move_horizontals_on_left_to_right<T>(left: &mut Vec<Edge<T>>, right: &mut Vec<Edge<T>>)
where
    T: Coord,
{
    let count = left.iter().take_while(|e| e.is_horizontal()).count();
    if count == 0 {
        return;
    }
    for e in &mut left[..count] {
        e.reverse_horizontal();
    }
    left[..count].reverse();
    let moved: Vec<Edge<T>> = left.drain(..count).collect();
    right.splice(0..0, moved);
}

pub(super) fn add_ring_to_local_minima_list<T>(
    list: &mut LocalMinimumList<T>,
    mut edges: Vec<Edge<T>>,
    poly_type: PolygonType,
    ring_index: usize,
) -> Result<(), BuildError>
where
    T: Coord,
{
    start_list_on_local_maximum(&mut edges);

    let mut first_minimum: Option<BoundIdx> = None;
    let mut last_maximum: Option<BoundIdx> = None;
    while !edges.is_empty() {
        let mut to_minimum = create_bound_towards_minimum(&mut edges);
        if edges.is_empty() {
            return Err(BuildError::SingleBound { ring_index });
        }
        let mut to_maximum = create_bound_towards_maximum(&mut edges);
        fix_horizontals(&mut to_minimum);
        fix_horizontals(&mut to_maximum);

        let first_non_horizontal =
            |chain: &[Edge<T>]| chain.iter().position(|e| !e.is_horizontal());
        let (Some(max_first), Some(min_first)) = (
            first_non_horizontal(&to_maximum[..]),
            first_non_horizontal(&to_minimum[..]),
        ) else {
            return Err(BuildError::HorizontalOnlyBound { ring_index });
        };

        let minimum_has_horizontal = max_first > 0 || min_first > 0;
        let minimum_is_left = if minimum_has_horizontal {
            let is_left = to_maximum[max_first].bot.x > to_minimum[min_first].bot.x;
            if is_left {
                move_horizontals_on_left_to_right(&mut to_minimum, &mut to_maximum);
            } else {
                move_horizontals_on_left_to_right(&mut to_maximum, &mut to_minimum);
            }
            is_left
        } else {
            to_maximum[max_first].dx >= to_minimum[min_first].dx
        };

        let y = to_minimum[0].bot.y;
        let mut min_bound = Bound::new(to_minimum, poly_type, 1);
        let max_bound = Bound::new(to_maximum, poly_type, -1);
        min_bound.maximum_bound = last_maximum;

        let (min_idx, max_idx) = if minimum_is_left {
            list.push_bound_pair(min_bound, max_bound, y, minimum_has_horizontal)
        } else {
            let (left, right) =
                list.push_bound_pair(max_bound, min_bound, y, minimum_has_horizontal);
            (right, left)
        };

        match last_maximum {
            None => first_minimum = Some(min_idx),
            Some(last) => list.bounds[last].maximum_bound = Some(min_idx),
        }
        last_maximum = Some(max_idx);
    }

    if let (Some(first), Some(last)) = (first_minimum, last_maximum) {
        list.bounds[last].maximum_bound = Some(first);
        list.bounds[first].maximum_bound = Some(last);
    }

    Ok(())
}
