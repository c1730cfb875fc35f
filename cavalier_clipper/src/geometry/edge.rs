use super::Point;
use crate::core::traits::Coord;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Segment of a ring oriented for an upward sweep: `bot` is the endpoint with the smaller y.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge<T = i64> {
    pub bot: Point<T>,
    pub top: Point<T>,
    /// Inverse slope (`Δx / Δy`), infinite for horizontal edges.
    pub dx: f64,
}

impl<T> Edge<T>
where
    T: Coord,
{
    /// Create the edge between two consecutive ring points.
    ///
    /// A horizontal edge keeps `current` as its bottom so that it follows the ring direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cavalier_clipper::geometry::*;
    /// let e = Edge::new(point(4, 6), point(0, 2));
    /// assert_eq!(e.bot, point(0, 2));
    /// assert_eq!(e.top, point(4, 6));
    /// assert_eq!(e.dx, 1.0);
    ///
    /// let h = Edge::new(point(3, 1), point(0, 1));
    /// assert!(h.is_horizontal());
    /// assert_eq!(h.bot, point(3, 1));
    /// ```
    pub fn new(current: Point<T>, next: Point<T>) -> Self {
        let (bot, top) = if current.y <= next.y {
            (current, next)
        } else {
            (next, current)
        };

        Edge {
            bot,
            top,
            dx: get_dx(bot, top),
        }
    }

    #[inline]
    pub fn is_horizontal(&self) -> bool {
        self.bot.y == self.top.y
    }

    /// Swap the x values of the end points of a horizontal edge so its bottom joins the preceding
    /// edge of its bound.
    pub fn reverse_horizontal(&mut self) {
        std::mem::swap(&mut self.bot.x, &mut self.top.x);
    }

    /// X position of the edge at sweep line `y`.
    ///
    /// Exactly `top.x` at the top of the edge, otherwise interpolated (or extrapolated) from the
    /// bottom point.
    ///
    /// # Examples
    ///
    /// ```
    /// # use cavalier_clipper::geometry::*;
    /// let e = Edge::new(point(0, 0), point(4, 8));
    /// assert_eq!(e.current_x_at(8), 4.0);
    /// assert_eq!(e.current_x_at(2), 1.0);
    /// assert_eq!(e.current_x_at(10), 5.0);
    /// ```
    #[inline]
    pub fn current_x_at(&self, y: T) -> f64 {
        if y == self.top.y {
            self.top.x.as_f64()
        } else {
            self.bot.x.as_f64() + self.dx * (y - self.bot.y).as_f64()
        }
    }
}

/// Inverse slope between two points, `+∞` when they share a y value.
#[inline]
pub fn get_dx<T>(pt1: Point<T>, pt2: Point<T>) -> f64
where
    T: Coord,
{
    if pt1.y == pt2.y {
        f64::INFINITY
    } else {
        (pt2.x.as_wide() - pt1.x.as_wide()) as f64 / (pt2.y.as_wide() - pt1.y.as_wide()) as f64
    }
}
