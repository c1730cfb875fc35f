use thiserror::Error;

/// Errors raised while decomposing input rings into bounds and local minima.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// Walking the ring produced a bound towards a minimum but no edges were left for the bound
    /// towards the following maximum.
    #[error("ring {ring_index} produced a single bound, edges exhausted before reaching a maximum")]
    SingleBound { ring_index: usize },
    /// A ring point lies outside `±`[MAX_COORD](crate::geometry::MAX_COORD).
    #[error("ring {ring_index} has point ({x}, {y}) outside the allowed coordinate range")]
    CoordinateOutOfRange { ring_index: usize, x: i128, y: i128 },
    /// A bound made up entirely of horizontal edges, only possible for degenerate input.
    #[error("ring {ring_index} produced a bound with only horizontal edges")]
    HorizontalOnlyBound { ring_index: usize },
}
