//! Active bound list and winding rule engine for Vatti style polygon clipping.
//!
//! Input rings (subject and clip polygon sets with integer coordinates) are decomposed into
//! bounds starting at local minima ([local_minimum]). A sweep driver then visits scanbeams in
//! ascending y and uses [sweep] to insert new bound pairs into the active bound list, compute
//! their winding counts and decide if they contribute to the output under the configured fill
//! types and clip type.
//!
//! # Examples
//!
//! ```
//! use cavalier_clipper::{ring, sweep::*, bound::PolygonType, local_minimum::LocalMinimumList};
//!
//! let mut minima = LocalMinimumList::new();
//! minima.add_ring(&ring![(0, 0), (2, 0), (2, 2), (0, 2)], PolygonType::Subject).unwrap();
//! minima.add_ring(&ring![(1, 1), (3, 1), (3, 3), (1, 3)], PolygonType::Clip).unwrap();
//!
//! let options = ClipOptions::with_fill(ClipType::Intersection, FillType::NonZero);
//! let mut sweep = ClipSweep::new(minima, options, RingStarts::new());
//! let y = sweep.pop_scanbeam().unwrap();
//! assert_eq!(y, 0);
//! sweep.insert_local_minima(y);
//! assert_eq!(sweep.abl().len(), 2);
//! // subject alone does not contribute to an intersection
//! assert!(sweep.rings().is_empty());
//! ```
#[macro_use]
mod macros;
pub mod bound;
pub mod core;
mod error;
pub mod geometry;
pub mod local_minimum;
pub mod sweep;

pub use error::BuildError;
