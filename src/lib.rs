//! Cubic spline interpolation over a sequence of draggable knots.
//! The crate computes the curve only; rendering and input handling belong to
//! the embedding application, which owns the knot sequence and consumes the
//! returned cubic segment descriptors.
//!
//! # Example
//! ```
//! use knot_spline::{interpolate, BoundaryMode, Knot};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = vec![
//!     Knot::new(0.0, 0.0),
//!     Knot::new(1.0, 1.0),
//!     Knot::new(2.0, 0.0),
//! ];
//! let curve = interpolate(&knots, BoundaryMode::Natural).unwrap();
//!
//! assert_eq!(2, curve.len());
//! assert_approx_eq!(1.0, curve.evaluate(1.0).unwrap(), 1e-9);
//! assert_approx_eq!(0.6875, curve.evaluate(0.5).unwrap(), 1e-9);
//! ```

mod knot;
mod segment;
mod spline;

pub use knot::{restore_order_after_move, Knot};
pub use segment::{Segment, SegmentSet};
pub use spline::{interpolate, BoundaryMode, InterpolationError};
