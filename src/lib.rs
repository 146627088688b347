//! Traces the dark cells of a binary raster (a QR code, a glyph bitmap,
//! any 0/1 matrix) into a minimal set of closed rectilinear outlines.
//!
//! Filled with the nonzero winding rule, the outlines reproduce the dark
//! cells exactly. Coordinates are raster corners with y growing downward.
//!
//! ```
//! use raster_outline::trace_outline;
//!
//! // A 3x3 ring: one outer boundary and one hole.
//! let contours = trace_outline(3, 3, |x, y| !(x == 1 && y == 1))?;
//! assert_eq!(contours.len(), 2);
//! assert!(contours[1].is_hole());
//! # Ok::<(), raster_outline::OutlineError>(())
//! ```

pub mod error;
pub mod math;
pub mod query;
pub mod raster;
pub mod trace;

pub use error::{ConsistencyError, InputError, OutlineError, Result};
pub use raster::{Bitmap, FnRaster, Raster};
pub use trace::{trace_outline, try_trace_outline, Contour, TraceOutline, TraceParams, Winding};
