mod contour;
mod emit;
mod merge;
mod path;
mod simplify;

pub use contour::{Contour, Winding};
pub use emit::{boundary_edges, Edge, Side};
pub use merge::{PathId, PathMerger};
pub use path::Path;
pub use simplify::{close_loop, simplify_loop};

use crate::error::{ConsistencyError, InputError, Result};
use crate::math::rotate_to_canonical_start;
use crate::query::NonzeroFill;
use crate::raster::{Bitmap, FnRaster, Raster};

/// Parameters controlling how traced loops are post-processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceParams {
    /// Collapse straight runs to their end points. When `false` every unit
    /// grid vertex on the boundary is kept.
    pub simplify: bool,
    /// Rotate each contour to start at its top-left vertex and sort the
    /// output by that vertex.
    pub canonical: bool,
    /// Re-rasterise the result and check it against the input.
    pub verify: bool,
}

impl Default for TraceParams {
    fn default() -> Self {
        Self {
            simplify: true,
            canonical: true,
            verify: false,
        }
    }
}

/// Traces the dark region of a raster into closed outlines.
///
/// The result reproduces the dark cells exactly when filled with the
/// nonzero winding rule: outer boundaries wind clockwise (y down), holes
/// counter-clockwise.
pub struct TraceOutline<'r, R: ?Sized> {
    raster: &'r R,
    params: TraceParams,
}

impl<'r, R> TraceOutline<'r, R>
where
    R: Raster + ?Sized,
{
    /// Creates a new `TraceOutline` operation with default parameters.
    #[must_use]
    pub fn new(raster: &'r R) -> Self {
        Self {
            raster,
            params: TraceParams::default(),
        }
    }

    /// Sets custom post-processing parameters.
    #[must_use]
    pub fn with_params(mut self, params: TraceParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning every closed outline.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ZeroDimension` for an empty raster, or a
    /// `ConsistencyError` if the boundary could not be assembled.
    pub fn execute(&self) -> Result<Vec<Contour>> {
        let (width, height) = (self.raster.width(), self.raster.height());
        if width == 0 || height == 0 {
            return Err(InputError::ZeroDimension { width, height }.into());
        }

        let mut merger = PathMerger::new(self.raster);
        let mut edges = 0usize;
        for edge in boundary_edges(self.raster) {
            merger.add_edge(edge)?;
            edges += 1;
        }
        let spliced = merger.spliced_points();
        let loops = merger.finish()?;

        let mut contours = loops
            .into_iter()
            .map(|path| {
                let points = path.into_points();
                if self.params.simplify {
                    simplify_loop(&points)
                } else {
                    close_loop(&points)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        if self.params.canonical {
            contours = contours
                .iter()
                .map(|c| Contour::new(rotate_to_canonical_start(c.points())))
                .collect();
            contours.sort_by_key(|c| {
                let start = c.points()[0];
                (start.y, start.x)
            });
        }

        if self.params.verify {
            self.verify(&contours)?;
        }

        tracing::debug!(
            width,
            height,
            edges,
            spliced,
            contours = contours.len(),
            "traced outline"
        );
        Ok(contours)
    }

    fn verify(&self, contours: &[Contour]) -> Result<()> {
        let (width, height) = (self.raster.width(), self.raster.height());
        let filled = NonzeroFill::new(contours, width, height).execute()?;
        for y in 0..height {
            for x in 0..width {
                let expected = self.raster.is_dark(i64::from(x), i64::from(y));
                if filled.get(x, y) != expected {
                    return Err(ConsistencyError::FillMismatch { x, y, expected }.into());
                }
            }
        }
        Ok(())
    }
}

/// Traces a `width` x `height` grid described by `is_dark` with default
/// parameters.
///
/// # Errors
///
/// Returns `InputError::ZeroDimension` if either dimension is 0.
pub fn trace_outline(
    width: u32,
    height: u32,
    is_dark: impl Fn(u32, u32) -> bool,
) -> Result<Vec<Contour>> {
    let raster = FnRaster::new(width, height, is_dark);
    TraceOutline::new(&raster).execute()
}

/// Like [`trace_outline`], for lookups that can fail.
///
/// # Errors
///
/// Returns `InputError::Raster` carrying the lookup's error, or any error
/// [`trace_outline`] can return.
pub fn try_trace_outline<E>(
    width: u32,
    height: u32,
    is_dark: impl FnMut(u32, u32) -> std::result::Result<bool, E>,
) -> Result<Vec<Contour>>
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    let bitmap = Bitmap::try_from_fn(width, height, is_dark)?;
    TraceOutline::new(&bitmap).execute()
}
