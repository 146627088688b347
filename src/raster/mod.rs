mod bitmap;

pub use bitmap::Bitmap;

use crate::math::GridPoint;

/// Read-only binary grid of dark and light cells.
///
/// Implementations must answer `false` for any coordinate outside
/// `0..width` x `0..height`; the edge emitter relies on this when it looks
/// across the grid border.
pub trait Raster {
    /// Number of columns.
    fn width(&self) -> u32;

    /// Number of rows.
    fn height(&self) -> u32;

    /// Returns `true` if cell `(x, y)` is dark, `false` if light or out of range.
    fn is_dark(&self, x: i64, y: i64) -> bool;

    /// Returns `true` if `corner` is a checkerboard junction: exactly the two
    /// diagonally opposite cells around it are dark.
    fn is_pinch(&self, corner: &GridPoint) -> bool {
        let (x, y) = (corner.x, corner.y);
        let nw = self.is_dark(x - 1, y - 1);
        let ne = self.is_dark(x, y - 1);
        let sw = self.is_dark(x - 1, y);
        let se = self.is_dark(x, y);
        (nw && se && !ne && !sw) || (ne && sw && !nw && !se)
    }
}

impl<R: Raster + ?Sized> Raster for &R {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn is_dark(&self, x: i64, y: i64) -> bool {
        (**self).is_dark(x, y)
    }

    fn is_pinch(&self, corner: &GridPoint) -> bool {
        (**self).is_pinch(corner)
    }
}

/// A [`Raster`] backed by a lookup closure.
///
/// The closure is only ever called with in-range coordinates.
pub struct FnRaster<F> {
    width: u32,
    height: u32,
    lookup: F,
}

impl<F> FnRaster<F>
where
    F: Fn(u32, u32) -> bool,
{
    /// Wraps `lookup` as a `width` x `height` raster.
    #[must_use]
    pub fn new(width: u32, height: u32, lookup: F) -> Self {
        Self {
            width,
            height,
            lookup,
        }
    }
}

impl<F> Raster for FnRaster<F>
where
    F: Fn(u32, u32) -> bool,
{
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_dark(&self, x: i64, y: i64) -> bool {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) if x < self.width && y < self.height => (self.lookup)(x, y),
            _ => false,
        }
    }
}
