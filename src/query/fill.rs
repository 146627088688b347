use crate::error::Result;
use crate::math::GridPoint;
use crate::raster::Bitmap;
use crate::trace::Contour;

/// Re-rasterises contours under the nonzero winding rule.
///
/// A cell is dark when the winding numbers of all contours around its
/// centre sum to a non-zero value.
pub struct NonzeroFill<'a> {
    contours: &'a [Contour],
    width: u32,
    height: u32,
}

impl<'a> NonzeroFill<'a> {
    /// Creates a new `NonzeroFill` query over a `width` x `height` grid.
    #[must_use]
    pub fn new(contours: &'a [Contour], width: u32, height: u32) -> Self {
        Self {
            contours,
            width,
            height,
        }
    }

    /// Executes the query, returning the filled raster.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ZeroDimension` if the grid is empty.
    pub fn execute(&self) -> Result<Bitmap> {
        Bitmap::from_fn(self.width, self.height, |x, y| {
            let cell = GridPoint::new(i64::from(x), i64::from(y));
            self.contours
                .iter()
                .map(|c| c.winding_number(&cell))
                .sum::<i32>()
                != 0
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::raster::Raster;
    use crate::trace::TraceOutline;

    #[test]
    fn empty_contour_set_fills_nothing() {
        let filled = NonzeroFill::new(&[], 3, 2).execute().unwrap();
        assert_eq!(filled.dark_count(), 0);
        assert_eq!((filled.width(), filled.height()), (3, 2));
    }

    #[test]
    fn hole_cancels_outer_winding() {
        let ring: Bitmap = "###\n#.#\n###".parse().unwrap();
        let contours = TraceOutline::new(&ring).execute().unwrap();
        let filled = NonzeroFill::new(&contours, 3, 3).execute().unwrap();
        assert_eq!(filled, ring);
        assert!(!filled.get(1, 1));
    }

    #[test]
    fn zero_sized_grid_is_rejected() {
        assert!(NonzeroFill::new(&[], 0, 2).execute().is_err());
    }
}
