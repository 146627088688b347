use std::str::FromStr;

use super::Raster;
use crate::error::{InputError, OutlineError, Result};

/// Owned row-major binary raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    width: u32,
    height: u32,
    cells: Vec<bool>,
}

impl Bitmap {
    /// Creates an all-light raster.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ZeroDimension` if either dimension is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![false; width as usize * height as usize],
        })
    }

    /// Creates a raster by querying `is_dark` once per cell.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ZeroDimension` if either dimension is 0.
    pub fn from_fn(
        width: u32,
        height: u32,
        mut is_dark: impl FnMut(u32, u32) -> bool,
    ) -> Result<Self> {
        Self::try_from_fn(width, height, |x, y| {
            Ok::<_, std::convert::Infallible>(is_dark(x, y))
        })
    }

    /// Creates a raster from a fallible lookup, stopping at the first failure.
    ///
    /// # Errors
    ///
    /// Returns `InputError::ZeroDimension` if either dimension is 0, or
    /// `InputError::Raster` wrapping the lookup's own error.
    pub fn try_from_fn<E>(
        width: u32,
        height: u32,
        mut is_dark: impl FnMut(u32, u32) -> std::result::Result<bool, E>,
    ) -> Result<Self>
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        let mut bitmap = Self::new(width, height)?;
        for y in 0..height {
            for x in 0..width {
                let dark = is_dark(x, y).map_err(|e| InputError::Raster {
                    x,
                    y,
                    source: e.into(),
                })?;
                bitmap.set(x, y, dark);
            }
        }
        Ok(bitmap)
    }

    /// Creates a raster from flat row-major module data, `columns` cells per row.
    ///
    /// Any non-zero value is dark. This is the layout QR encoders usually
    /// hand out.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DataLength` if `data` is empty or does not split
    /// into whole rows.
    pub fn from_modules(data: &[u8], columns: u32) -> Result<Self> {
        let cols = columns as usize;
        if cols == 0 || data.is_empty() || data.len() % cols != 0 {
            return Err(InputError::DataLength {
                len: data.len(),
                columns,
            }
            .into());
        }
        let height = u32::try_from(data.len() / cols).map_err(|_| InputError::DataLength {
            len: data.len(),
            columns,
        })?;
        Ok(Self {
            width: columns,
            height,
            cells: data.iter().map(|&v| v != 0).collect(),
        })
    }

    /// Sets cell `(x, y)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, dark: bool) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = dark;
        }
    }

    /// Returns cell `(x, y)`, or `false` when out of range.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        self.index(x, y).is_some_and(|idx| self.cells[idx])
    }

    /// Number of dark cells.
    #[must_use]
    pub fn dark_count(&self) -> usize {
        self.cells.iter().filter(|&&dark| dark).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }
}

impl Raster for Bitmap {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn is_dark(&self, x: i64, y: i64) -> bool {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(x), Ok(y)) => self.get(x, y),
            _ => false,
        }
    }
}

/// Parses one row per line: `#`, `1` or `X` dark, `.` or `0` light.
/// Blank leading/trailing lines are skipped.
impl FromStr for Bitmap {
    type Err = OutlineError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim_end)
            .skip_while(|line| line.trim().is_empty())
            .collect();
        let end = rows
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(0, |last| last + 1);
        let rows = &rows[..end];

        let expected = rows.first().map_or(0, |row| row.chars().count());
        let mut cells = Vec::with_capacity(expected * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != expected {
                return Err(InputError::RaggedRows {
                    row,
                    expected,
                    found,
                }
                .into());
            }
            for (column, ch) in line.chars().enumerate() {
                let dark = match ch {
                    '#' | '1' | 'X' => true,
                    '.' | '0' => false,
                    found => {
                        return Err(InputError::UnknownCell { row, column, found }.into());
                    }
                };
                cells.push(dark);
            }
        }

        let width = u32::try_from(expected).unwrap_or(u32::MAX);
        let height = u32::try_from(rows.len()).unwrap_or(u32::MAX);
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            cells,
        })
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(InputError::ZeroDimension { width, height }.into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fmt;

    #[test]
    fn new_is_all_light() {
        let bitmap = Bitmap::new(3, 2).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert_eq!(bitmap.dark_count(), 0);
    }

    #[test]
    fn zero_dimensions_rejected() {
        let err = Bitmap::new(0, 4).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Input(InputError::ZeroDimension { width: 0, height: 4 })
        ));
        assert!(Bitmap::from_fn(4, 0, |_, _| true).is_err());
    }

    #[test]
    fn set_get_and_out_of_range() {
        let mut bitmap = Bitmap::new(2, 2).unwrap();
        bitmap.set(1, 0, true);
        bitmap.set(5, 5, true);
        assert!(bitmap.get(1, 0));
        assert!(!bitmap.get(0, 1));
        assert!(!bitmap.get(5, 5));
        assert!(bitmap.is_dark(1, 0));
        assert!(!bitmap.is_dark(-1, 0));
        assert!(!bitmap.is_dark(1, -1));
        assert_eq!(bitmap.dark_count(), 1);
    }

    #[test]
    fn from_modules_splits_rows() {
        let bitmap = Bitmap::from_modules(&[1, 0, 0, 0, 1, 0], 3).unwrap();
        assert_eq!(bitmap.width(), 3);
        assert_eq!(bitmap.height(), 2);
        assert!(bitmap.get(0, 0));
        assert!(bitmap.get(1, 1));
        assert_eq!(bitmap.dark_count(), 2);
    }

    #[test]
    fn from_modules_rejects_partial_rows() {
        for (data, columns) in [(&[1u8, 0, 1][..], 2), (&[][..], 2), (&[1u8][..], 0)] {
            let err = Bitmap::from_modules(data, columns).unwrap_err();
            assert!(matches!(
                err,
                OutlineError::Input(InputError::DataLength { .. })
            ));
        }
    }

    #[test]
    fn parses_text_rows() {
        let bitmap: Bitmap = "\n#.#\n.#.\n".parse().unwrap();
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));
        assert!(bitmap.get(0, 0));
        assert!(!bitmap.get(1, 0));
        assert!(bitmap.get(1, 1));
        assert_eq!(bitmap.dark_count(), 3);
    }

    #[test]
    fn parse_rejects_ragged_and_unknown() {
        let err = "##\n#".parse::<Bitmap>().unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Input(InputError::RaggedRows {
                row: 1,
                expected: 2,
                found: 1
            })
        ));

        let err = "#?".parse::<Bitmap>().unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Input(InputError::UnknownCell {
                row: 0,
                column: 1,
                found: '?'
            })
        ));

        assert!("\n\n".parse::<Bitmap>().is_err());
    }

    #[derive(Debug)]
    struct Unreadable;

    impl fmt::Display for Unreadable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("unreadable module")
        }
    }

    impl std::error::Error for Unreadable {}

    #[test]
    fn try_from_fn_reports_failing_cell() {
        let err = Bitmap::try_from_fn(3, 3, |x, y| {
            if (x, y) == (2, 1) {
                Err(Unreadable)
            } else {
                Ok(true)
            }
        })
        .unwrap_err();
        match err {
            OutlineError::Input(InputError::Raster { x, y, source }) => {
                assert_eq!((x, y), (2, 1));
                assert_eq!(source.to_string(), "unreadable module");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
