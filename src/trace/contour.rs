use crate::math::{signed_area_doubled, winding_number, GridPoint};

/// Rotational direction of a contour as seen on screen (y down).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

/// A finished closed outline: a simple polygon with no repeated closing
/// vertex.
///
/// Outer boundaries wind clockwise and holes counter-clockwise, so the
/// whole set reproduces the dark cells under the nonzero fill rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contour {
    points: Vec<GridPoint>,
}

impl Contour {
    pub(crate) fn new(points: Vec<GridPoint>) -> Self {
        Self { points }
    }

    /// The polygon's vertices in traversal order.
    #[must_use]
    pub fn points(&self) -> &[GridPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a contour has at least three vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed enclosed area in cells: positive when clockwise.
    #[must_use]
    pub fn signed_area(&self) -> i64 {
        signed_area_doubled(&self.points) / 2
    }

    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() >= 0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Whether this contour bounds a light hole inside a dark region.
    #[must_use]
    pub fn is_hole(&self) -> bool {
        self.winding() == Winding::CounterClockwise
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    #[must_use]
    pub fn bounding_box(&self) -> (GridPoint, GridPoint) {
        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        (min, max)
    }

    /// Winding number of this contour around the centre of `cell`.
    #[must_use]
    pub fn winding_number(&self, cell: &GridPoint) -> i32 {
        winding_number(&self.points, cell)
    }

    #[must_use]
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points
    }
}
