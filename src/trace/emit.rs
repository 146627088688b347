use crate::math::{GridPoint, GridVector};
use crate::raster::Raster;

/// One side of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Top,
    Right,
    Bottom,
}

impl Side {
    /// All sides in the rotational order edges are emitted in.
    pub const ALL: [Side; 4] = [Side::Left, Side::Top, Side::Right, Side::Bottom];

    /// Offset from a cell to the neighbour across this side.
    #[must_use]
    pub fn offset(self) -> GridVector {
        match self {
            Side::Left => GridVector::new(-1, 0),
            Side::Top => GridVector::new(0, -1),
            Side::Right => GridVector::new(1, 0),
            Side::Bottom => GridVector::new(0, 1),
        }
    }

    /// The cell across this side of `cell`.
    #[must_use]
    pub fn neighbor(self, cell: &GridPoint) -> GridPoint {
        cell + self.offset()
    }

    /// The boundary edge of `cell` on this side, oriented so that the four
    /// sides of a lone cell chain clockwise (on screen) from its bottom-left
    /// corner.
    #[must_use]
    pub fn edge(self, cell: &GridPoint) -> Edge {
        let (x, y) = (cell.x, cell.y);
        let (start, end) = match self {
            Side::Left => ((x, y + 1), (x, y)),
            Side::Top => ((x, y), (x + 1, y)),
            Side::Right => ((x + 1, y), (x + 1, y + 1)),
            Side::Bottom => ((x + 1, y + 1), (x, y + 1)),
        };
        Edge::new(GridPoint::new(start.0, start.1), GridPoint::new(end.0, end.1))
    }
}

/// A directed unit segment of a dark cell's boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub start: GridPoint,
    pub end: GridPoint,
}

impl Edge {
    /// Creates an edge from `start` to `end`.
    #[must_use]
    pub fn new(start: GridPoint, end: GridPoint) -> Self {
        Self { start, end }
    }
}

/// Lazily yields every boundary edge of the raster's dark cells.
///
/// Cells are visited row by row; each dark cell yields one edge per side
/// whose neighbour is light or off-grid, in [`Side::ALL`] order.
pub fn boundary_edges<R>(raster: &R) -> impl Iterator<Item = Edge> + '_
where
    R: Raster + ?Sized,
{
    let width = i64::from(raster.width());
    let height = i64::from(raster.height());
    (0..height)
        .flat_map(move |y| (0..width).map(move |x| GridPoint::new(x, y)))
        .filter(move |cell| raster.is_dark(cell.x, cell.y))
        .flat_map(move |cell| {
            Side::ALL
                .into_iter()
                .filter(move |side| {
                    let n = side.neighbor(&cell);
                    !raster.is_dark(n.x, n.y)
                })
                .map(move |side| side.edge(&cell))
        })
}
