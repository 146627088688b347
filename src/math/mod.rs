pub mod polygon_2d;

pub use polygon_2d::{
    cross, is_collinear, rotate_to_canonical_start, signed_area_doubled, winding_number,
};

/// Point in raster corner space. Cell `(cx, cy)` spans `(cx, cy)..(cx + 1, cy + 1)`,
/// with y growing downward.
pub type GridPoint = nalgebra::Point2<i64>;

/// Integer displacement between two [`GridPoint`]s.
pub type GridVector = nalgebra::Vector2<i64>;
