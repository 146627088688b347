use super::{GridPoint, GridVector};

/// 2D cross product `a.x * b.y - a.y * b.x`.
///
/// In the y-down raster frame a positive value means `b` turns clockwise
/// (on screen) from `a`.
#[must_use]
pub fn cross(a: &GridVector, b: &GridVector) -> i64 {
    a.x * b.y - a.y * b.x
}

/// Returns `true` when `p2` lies on the line through `p1` and `p3`.
#[must_use]
pub fn is_collinear(p1: &GridPoint, p2: &GridPoint, p3: &GridPoint) -> bool {
    cross(&(p1 - p2), &(p3 - p2)) == 0
}

/// Twice the signed area of a closed ring (shoelace sum).
///
/// Positive for clockwise on screen (y down), negative for counter-clockwise.
#[must_use]
pub fn signed_area_doubled(points: &[GridPoint]) -> i64 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let mut sum = 0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum
}

/// Rotates a closed ring so it starts at the top-most vertex (smallest y),
/// breaking ties by smallest x.
#[must_use]
pub fn rotate_to_canonical_start(points: &[GridPoint]) -> Vec<GridPoint> {
    let Some(best) = points
        .iter()
        .enumerate()
        .min_by_key(|(_, p)| (p.y, p.x))
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };
    let mut rotated = Vec::with_capacity(points.len());
    rotated.extend_from_slice(&points[best..]);
    rotated.extend_from_slice(&points[..best]);
    rotated
}

/// Winding number of a closed ring around the centre of `cell`.
///
/// Evaluated in doubled coordinates so the cell centre is an integer
/// point and no vertex ever lies on the test ray.
#[must_use]
pub fn winding_number(points: &[GridPoint], cell: &GridPoint) -> i32 {
    let n = points.len();
    if n < 3 {
        return 0;
    }
    let sx = 2 * cell.x + 1;
    let sy = 2 * cell.y + 1;
    let mut wn = 0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let (ax, ay, bx, by) = (2 * a.x, 2 * a.y, 2 * b.x, 2 * b.y);
        let side = (bx - ax) * (sy - ay) - (sx - ax) * (by - ay);
        if ay <= sy {
            if by > sy && side > 0 {
                wn += 1;
            }
        } else if by <= sy && side < 0 {
            wn -= 1;
        }
    }
    wn
}
