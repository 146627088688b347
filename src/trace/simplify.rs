use super::contour::Contour;
use crate::error::{ConsistencyError, Result};
use crate::math::{is_collinear, GridPoint};

/// Reduces a closed chain (first point repeated at the end) to its corners.
///
/// Every interior point lying on a straight run is dropped, the repeated
/// closing point is removed, and runs passing through the chain's seam are
/// collapsed as well.
///
/// # Errors
///
/// Returns `ConsistencyError::DegenerateLoop` if fewer than three corners
/// remain.
pub fn simplify_loop(points: &[GridPoint]) -> Result<Contour> {
    let mut corners: Vec<GridPoint> = Vec::with_capacity(points.len());
    for &p in points {
        let n = corners.len();
        if n >= 2 && is_collinear(&corners[n - 2], &corners[n - 1], &p) {
            corners[n - 1] = p;
        } else {
            corners.push(p);
        }
    }
    if corners.len() > 1 && corners.first() == corners.last() {
        corners.pop();
    }
    trim_seam(&mut corners);

    if corners.len() < 3 {
        return Err(ConsistencyError::DegenerateLoop {
            len: corners.len(),
        }
        .into());
    }
    Ok(Contour::new(corners))
}

/// Drops a closing duplicate without collapsing straight runs.
///
/// # Errors
///
/// Returns `ConsistencyError::DegenerateLoop` if fewer than three points
/// remain.
pub fn close_loop(points: &[GridPoint]) -> Result<Contour> {
    let mut ring = points.to_vec();
    if ring.len() > 1 && ring.first() == ring.last() {
        ring.pop();
    }
    if ring.len() < 3 {
        return Err(ConsistencyError::DegenerateLoop { len: ring.len() }.into());
    }
    Ok(Contour::new(ring))
}

/// Removes collinear vertices where the ring wraps from last to first.
fn trim_seam(ring: &mut Vec<GridPoint>) {
    while ring.len() >= 3 {
        let n = ring.len();
        if is_collinear(&ring[n - 2], &ring[n - 1], &ring[0]) {
            ring.pop();
        } else if is_collinear(&ring[n - 1], &ring[0], &ring[1]) {
            ring.remove(0);
        } else {
            break;
        }
    }
}
