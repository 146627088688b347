use std::collections::VecDeque;

use super::emit::Edge;
use crate::error::{ConsistencyError, Result};
use crate::math::{GridPoint, GridVector};

/// An open (or just closed) chain of boundary points being assembled.
///
/// Always holds at least two points. Points live in a ring buffer so a
/// chain can grow at either end without shifting what it already holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    points: VecDeque<GridPoint>,
}

impl Path {
    /// Wraps a single edge as a two-point path.
    #[must_use]
    pub fn from_edge(edge: Edge) -> Self {
        Self {
            points: VecDeque::from([edge.start, edge.end]),
        }
    }

    #[must_use]
    pub fn start_point(&self) -> GridPoint {
        self.points[0]
    }

    #[must_use]
    pub fn end_point(&self) -> GridPoint {
        self.points[self.points.len() - 1]
    }

    /// Whether the chain returns to its own start.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start_point() == self.end_point()
    }

    /// Direction of the first segment.
    #[must_use]
    pub fn leading(&self) -> GridVector {
        self.points[1] - self.points[0]
    }

    /// Direction of the last segment.
    #[must_use]
    pub fn trailing(&self) -> GridVector {
        let n = self.points.len();
        self.points[n - 1] - self.points[n - 2]
    }

    /// Extends this path with `tail`, whose start must equal this path's end.
    /// The shared point is kept once. Costs `O(tail.len())`.
    ///
    /// # Errors
    ///
    /// Returns `ConsistencyError::EndpointMismatch` if the endpoints differ.
    pub fn append(&mut self, tail: Path) -> Result<()> {
        if self.end_point() != tail.start_point() {
            return Err(ConsistencyError::EndpointMismatch {
                tail: self.end_point(),
                head: tail.start_point(),
            }
            .into());
        }
        self.points.extend(tail.points.into_iter().skip(1));
        Ok(())
    }

    /// Puts `head` in front of this path; `head` must end where this path
    /// starts. The shared point is kept once. Costs `O(head.len())`.
    ///
    /// # Errors
    ///
    /// Returns `ConsistencyError::EndpointMismatch` if the endpoints differ.
    pub fn prepend(&mut self, head: Path) -> Result<()> {
        if head.end_point() != self.start_point() {
            return Err(ConsistencyError::EndpointMismatch {
                tail: head.end_point(),
                head: self.start_point(),
            }
            .into());
        }
        for &point in head.points.iter().rev().skip(1) {
            self.points.push_front(point);
        }
        Ok(())
    }

    /// Number of points, counting a closing duplicate.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always `false`; a path holds at least two points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn points(&self) -> &VecDeque<GridPoint> {
        &self.points
    }

    #[must_use]
    pub fn into_points(self) -> Vec<GridPoint> {
        self.points.into()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::OutlineError;

    fn p(x: i64, y: i64) -> GridPoint {
        GridPoint::new(x, y)
    }

    fn edge(a: (i64, i64), b: (i64, i64)) -> Path {
        Path::from_edge(Edge::new(p(a.0, a.1), p(b.0, b.1)))
    }

    #[test]
    fn append_drops_shared_point() {
        let mut path = edge((0, 1), (0, 0));
        path.append(edge((0, 0), (1, 0))).unwrap();
        assert_eq!(path.points(), &[p(0, 1), p(0, 0), p(1, 0)]);
        assert_eq!(path.start_point(), p(0, 1));
        assert_eq!(path.end_point(), p(1, 0));
        assert_eq!(path.leading(), GridVector::new(0, -1));
        assert_eq!(path.trailing(), GridVector::new(1, 0));
    }

    #[test]
    fn append_rejects_mismatched_endpoints() {
        let mut path = edge((0, 1), (0, 0));
        let err = path.append(edge((5, 5), (6, 5))).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Consistency(ConsistencyError::EndpointMismatch { .. })
        ));
        assert_eq!(path.points().len(), 2);
    }

    #[test]
    fn closes_when_chain_returns() {
        let mut path = edge((0, 1), (0, 0));
        for (a, b) in [((0, 0), (1, 0)), ((1, 0), (1, 1)), ((1, 1), (0, 1))] {
            assert!(!path.is_closed());
            path.append(edge(a, b)).unwrap();
        }
        assert!(path.is_closed());
        assert_eq!(path.into_points().len(), 5);
    }

    #[test]
    fn prepend_grows_at_the_front() {
        let mut path = edge((1, 0), (1, 1));
        path.prepend(edge((0, 0), (1, 0))).unwrap();
        path.prepend(edge((0, 1), (0, 0))).unwrap();
        assert_eq!(path.points(), &[p(0, 1), p(0, 0), p(1, 0), p(1, 1)]);
        assert_eq!(path.len(), 4);
        assert_eq!(path.leading(), GridVector::new(0, -1));
        assert_eq!(path.trailing(), GridVector::new(0, 1));
    }

    #[test]
    fn prepend_rejects_mismatched_endpoints() {
        let mut path = edge((1, 0), (1, 1));
        let err = path.prepend(edge((0, 1), (0, 0))).unwrap_err();
        assert!(matches!(
            err,
            OutlineError::Consistency(ConsistencyError::EndpointMismatch { .. })
        ));
        assert_eq!(path.len(), 2);
    }
}
