//! Incremental assembly of boundary edges into closed loops.
//!
//! Every live path is indexed twice, by its start point and by its end
//! point. A new edge is fused with the path that starts where it ends and
//! with the path that ends where it starts; once a chain returns to its own
//! start through a valid join it is moved to the finished set.
//!
//! At a checkerboard junction two loops pass through the same grid point,
//! so each index key holds up to two paths. A join there is only accepted
//! when it turns clockwise, which keeps each loop wrapped around its own
//! dark cell instead of crossing over to the diagonal one.

use std::collections::HashMap;

use slotmap::SlotMap;

use super::emit::Edge;
use super::path::Path;
use crate::error::{ConsistencyError, Result};
use crate::math::{cross, GridPoint, GridVector};
use crate::raster::Raster;

slotmap::new_key_type! {
    /// Identifier of a live path inside a [`PathMerger`].
    pub struct PathId;
}

/// Most paths that may share one endpoint key.
const MAX_CLAIMS: usize = 2;

/// Endpoint index: grid point to the live paths that start (or end) there.
#[derive(Debug, Default)]
struct EndpointIndex {
    map: HashMap<GridPoint, Vec<PathId>>,
}

impl EndpointIndex {
    fn claim(&mut self, point: GridPoint, id: PathId) -> Result<()> {
        let claims = self.map.entry(point).or_default();
        if claims.len() >= MAX_CLAIMS {
            return Err(ConsistencyError::IndexCollision {
                point,
                existing: claims.clone(),
                incoming: id,
            }
            .into());
        }
        claims.push(id);
        Ok(())
    }

    fn release(&mut self, point: GridPoint, id: PathId) -> Result<()> {
        let missing = || ConsistencyError::MissingIndexEntry { point, path: id };
        let claims = self.map.get_mut(&point).ok_or_else(missing)?;
        let pos = claims.iter().position(|&c| c == id).ok_or_else(missing)?;
        claims.swap_remove(pos);
        if claims.is_empty() {
            self.map.remove(&point);
        }
        Ok(())
    }

    fn candidates(&self, point: &GridPoint) -> &[PathId] {
        self.map.get(point).map(Vec::as_slice).unwrap_or(&[])
    }

    fn len(&self) -> usize {
        self.map.values().map(Vec::len).sum()
    }
}

/// Fuses boundary edges, in any order, into closed loops.
pub struct PathMerger<'r, R: ?Sized> {
    raster: &'r R,
    paths: SlotMap<PathId, Path>,
    starts: EndpointIndex,
    ends: EndpointIndex,
    closed: Vec<Path>,
    spliced: usize,
}

impl<'r, R> PathMerger<'r, R>
where
    R: Raster + ?Sized,
{
    /// Creates an empty merger for edges emitted from `raster`.
    ///
    /// The raster is consulted only to recognise checkerboard junctions.
    #[must_use]
    pub fn new(raster: &'r R) -> Self {
        Self {
            raster,
            paths: SlotMap::with_key(),
            starts: EndpointIndex::default(),
            ends: EndpointIndex::default(),
            closed: Vec::new(),
            spliced: 0,
        }
    }

    /// Adds one edge, fusing it with any path it continues or precedes.
    ///
    /// # Errors
    ///
    /// Returns a `ConsistencyError` if the endpoint indices disagree with
    /// the paths they reference, or if a junction cannot be resolved.
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let mut path = Path::from_edge(edge);

        if let Some(next) = self.find_successor(&path)? {
            let at = path.end_point();
            let successor = self.retire(next)?;
            path = self.splice(path, successor)?;
            tracing::trace!(x = at.x, y = at.y, len = path.len(), "joined successor");
        }

        if !self.closes(&path) {
            if let Some(prev) = self.find_predecessor(&path)? {
                let at = path.start_point();
                let predecessor = self.retire(prev)?;
                path = self.splice(predecessor, path)?;
                tracing::trace!(x = at.x, y = at.y, len = path.len(), "joined predecessor");
            }
        }

        if self.closes(&path) {
            tracing::trace!(
                x = path.start_point().x,
                y = path.start_point().y,
                len = path.len(),
                "loop closed"
            );
            self.closed.push(path);
        } else {
            self.insert(path)?;
        }
        Ok(())
    }

    /// Loops closed so far, before simplification.
    #[must_use]
    pub fn closed_loops(&self) -> &[Path] {
        &self.closed
    }

    /// Number of paths still waiting for a partner.
    #[must_use]
    pub fn open_paths(&self) -> usize {
        self.paths.len()
    }

    /// Points moved between paths by joins so far.
    ///
    /// Each join copies the shorter chain into the longer one, so this
    /// stays within `O(e log e)` of the `e` edges added.
    #[must_use]
    pub fn spliced_points(&self) -> usize {
        self.spliced
    }

    /// Consumes the merger and returns every closed loop.
    ///
    /// # Errors
    ///
    /// Returns `ConsistencyError::UnclosedPath` if any path is still open,
    /// which means the edges did not describe a complete boundary.
    pub fn finish(self) -> Result<Vec<Path>> {
        if let Some(open) = self.paths.values().next() {
            return Err(ConsistencyError::UnclosedPath {
                start: open.start_point(),
                end: open.end_point(),
            }
            .into());
        }
        debug_assert_eq!(self.starts.len(), 0);
        debug_assert_eq!(self.ends.len(), 0);
        Ok(self.closed)
    }

    /// Finds the live path whose start continues `path`'s end.
    fn find_successor(&self, path: &Path) -> Result<Option<PathId>> {
        let at = path.end_point();
        let incoming = path.trailing();
        self.select(at, self.starts.candidates(&at), |candidate| {
            self.joinable(&incoming, &at, &candidate.leading())
        })
    }

    /// Finds the live path whose end leads into `path`'s start.
    fn find_predecessor(&self, path: &Path) -> Result<Option<PathId>> {
        let at = path.start_point();
        let outgoing = path.leading();
        self.select(at, self.ends.candidates(&at), |candidate| {
            self.joinable(&candidate.trailing(), &at, &outgoing)
        })
    }

    fn select(
        &self,
        at: GridPoint,
        candidates: &[PathId],
        accept: impl Fn(&Path) -> bool,
    ) -> Result<Option<PathId>> {
        let mut matching = Vec::with_capacity(candidates.len());
        for &id in candidates {
            let candidate = self
                .paths
                .get(id)
                .ok_or(ConsistencyError::StalePath { path: id })?;
            if accept(candidate) {
                matching.push(id);
            }
        }
        if matching.len() > 1 {
            return Err(ConsistencyError::AmbiguousJoin {
                point: at,
                candidates: matching,
            }
            .into());
        }
        Ok(matching.first().copied())
    }

    /// Whether a chain arriving along `incoming` may leave `at` along `outgoing`.
    ///
    /// Only checkerboard junctions restrict the choice: there the chain
    /// must turn clockwise around the dark cell it is tracing.
    fn joinable(&self, incoming: &GridVector, at: &GridPoint, outgoing: &GridVector) -> bool {
        !self.raster.is_pinch(at) || cross(incoming, outgoing) > 0
    }

    /// Whether `path` has returned to its start through a valid join.
    fn closes(&self, path: &Path) -> bool {
        path.is_closed() && self.joinable(&path.trailing(), &path.start_point(), &path.leading())
    }

    /// Joins `head` and `tail` at their shared point, growing the longer one.
    fn splice(&mut self, mut head: Path, mut tail: Path) -> Result<Path> {
        self.spliced += head.len().min(tail.len()) - 1;
        if head.len() >= tail.len() {
            head.append(tail)?;
            Ok(head)
        } else {
            tail.prepend(head)?;
            Ok(tail)
        }
    }

    fn insert(&mut self, path: Path) -> Result<()> {
        let (start, end) = (path.start_point(), path.end_point());
        let id = self.paths.insert(path);
        self.starts.claim(start, id)?;
        self.ends.claim(end, id)
    }

    fn retire(&mut self, id: PathId) -> Result<Path> {
        let path = self
            .paths
            .remove(id)
            .ok_or(ConsistencyError::StalePath { path: id })?;
        self.starts.release(path.start_point(), id)?;
        self.ends.release(path.end_point(), id)?;
        Ok(path)
    }
}
