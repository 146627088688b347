use thiserror::Error;

use crate::math::GridPoint;
use crate::trace::PathId;

/// Top-level error type for outline tracing.
#[derive(Debug, Error)]
pub enum OutlineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Consistency(#[from] ConsistencyError),
}

/// Errors caused by the caller's input. The tracer performs no repair.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("raster must be at least 1x1, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("module data of length {len} does not split into rows of {columns}")]
    DataLength { len: usize, columns: u32 },

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unrecognised cell {found:?} at row {row}, column {column}")]
    UnknownCell {
        row: usize,
        column: usize,
        found: char,
    },

    #[error("raster lookup failed at ({x}, {y})")]
    Raster {
        x: u32,
        y: u32,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Internal consistency violations between the edge emitter and the merger.
///
/// These never describe bad input; they indicate a defect and carry the
/// points and path ids needed to diagnose it.
#[derive(Debug, Error)]
pub enum ConsistencyError {
    #[error(
        "cannot join path ending at ({}, {}) to path starting at ({}, {})",
        .tail.x, .tail.y, .head.x, .head.y
    )]
    EndpointMismatch { tail: GridPoint, head: GridPoint },

    #[error(
        "endpoint ({}, {}) already claimed by {existing:?}, cannot add {incoming:?}",
        .point.x, .point.y
    )]
    IndexCollision {
        point: GridPoint,
        existing: Vec<PathId>,
        incoming: PathId,
    },

    #[error("more than one path can join at ({}, {}): {candidates:?}", .point.x, .point.y)]
    AmbiguousJoin {
        point: GridPoint,
        candidates: Vec<PathId>,
    },

    #[error("path {path:?} has no index entry at ({}, {})", .point.x, .point.y)]
    MissingIndexEntry { point: GridPoint, path: PathId },

    #[error("index refers to retired path {path:?}")]
    StalePath { path: PathId },

    #[error(
        "path from ({}, {}) to ({}, {}) never closed",
        .start.x, .start.y, .end.x, .end.y
    )]
    UnclosedPath { start: GridPoint, end: GridPoint },

    #[error("loop collapsed to {len} points")]
    DegenerateLoop { len: usize },

    #[error("traced outline fills cell ({x}, {y}) incorrectly, expected dark = {expected}")]
    FillMismatch { x: u32, y: u32, expected: bool },
}

/// Convenience type alias for results using [`OutlineError`].
pub type Result<T> = std::result::Result<T, OutlineError>;
