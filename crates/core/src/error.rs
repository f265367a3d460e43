//! Error taxonomy for editor operations and document decoding.
//!
//! Every error here is recoverable: the editor state is left exactly as it was
//! before the failing call.

use thiserror::Error;

use crate::types::{Coord, GridSize, ShapeId};

/// Reasons a persisted document is rejected
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("grid is {found_rows}x{found_cols} (rows x cols), expected {expected_rows}x{expected_cols}")]
    DimensionMismatch {
        expected_rows: u16,
        expected_cols: u16,
        found_rows: usize,
        found_cols: usize,
    },
    #[error("grid row {row} has {len} cells, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
    #[error("shape id {0} appears more than once")]
    DuplicateShapeId(ShapeId),
    #[error("shape {0} has an empty pattern")]
    EmptyShapePattern(ShapeId),
    #[error("nextPolyominoId {next_id} does not exceed shape id {max_id}")]
    NextIdTooSmall { next_id: ShapeId, max_id: ShapeId },
    #[error("shape {id} at {anchor} extends outside the grid")]
    ShapeOutOfBounds { id: ShapeId, anchor: Coord },
    #[error("shapes {first} and {second} overlap at {at}")]
    Overlap {
        first: ShapeId,
        second: ShapeId,
        at: Coord,
    },
    #[error("grid cell {at} holds {found:?} but shapes cover it with {expected:?}")]
    FootprintMismatch {
        at: Coord,
        expected: Option<ShapeId>,
        found: Option<ShapeId>,
    },
    #[error("overlay mark {0} lies outside the grid")]
    OverlayOutOfBounds(Coord),
}

impl CodecError {
    pub(crate) fn dimension_mismatch(expected: GridSize, found_rows: usize, found_cols: usize) -> Self {
        CodecError::DimensionMismatch {
            expected_rows: expected.height,
            expected_cols: expected.width,
            found_rows,
            found_cols,
        }
    }
}

/// Errors returned by [`crate::Editor`] operations
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("illegal move: shape {id} would overlap another shape or leave the grid at {anchor}")]
    IllegalMove { id: ShapeId, anchor: Coord },
    #[error("no empty space found for this shape")]
    NoSpaceAvailable,
    #[error("shape ids are exhausted; clear all shapes to start over")]
    IdsExhausted,
    #[error("no shape selected")]
    NoActiveSelection,
    #[error("malformed document: {0}")]
    MalformedDocument(#[from] CodecError),
    #[error("pattern is empty")]
    EmptyPattern,
    #[error("cell ({row}, {col}) is outside the grid")]
    CellOutOfBounds { row: i32, col: i32 },
    #[error("a load is in progress")]
    LoadPending,
}

impl EditorError {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            EditorError::IllegalMove { .. } => "illegal_move",
            EditorError::NoSpaceAvailable => "no_space",
            EditorError::IdsExhausted => "ids_exhausted",
            EditorError::NoActiveSelection => "no_selection",
            EditorError::MalformedDocument(_) => "malformed_document",
            EditorError::EmptyPattern => "empty_pattern",
            EditorError::CellOutOfBounds { .. } => "out_of_bounds",
            EditorError::LoadPending => "load_pending",
        }
    }

    /// Low-severity conditions that are reported as notices rather than failures
    pub fn is_notice(&self) -> bool {
        matches!(self, EditorError::NoSpaceAvailable | EditorError::EmptyPattern)
    }
}
