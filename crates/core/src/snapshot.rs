//! Editor snapshot - the full persisted state as plain data

use crate::grid::Grid;
use crate::registry::Shape;
use crate::types::{Coord, ShapeId};

/// Full editor state, enough to rebuild it without replaying history.
///
/// Selection is deliberately absent: it never survives a save/load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSnapshot {
    pub grid: Grid,
    pub shapes: Vec<Shape>,
    pub next_id: ShapeId,
    pub overlay: Vec<Coord>,
}

impl EditorSnapshot {
    /// An empty state for the given grid
    pub fn empty(grid: Grid) -> Self {
        Self {
            grid,
            shapes: Vec::new(),
            next_id: 0,
            overlay: Vec::new(),
        }
    }
}
