//! Keyboard cursor over the grid.

use crate::types::{Coord, GridSize};

/// A grid position moved with the arrow keys, clamped to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    at: Coord,
    size: GridSize,
}

impl GridCursor {
    pub fn new(size: GridSize) -> Self {
        Self {
            at: Coord::ORIGIN,
            size,
        }
    }

    pub fn position(&self) -> Coord {
        self.at
    }

    pub fn move_by(&mut self, d_row: i32, d_col: i32) {
        let max_row = (self.size.height as i32 - 1).max(0);
        let max_col = (self.size.width as i32 - 1).max(0);
        self.at = Coord::new(
            (self.at.row + d_row).clamp(0, max_row),
            (self.at.col + d_col).clamp(0, max_col),
        );
    }

    /// Jump to a cell (e.g. after a mouse click); ignored outside the grid
    pub fn jump_to(&mut self, at: Coord) {
        if self.size.contains(at) {
            self.at = at;
        }
    }
}
