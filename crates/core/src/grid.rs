//! Grid module - the occupancy matrix
//!
//! Each cell is either empty or holds the id of the shape occupying it.
//! Uses a flat array in row-major order (`row * width + col`).
//!
//! The grid performs no bounds inference: [`Grid::get`] and [`Grid::set`]
//! index directly and callers must validate coordinates first (see
//! [`Grid::contains`] and the placement engine). Dimensions only change
//! through [`Grid::reset`].

use crate::types::{Cell, Coord, GridSize, ShapeId};

/// The occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: GridSize,
    /// Flat array of cells, row-major order
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![None; size.area()],
        }
    }

    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.size.height as usize && col < self.size.width as usize,
            "grid access out of range: ({}, {})",
            row,
            col
        );
        row * self.size.width as usize + col
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn width(&self) -> u16 {
        self.size.width
    }

    pub fn height(&self) -> u16 {
        self.size.height
    }

    /// Check if a signed coordinate is inside the grid
    pub fn contains(&self, at: Coord) -> bool {
        self.size.contains(at)
    }

    /// Get cell at (row, col). Panics if out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    /// Set cell at (row, col). Panics if out of range.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let idx = self.index(row, col);
        self.cells[idx] = cell;
    }

    /// Checked lookup by signed coordinate
    ///
    /// Returns `None` when the coordinate lies outside the grid.
    pub fn at(&self, at: Coord) -> Option<Cell> {
        if self.contains(at) {
            Some(self.get(at.row as usize, at.col as usize))
        } else {
            None
        }
    }

    /// Reinitialize every cell to empty with the given dimensions
    pub fn reset(&mut self, size: GridSize) {
        self.size = size;
        self.cells.clear();
        self.cells.resize(size.area(), None);
    }

    /// Empty every cell, keeping the dimensions
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check whether no cell is occupied
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Number of cells occupied by a given shape
    pub fn count_of(&self, id: ShapeId) -> usize {
        self.cells.iter().filter(|c| **c == Some(id)).count()
    }

    /// Iterate rows as slices
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.width.max(1) as usize)
    }

    /// Convert to a 2D vector (persisted document layout)
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        if self.size.width == 0 {
            return vec![Vec::new(); self.size.height as usize];
        }
        self.rows().map(|r| r.to_vec()).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(GridSize::default())
    }
}
