//! Placement engine - collision tests, first-fit search and moves
//!
//! All functions are pure over a [`Grid`] except [`stamp`], [`erase`] and
//! [`try_move`], which write footprints. Moves are validate-then-commit: the
//! target is checked in full before any cell is touched, so a rejected move
//! never leaves a partial mutation behind.

use crate::error::EditorError;
use crate::grid::Grid;
use crate::registry::Shape;
use crate::types::{Coord, Pattern, ShapeId};

/// Check whether `pattern` fits at `anchor`.
///
/// Every filled cell must land inside the grid and on a cell that is either
/// empty or owned by `ignored` (a shape may overlap its own current footprint
/// while it is being moved).
pub fn is_space_empty(grid: &Grid, anchor: Coord, pattern: &Pattern, ignored: Option<ShapeId>) -> bool {
    pattern.filled_cells().all(|(i, j, _)| {
        match grid.at(anchor.offset(i as i32, j as i32)) {
            // Out of bounds
            None => false,
            Some(None) => true,
            Some(Some(id)) => Some(id) == ignored,
        }
    })
}

/// Find the first anchor, in row-major order, where `pattern` fits.
///
/// Candidates run from row 0 to `height - pattern_height` and col 0 to
/// `width - pattern_width` inclusive, so the top-left-most slot always wins.
/// Returns `None` if the pattern fits nowhere (including patterns larger than
/// the grid).
pub fn find_empty_space(grid: &Grid, pattern: &Pattern) -> Option<Coord> {
    let max_row = grid.height() as i32 - pattern.height() as i32;
    let max_col = grid.width() as i32 - pattern.width() as i32;

    for row in 0..=max_row {
        for col in 0..=max_col {
            let anchor = Coord::new(row, col);
            if is_space_empty(grid, anchor, pattern, None) {
                return Some(anchor);
            }
        }
    }
    None
}

/// Write a shape's footprint into the grid.
///
/// The caller must have validated the footprint (via [`is_space_empty`] or
/// document decoding).
pub fn stamp(grid: &mut Grid, shape: &Shape) {
    for (at, _) in shape.footprint() {
        grid.set(at.row as usize, at.col as usize, Some(shape.id));
    }
}

/// Clear a shape's footprint from the grid
pub fn erase(grid: &mut Grid, shape: &Shape) {
    for (at, _) in shape.footprint() {
        grid.set(at.row as usize, at.col as usize, None);
    }
}

/// Compute and validate the anchor a move would produce.
///
/// The candidate anchor is `target - offset`, where `offset` is the grab
/// offset recorded when the shape was selected.
pub fn validate_move(grid: &Grid, shape: &Shape, target: Coord, offset: Coord) -> Result<Coord, EditorError> {
    let anchor = target.minus(offset);
    if is_space_empty(grid, anchor, &shape.pattern, Some(shape.id)) {
        Ok(anchor)
    } else {
        Err(EditorError::IllegalMove { id: shape.id, anchor })
    }
}

/// Move a shape so that its grab offset lands on `target`.
///
/// On success the old footprint is cleared, the anchor updated and the new
/// footprint written; the previous anchor is returned. On failure nothing
/// changes.
pub fn try_move(grid: &mut Grid, shape: &mut Shape, target: Coord, offset: Coord) -> Result<Coord, EditorError> {
    let anchor = validate_move(grid, shape, target, offset)?;
    let from = shape.anchor;
    erase(grid, shape);
    shape.anchor = anchor;
    stamp(grid, shape);
    Ok(from)
}
