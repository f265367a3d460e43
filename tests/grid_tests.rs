//! Grid tests - occupancy matrix and its document layout

use polygrid::core::Grid;
use polygrid::types::{Coord, GridSize, GRID_HEIGHT, GRID_WIDTH};

#[test]
fn test_grid_new_empty() {
    let grid = Grid::new(GridSize::default());
    assert_eq!(grid.width(), GRID_WIDTH);
    assert_eq!(grid.height(), GRID_HEIGHT);
    assert_eq!(grid.cells().len(), GRID_WIDTH as usize * GRID_HEIGHT as usize);
    assert!(grid.is_empty());

    for row in 0..GRID_HEIGHT as usize {
        for col in 0..GRID_WIDTH as usize {
            assert_eq!(grid.get(row, col), None, "cell ({}, {}) should be empty", row, col);
        }
    }
}

#[test]
fn test_grid_at_out_of_bounds() {
    let grid = Grid::new(GridSize::default());

    // Negative coordinates
    assert_eq!(grid.at(Coord::new(-1, 0)), None);
    assert_eq!(grid.at(Coord::new(0, -1)), None);

    // Beyond bounds
    assert_eq!(grid.at(Coord::new(GRID_HEIGHT as i32, 0)), None);
    assert_eq!(grid.at(Coord::new(0, GRID_WIDTH as i32)), None);

    // Corners
    assert_eq!(grid.at(Coord::new(0, 0)), Some(None));
    assert_eq!(
        grid.at(Coord::new(GRID_HEIGHT as i32 - 1, GRID_WIDTH as i32 - 1)),
        Some(None)
    );
}

#[test]
fn test_grid_set_and_get() {
    let mut grid = Grid::new(GridSize::default());

    grid.set(10, 5, Some(3));
    assert_eq!(grid.get(10, 5), Some(3));
    assert_eq!(grid.at(Coord::new(10, 5)), Some(Some(3)));
    assert_eq!(grid.count_of(3), 1);

    grid.set(10, 5, None);
    assert_eq!(grid.get(10, 5), None);
    assert!(grid.is_empty());
}

#[test]
fn test_grid_rows_are_row_major() {
    let mut grid = Grid::new(GridSize::new(3, 2));
    grid.set(0, 2, Some(1));
    grid.set(1, 0, Some(2));

    let rows = grid.to_rows();
    assert_eq!(rows, vec![vec![None, None, Some(1)], vec![Some(2), None, None]]);
    assert_eq!(grid.cells()[2], Some(1));
    assert_eq!(grid.cells()[3], Some(2));
}

#[test]
fn test_grid_clear_keeps_size() {
    let mut grid = Grid::new(GridSize::new(4, 4));
    grid.set(2, 2, Some(0));
    grid.clear();
    assert!(grid.is_empty());
    assert_eq!(grid.size(), GridSize::new(4, 4));

    grid.reset(GridSize::new(2, 5));
    assert_eq!(grid.width(), 2);
    assert_eq!(grid.height(), 5);
    assert_eq!(grid.cells().len(), 10);
}
