//! Placement tests - collision rules, first-fit search and atomic moves

use polygrid::core::{find_empty_space, is_space_empty, ClickOutcome, Editor, EditorError, Grid};
use polygrid::types::{Coord, GridSize, Pattern, GRID_HEIGHT, GRID_WIDTH};

fn pattern(text: &str) -> Pattern {
    Pattern::parse(text).unwrap()
}

#[test]
fn test_is_space_empty_accepts_every_in_bounds_slot_on_empty_grid() {
    let grid = Grid::new(GridSize::default());
    let p = pattern("a.\naa");

    for row in 0..=(GRID_HEIGHT as i32 - 2) {
        for col in 0..=(GRID_WIDTH as i32 - 2) {
            assert!(
                is_space_empty(&grid, Coord::new(row, col), &p, None),
                "anchor ({}, {}) should fit",
                row,
                col
            );
        }
    }
}

#[test]
fn test_is_space_empty_rejects_out_of_bounds() {
    let grid = Grid::new(GridSize::default());
    let p = pattern("aa\naa");

    assert!(!is_space_empty(&grid, Coord::new(-1, 0), &p, None));
    assert!(!is_space_empty(&grid, Coord::new(0, -1), &p, None));
    assert!(!is_space_empty(&grid, Coord::new(GRID_HEIGHT as i32 - 1, 0), &p, None));
    assert!(!is_space_empty(&grid, Coord::new(0, GRID_WIDTH as i32 - 1), &p, None));
    assert!(is_space_empty(
        &grid,
        Coord::new(GRID_HEIGHT as i32 - 2, GRID_WIDTH as i32 - 2),
        &p,
        None
    ));
}

#[test]
fn test_is_space_empty_only_checks_filled_cells() {
    let mut grid = Grid::new(GridSize::new(4, 4));
    grid.set(0, 1, Some(7));

    // The '.' sits on the occupied cell; only filled cells matter.
    assert!(is_space_empty(&grid, Coord::ORIGIN, &pattern("a.\naa"), None));
    assert!(!is_space_empty(&grid, Coord::ORIGIN, &pattern("aa"), None));

    // A pattern whose trailing empty column hangs off the grid still fits.
    assert!(is_space_empty(&grid, Coord::new(3, 3), &pattern("a."), None));
}

#[test]
fn test_is_space_empty_rejects_other_shape_but_not_ignored() {
    let mut grid = Grid::new(GridSize::default());
    grid.set(5, 5, Some(1));
    let p = pattern("aaa");

    assert!(!is_space_empty(&grid, Coord::new(5, 4), &p, None));
    assert!(!is_space_empty(&grid, Coord::new(5, 4), &p, Some(2)));
    assert!(is_space_empty(&grid, Coord::new(5, 4), &p, Some(1)));
}

#[test]
fn test_find_empty_space_single_cell_on_empty_grid_is_origin() {
    let grid = Grid::new(GridSize::default());
    assert_eq!(find_empty_space(&grid, &pattern("a")), Some(Coord::new(0, 0)));
}

#[test]
fn test_find_empty_space_is_row_major() {
    let mut grid = Grid::new(GridSize::new(4, 3));
    // Block row 0 except its last cell.
    for col in 0..3 {
        grid.set(0, col, Some(0));
    }

    assert_eq!(find_empty_space(&grid, &pattern("a")), Some(Coord::new(0, 3)));
    assert_eq!(find_empty_space(&grid, &pattern("aa")), Some(Coord::new(1, 0)));
}

#[test]
fn test_find_empty_space_no_room() {
    let grid = Grid::new(GridSize::new(3, 3));
    assert_eq!(find_empty_space(&grid, &pattern("aaaa")), None);
    assert_eq!(find_empty_space(&grid, &pattern("a\na\na\na")), None);
}

#[test]
fn test_placement_writes_only_the_footprint() {
    let mut editor = Editor::headless(GridSize::default());
    editor.confirm_shape("x.\nxx").unwrap();
    let before = editor.grid().clone();

    let id = editor.confirm_shape("b.b\nbbb").unwrap();
    let shape = editor.shape(id).unwrap().clone();
    assert_eq!(shape.anchor, Coord::new(0, 2));

    let footprint: Vec<Coord> = shape.footprint().map(|(at, _)| at).collect();
    assert_eq!(footprint.len(), 5);
    for row in 0..GRID_HEIGHT as usize {
        for col in 0..GRID_WIDTH as usize {
            let at = Coord::new(row as i32, col as i32);
            if footprint.contains(&at) {
                assert_eq!(editor.grid().get(row, col), Some(id));
            } else {
                assert_eq!(editor.grid().get(row, col), before.get(row, col));
            }
        }
    }
}

#[test]
fn test_two_squares_scenario() {
    let mut editor = Editor::headless(GridSize::default());

    let first = editor.confirm_shape("AA\nAA").unwrap();
    let second = editor.confirm_shape("AA\nAA").unwrap();
    assert_eq!(editor.shape(first).unwrap().anchor, Coord::new(0, 0));
    assert_eq!(editor.shape(second).unwrap().anchor, Coord::new(0, 2));

    // Grab the first square by its bottom-right cell and drop that cell on
    // (2, 3): the square would cover (1, 2)..(2, 3), half of the second one.
    editor.click(1, 1).unwrap();
    let err = editor.click(2, 3).unwrap_err();
    assert!(
        matches!(err, EditorError::IllegalMove { id, anchor } if id == first && anchor == Coord::new(1, 2)),
        "{}",
        err
    );

    assert_eq!(editor.shape(first).unwrap().anchor, Coord::new(0, 0));
    assert_eq!(editor.shape(second).unwrap().anchor, Coord::new(0, 2));
    assert!(editor.selection().is_idle());
}

#[test]
fn test_illegal_move_leaves_state_identical() {
    let mut editor = Editor::headless(GridSize::default());
    editor.confirm_shape("AA\nAA").unwrap();
    editor.confirm_shape("BBB").unwrap();
    editor.confirm_template("..x").unwrap();
    let before = editor.snapshot();

    // The bar landed next to the square on row 0.
    assert_eq!(editor.shape(1).unwrap().anchor, Coord::new(0, 2));

    // Grab the square at its bottom-right cell; dropping that cell on (1, 3)
    // would put the square's top row over the bar.
    assert_eq!(
        editor.click(1, 1).unwrap(),
        ClickOutcome::Selected {
            id: 0,
            offset: Coord::new(1, 1)
        }
    );
    assert!(editor.click(1, 3).is_err());
    assert_eq!(editor.snapshot(), before);

    // Off the grid is rejected the same way.
    editor.click(0, 0).unwrap();
    assert!(editor.click(GRID_HEIGHT as i32 - 1, 0).is_err());
    assert_eq!(editor.snapshot(), before);
}

#[test]
fn test_move_may_overlap_own_footprint() {
    let mut editor = Editor::headless(GridSize::default());
    let id = editor.confirm_shape("aaa").unwrap();

    // Grab the right cell and shift the bar one column right.
    editor.click(0, 2).unwrap();
    assert_eq!(
        editor.click(0, 3).unwrap(),
        ClickOutcome::Moved {
            id,
            from: Coord::new(0, 0),
            to: Coord::new(0, 1)
        }
    );

    assert_eq!(editor.grid().get(0, 0), None);
    for col in 1..=3 {
        assert_eq!(editor.grid().get(0, col), Some(id));
    }
    assert_eq!(editor.grid().count_of(id), 3);
}
