//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, persistence).
//!
//! # Grid Dimensions
//!
//! The default grid is 40 columns by 30 rows:
//!
//! - **Width**: 40 columns (indexed 0-39)
//! - **Height**: 30 rows (indexed 0-29)
//!
//! Dimensions are chosen once at startup (see [`GridSize`]) and stay fixed for
//! the lifetime of the process.
//!
//! # Authoring Format
//!
//! Shapes are typed as newline-separated rows. Every character other than `.`
//! is a filled cell; letters are uppercased. Templates use the same layout but
//! only `x`/`X` cells are marked.
//!
//! # Examples
//!
//! ```
//! use polygrid_types::{parse_template, Coord, GridSize, Pattern, GRID_HEIGHT, GRID_WIDTH};
//!
//! let pattern = Pattern::parse("ab\n.c").unwrap();
//! assert_eq!(pattern.rows(), &["AB".to_string(), ".C".to_string()]);
//! assert_eq!(pattern.width(), 2);
//! assert_eq!(pattern.filled_cells().count(), 3);
//!
//! let marks = parse_template("x.\n.X", GridSize::default());
//! assert_eq!(marks, vec![Coord::new(0, 0), Coord::new(1, 1)]);
//!
//! assert_eq!(GRID_WIDTH, 40);
//! assert_eq!(GRID_HEIGHT, 30);
//! ```

/// Default grid width in cells (40 columns)
pub const GRID_WIDTH: u16 = 40;

/// Default grid height in cells (30 rows)
pub const GRID_HEIGHT: u16 = 30;

/// Pattern character marking an empty cell
pub const EMPTY_MARK: char = '.';

/// Template character marking an overlay cell (compared case-insensitively)
pub const TEMPLATE_MARK: char = 'x';

/// Identifier of a placed shape.
///
/// Ids are assigned sequentially from 0 and never reused while the registry
/// lives, even across deletes.
pub type ShapeId = u32;

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(id)`: Cell occupied by the shape with that id
pub type Cell = Option<ShapeId>;

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Total number of cells
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Check whether a signed coordinate lies inside `[0, height) x [0, width)`
    pub fn contains(&self, at: Coord) -> bool {
        at.row >= 0 && at.col >= 0 && at.row < self.height as i32 && at.col < self.width as i32
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

/// A signed (row, col) grid coordinate.
///
/// Used for anchors, grab offsets and overlay marks. Signed because a move
/// candidate (`target - offset`) may land above or left of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { row: 0, col: 0 };

    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Translate by a local offset.
    ///
    /// Saturates at the `i32` range; a saturated coordinate is always off-grid.
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Component-wise difference `self - other`, saturating like [`Coord::offset`]
    pub fn minus(self, other: Coord) -> Self {
        Self::new(self.row.saturating_sub(other.row), self.col.saturating_sub(other.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A shape pattern: ordered rows of characters, possibly ragged.
///
/// A character is filled unless it is [`EMPTY_MARK`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Pattern {
    rows: Vec<String>,
}

impl Pattern {
    /// Parse authored text into a pattern.
    ///
    /// Letters are uppercased, rows are split on newlines and empty rows are
    /// dropped. Returns `None` if nothing is left.
    ///
    /// # Examples
    ///
    /// ```
    /// use polygrid_types::Pattern;
    ///
    /// let p = Pattern::parse("aa\n\na").unwrap();
    /// assert_eq!(p.height(), 2);
    /// assert!(Pattern::parse("\n\n").is_none());
    /// ```
    pub fn parse(text: &str) -> Option<Self> {
        let rows: Vec<String> = split_rows(text).map(|row| row.to_uppercase()).collect();
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    /// Build a pattern from rows verbatim (no case normalization).
    ///
    /// Returns `None` for an empty row list.
    pub fn from_rows(rows: Vec<String>) -> Option<Self> {
        if rows.is_empty() {
            None
        } else {
            Some(Self { rows })
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row, in characters
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }

    /// Iterate filled cells as `(local_row, local_col, glyph)` in row-major order
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, char)> + '_ {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.chars()
                .enumerate()
                .filter(|&(_, ch)| is_filled(ch))
                .map(move |(j, ch)| (i, j, ch))
        })
    }

    /// Glyph at a local position, if that position is filled
    pub fn glyph_at(&self, row: usize, col: usize) -> Option<char> {
        self.rows
            .get(row)
            .and_then(|r| r.chars().nth(col))
            .filter(|&ch| is_filled(ch))
    }
}

/// Check whether a pattern character occupies its cell
#[inline]
pub fn is_filled(ch: char) -> bool {
    ch != EMPTY_MARK
}

/// Parse template text into overlay coordinates anchored at the grid origin.
///
/// Every `x`/`X` inside the grid becomes a mark; other characters and marks
/// falling outside the grid are ignored.
pub fn parse_template(text: &str, size: GridSize) -> Vec<Coord> {
    let mut marks = Vec::new();
    for (i, row) in split_rows(text).enumerate() {
        for (j, ch) in row.chars().enumerate() {
            if !ch.eq_ignore_ascii_case(&TEMPLATE_MARK) {
                continue;
            }
            let at = Coord::new(i as i32, j as i32);
            if size.contains(at) {
                marks.push(at);
            }
        }
    }
    marks
}

fn split_rows(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|row| row.strip_suffix('\r').unwrap_or(row))
        .filter(|row| !row.is_empty())
}

/// User-level editor actions
///
/// These are produced by keyboard input and dispatched by the application.
/// Cell clicks are carried separately since they need coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorAction {
    /// Place the typed pattern at the first free slot
    ConfirmShape,
    /// Replace the overlay with the typed template
    ConfirmTemplate,
    /// Remove every shape and reset the id counter
    ClearShapes,
    /// Remove every overlay mark
    ClearOverlay,
    /// Delete the selected shape
    DeleteSelected,
    /// Save to the local slot
    SaveLocal,
    /// Load from the local slot
    LoadLocal,
    /// Export to the state file
    SaveFile,
    /// Import from the state file
    LoadFile,
}

impl EditorAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use polygrid_types::EditorAction;
    ///
    /// assert_eq!(EditorAction::from_str("confirmShape"), Some(EditorAction::ConfirmShape));
    /// assert_eq!(EditorAction::from_str("SAVELOCAL"), Some(EditorAction::SaveLocal));
    /// assert_eq!(EditorAction::from_str("rotate"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "confirmshape" => Some(EditorAction::ConfirmShape),
            "confirmtemplate" => Some(EditorAction::ConfirmTemplate),
            "clearshapes" => Some(EditorAction::ClearShapes),
            "clearoverlay" => Some(EditorAction::ClearOverlay),
            "deleteselected" => Some(EditorAction::DeleteSelected),
            "savelocal" => Some(EditorAction::SaveLocal),
            "loadlocal" => Some(EditorAction::LoadLocal),
            "savefile" => Some(EditorAction::SaveFile),
            "loadfile" => Some(EditorAction::LoadFile),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            EditorAction::ConfirmShape => "confirmShape",
            EditorAction::ConfirmTemplate => "confirmTemplate",
            EditorAction::ClearShapes => "clearShapes",
            EditorAction::ClearOverlay => "clearOverlay",
            EditorAction::DeleteSelected => "deleteSelected",
            EditorAction::SaveLocal => "saveLocal",
            EditorAction::LoadLocal => "loadLocal",
            EditorAction::SaveFile => "saveFile",
            EditorAction::LoadFile => "loadFile",
        }
    }

    /// Whether the action mutates editor state (and so must wait for a pending load)
    pub fn mutates(&self) -> bool {
        !matches!(self, EditorAction::SaveLocal | EditorAction::SaveFile)
    }
}
