//! Persistence codec - JSON documents for the full editor state
//!
//! Document layout (field names are stable):
//!
//! ```text
//! {
//!   "grid": [[null, 0, ...], ...],                  // rows of nullable shape ids
//!   "shapes": [{"id": 0, "pattern": ["AA"], "row": 0, "col": 0}],
//!   "nextPolyominoId": 1,
//!   "templateOverlay": [{"row": 3, "col": 4}]       // optional, defaults to []
//! }
//! ```
//!
//! Decoding validates the whole document before anything is returned, so a
//! caller never sees a partially applied state.

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::grid::Grid;
use crate::placement::stamp;
use crate::registry::Shape;
use crate::snapshot::EditorSnapshot;
use crate::types::{Coord, GridSize, Pattern, ShapeId};

/// Output formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentStyle {
    /// Single line (local slot)
    #[default]
    Compact,
    /// Indented (exported files)
    Pretty,
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    grid: Vec<Vec<Option<ShapeId>>>,
    #[serde(alias = "polyominoes")]
    shapes: Vec<DocumentShape>,
    #[serde(rename = "nextPolyominoId")]
    next_id: ShapeId,
    #[serde(rename = "templateOverlay", default)]
    overlay: Vec<DocumentCoord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct DocumentShape {
    id: ShapeId,
    pattern: Vec<String>,
    row: i32,
    col: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct DocumentCoord {
    row: i32,
    col: i32,
}

impl From<Coord> for DocumentCoord {
    fn from(c: Coord) -> Self {
        Self { row: c.row, col: c.col }
    }
}

impl From<DocumentCoord> for Coord {
    fn from(c: DocumentCoord) -> Self {
        Coord::new(c.row, c.col)
    }
}

/// Serialize a snapshot to a JSON document
pub fn encode(snapshot: &EditorSnapshot, style: DocumentStyle) -> Result<String, CodecError> {
    let doc = Document {
        grid: snapshot.grid.to_rows(),
        shapes: snapshot
            .shapes
            .iter()
            .map(|s| DocumentShape {
                id: s.id,
                pattern: s.pattern.rows().to_vec(),
                row: s.anchor.row,
                col: s.anchor.col,
            })
            .collect(),
        next_id: snapshot.next_id,
        overlay: snapshot.overlay.iter().copied().map(DocumentCoord::from).collect(),
    };

    let json = match style {
        DocumentStyle::Compact => serde_json::to_string(&doc)?,
        DocumentStyle::Pretty => serde_json::to_string_pretty(&doc)?,
    };
    Ok(json)
}

/// Parse and validate a JSON document against the running grid size
pub fn decode(text: &str, size: GridSize) -> Result<EditorSnapshot, CodecError> {
    let doc: Document = serde_json::from_str(text)?;

    let grid_rows = check_dimensions(&doc.grid, size)?;
    let shapes = check_shapes(doc.shapes, doc.next_id)?;

    // Rebuild occupancy from the shapes and require the stored grid to agree.
    let mut grid = Grid::new(size);
    for shape in &shapes {
        if let Some((at, _)) = shape.footprint().find(|(at, _)| !grid.contains(*at)) {
            log::debug!("shape {} leaves the grid at {}", shape.id, at);
            return Err(CodecError::ShapeOutOfBounds {
                id: shape.id,
                anchor: shape.anchor,
            });
        }
        for (at, _) in shape.footprint() {
            if let Some(Some(other)) = grid.at(at) {
                return Err(CodecError::Overlap {
                    first: other,
                    second: shape.id,
                    at,
                });
            }
        }
        stamp(&mut grid, shape);
    }

    for (row, cells) in grid_rows.iter().enumerate() {
        for (col, &found) in cells.iter().enumerate() {
            let expected = grid.get(row, col);
            if expected != found {
                return Err(CodecError::FootprintMismatch {
                    at: Coord::new(row as i32, col as i32),
                    expected,
                    found,
                });
            }
        }
    }

    let mut overlay = Vec::with_capacity(doc.overlay.len());
    for mark in doc.overlay.into_iter().map(Coord::from) {
        if !size.contains(mark) {
            return Err(CodecError::OverlayOutOfBounds(mark));
        }
        overlay.push(mark);
    }

    Ok(EditorSnapshot {
        grid,
        shapes,
        next_id: doc.next_id,
        overlay,
    })
}

fn check_dimensions(rows: &[Vec<Option<ShapeId>>], size: GridSize) -> Result<&[Vec<Option<ShapeId>>], CodecError> {
    let first_len = rows.first().map(Vec::len).unwrap_or(0);
    if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != first_len) {
        return Err(CodecError::RaggedRow {
            row,
            len: cells.len(),
            expected: first_len,
        });
    }
    if rows.len() != size.height as usize || first_len != size.width as usize {
        return Err(CodecError::dimension_mismatch(size, rows.len(), first_len));
    }
    Ok(rows)
}

fn check_shapes(shapes: Vec<DocumentShape>, next_id: ShapeId) -> Result<Vec<Shape>, CodecError> {
    let mut out: Vec<Shape> = Vec::with_capacity(shapes.len());
    for s in shapes {
        if out.iter().any(|o| o.id == s.id) {
            return Err(CodecError::DuplicateShapeId(s.id));
        }
        if s.id >= next_id {
            return Err(CodecError::NextIdTooSmall { next_id, max_id: s.id });
        }
        let pattern = Pattern::from_rows(s.pattern).ok_or(CodecError::EmptyShapePattern(s.id))?;
        out.push(Shape {
            id: s.id,
            pattern,
            anchor: Coord::new(s.row, s.col),
        });
    }
    Ok(out)
}
