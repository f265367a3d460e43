//! Editor - the single state container for grid, shapes, selection and overlay
//!
//! Constructed once at startup and mutated only through its methods. After
//! every successful operation the grid and registry agree: each occupied cell
//! is covered by exactly the shape whose id it holds. Failed operations leave
//! all state untouched.
//!
//! The editor owns a [`RenderSink`] and notifies it after each mutation.

use crate::codec::{self, DocumentStyle};
use crate::error::EditorError;
use crate::grid::Grid;
use crate::placement;
use crate::registry::{Shape, ShapeRegistry};
use crate::render::{NullSink, RenderSink};
use crate::selection::{Selection, SelectionController, Transition};
use crate::snapshot::EditorSnapshot;
use crate::types::{parse_template, Coord, GridSize, Pattern, ShapeId};

/// Result of a successful click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    Selected { id: ShapeId, offset: Coord },
    Deselected { id: ShapeId },
    Moved { id: ShapeId, from: Coord, to: Coord },
    Ignored,
}

pub struct Editor<R: RenderSink = NullSink> {
    grid: Grid,
    registry: ShapeRegistry,
    selection: SelectionController,
    overlay: Vec<Coord>,
    sink: R,
    load_pending: bool,
}

impl Editor<NullSink> {
    /// An editor that renders nothing
    pub fn headless(size: GridSize) -> Self {
        Self::new(size, NullSink)
    }
}

impl<R: RenderSink> Editor<R> {
    pub fn new(size: GridSize, mut sink: R) -> Self {
        let grid = Grid::new(size);
        sink.on_full_redraw(&[], &[]);
        Self {
            grid,
            registry: ShapeRegistry::new(),
            selection: SelectionController::new(),
            overlay: Vec::new(),
            sink,
            load_pending: false,
        }
    }

    // ============== Accessors ==============

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn size(&self) -> GridSize {
        self.grid.size()
    }

    pub fn shapes(&self) -> &[Shape] {
        self.registry.all()
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.registry.find(id)
    }

    /// Shape occupying a grid cell, if any
    pub fn shape_at(&self, at: Coord) -> Option<&Shape> {
        self.grid.at(at).flatten().and_then(|id| self.registry.find(id))
    }

    pub fn next_id(&self) -> ShapeId {
        self.registry.next_id()
    }

    pub fn selection(&self) -> Selection {
        self.selection.state()
    }

    pub fn selected_shape(&self) -> Option<&Shape> {
        self.selection.active().and_then(|id| self.registry.find(id))
    }

    pub fn overlay(&self) -> &[Coord] {
        &self.overlay
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut R {
        &mut self.sink
    }

    pub fn is_load_pending(&self) -> bool {
        self.load_pending
    }

    fn ensure_no_pending_load(&self) -> Result<(), EditorError> {
        if self.load_pending {
            Err(EditorError::LoadPending)
        } else {
            Ok(())
        }
    }

    // ============== Shapes ==============

    /// Parse authored text and place it at the first free slot.
    ///
    /// The id is only consumed once a slot has been found.
    pub fn confirm_shape(&mut self, text: &str) -> Result<ShapeId, EditorError> {
        self.ensure_no_pending_load()?;
        let pattern = Pattern::parse(text).ok_or(EditorError::EmptyPattern)?;

        let Some(anchor) = placement::find_empty_space(&self.grid, &pattern) else {
            log::info!(
                "no empty space for a {}x{} pattern",
                pattern.height(),
                pattern.width()
            );
            return Err(EditorError::NoSpaceAvailable);
        };

        let Some(shape) = self.registry.create(pattern) else {
            log::warn!("shape ids exhausted at {}", self.registry.next_id());
            return Err(EditorError::IdsExhausted);
        };
        let shape = shape.anchored_at(anchor);
        let id = shape.id;
        placement::stamp(&mut self.grid, &shape);
        self.sink.on_shape_placed(&shape);
        self.registry.add(shape);
        log::debug!("placed shape {} at {}", id, anchor);
        Ok(id)
    }

    /// Handle a click on grid cell (row, col).
    ///
    /// Runs the selection state machine; a click on an empty cell while a
    /// shape is active attempts a move and drops the selection either way.
    pub fn click(&mut self, row: i32, col: i32) -> Result<ClickOutcome, EditorError> {
        self.ensure_no_pending_load()?;
        let at = Coord::new(row, col);
        let Some(cell) = self.grid.at(at) else {
            return Err(EditorError::CellOutOfBounds { row, col });
        };
        let hit = cell
            .and_then(|id| self.registry.find(id))
            .map(|s| (s.id, s.anchor));

        match self.selection.press(hit, at) {
            Transition::Select { id, offset } => {
                self.sink.on_selection_changed(self.registry.find(id));
                Ok(ClickOutcome::Selected { id, offset })
            }
            Transition::Deselect { id } => {
                self.sink.on_selection_changed(None);
                Ok(ClickOutcome::Deselected { id })
            }
            Transition::AttemptMove { id, offset } => {
                let result = self.move_shape(id, at, offset);
                self.sink.on_selection_changed(None);
                result
            }
            Transition::None => Ok(ClickOutcome::Ignored),
        }
    }

    fn move_shape(&mut self, id: ShapeId, target: Coord, offset: Coord) -> Result<ClickOutcome, EditorError> {
        let shape = self
            .registry
            .find_mut(id)
            .ok_or(EditorError::NoActiveSelection)?;

        match placement::try_move(&mut self.grid, shape, target, offset) {
            Ok(from) => {
                log::debug!("moved shape {} from {} to {}", id, from, shape.anchor);
                self.sink.on_shape_moved(shape, from);
                Ok(ClickOutcome::Moved {
                    id,
                    from,
                    to: shape.anchor,
                })
            }
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    /// Remove the selected shape from grid and registry
    pub fn delete_selected(&mut self) -> Result<ShapeId, EditorError> {
        self.ensure_no_pending_load()?;
        let id = self.selection.active().ok_or(EditorError::NoActiveSelection)?;
        self.selection.clear();

        let shape = self
            .registry
            .remove(id)
            .ok_or(EditorError::NoActiveSelection)?;
        placement::erase(&mut self.grid, &shape);
        self.sink.on_shape_cleared(&shape);
        self.sink.on_selection_changed(None);
        log::debug!("deleted shape {}", id);
        Ok(id)
    }

    /// Remove every shape and rewind the id counter. The overlay is kept.
    pub fn clear_shapes(&mut self) -> Result<(), EditorError> {
        self.ensure_no_pending_load()?;
        let size = self.grid.size();
        self.grid.reset(size);
        self.registry.remove_all();
        self.selection.clear();
        self.sink.on_full_redraw(self.registry.all(), &self.overlay);
        Ok(())
    }

    // ============== Overlay ==============

    /// Replace the overlay with the `x` marks of a template.
    ///
    /// Returns the number of marks set. The old overlay is cleared even when
    /// the template is empty.
    pub fn confirm_template(&mut self, text: &str) -> Result<usize, EditorError> {
        self.ensure_no_pending_load()?;
        self.overlay.clear();
        self.sink.on_overlay_cleared();

        let marks = parse_template(text, self.grid.size());
        if !marks.is_empty() {
            self.sink.on_overlay_set(&marks);
        }
        self.overlay = marks;
        Ok(self.overlay.len())
    }

    pub fn clear_overlay(&mut self) -> Result<(), EditorError> {
        self.ensure_no_pending_load()?;
        self.overlay.clear();
        self.sink.on_overlay_cleared();
        Ok(())
    }

    // ============== Persistence ==============

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            grid: self.grid.clone(),
            shapes: self.registry.all().to_vec(),
            next_id: self.registry.next_id(),
            overlay: self.overlay.clone(),
        }
    }

    pub fn save_document(&self, style: DocumentStyle) -> Result<String, EditorError> {
        Ok(codec::encode(&self.snapshot(), style)?)
    }

    /// Mark a load as in flight. Mutating operations fail with
    /// [`EditorError::LoadPending`] until [`Editor::load_document`] or
    /// [`Editor::cancel_load`] is called.
    pub fn begin_load(&mut self) -> Result<(), EditorError> {
        self.ensure_no_pending_load()?;
        self.load_pending = true;
        Ok(())
    }

    /// Abandon a pending load (storage error or nothing found)
    pub fn cancel_load(&mut self) {
        self.load_pending = false;
    }

    /// Decode a document and replace all state with it.
    ///
    /// Completes any pending load. On a malformed document the previous state
    /// is kept.
    pub fn load_document(&mut self, text: &str) -> Result<(), EditorError> {
        self.load_pending = false;
        let snapshot = codec::decode(text, self.grid.size()).map_err(|e| {
            log::warn!("rejected document: {}", e);
            EditorError::from(e)
        })?;
        self.restore(snapshot);
        log::info!(
            "loaded {} shapes, next id {}",
            self.registry.len(),
            self.registry.next_id()
        );
        Ok(())
    }

    /// Replace all state with a snapshot (no merge). The selection is dropped.
    pub fn restore(&mut self, snapshot: EditorSnapshot) {
        debug_assert_eq!(snapshot.grid.size(), self.grid.size());
        self.grid = snapshot.grid;
        self.registry.restore(snapshot.shapes, snapshot.next_id);
        self.overlay = snapshot.overlay;
        self.selection.clear();
        self.sink.on_full_redraw(self.registry.all(), &self.overlay);
    }
}
