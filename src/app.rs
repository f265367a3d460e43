//! Terminal application state.
//!
//! [`App`] sits between the input mapping, the editor core and storage. It
//! owns the [`Editor`] (rendering into a [`GridCanvas`]), the pattern input
//! buffer, the keyboard cursor and the [`StoreRuntime`], and turns every
//! outcome into a one-line status message for the side panel.
//!
//! The app does no terminal I/O itself; the binary feeds it decoded events
//! and asks it to paint into a framebuffer.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::config::AppConfig;
use crate::core::{ClickOutcome, DocumentStyle, Editor, EditorError};
use crate::input::{map_key_event, GridCursor, InputCommand, PatternBuffer};
use crate::store::{LoadOutcome, LoadSource, StoreEvent, StoreRuntime};
use crate::term::{FrameBuffer, GridCanvas, GridView, PanelView, StatusLevel, Viewport};
use crate::types::{Coord, EditorAction, ShapeId};

pub struct App {
    editor: Editor<GridCanvas>,
    buffer: PatternBuffer,
    cursor: GridCursor,
    store: StoreRuntime,
    view: GridView,
    status: Option<(StatusLevel, String)>,
    /// Shape awaiting a y/n answer before deletion
    pending_delete: Option<ShapeId>,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let store = StoreRuntime::new(config.store.clone())?;
        Ok(Self {
            editor: Editor::new(config.grid, GridCanvas::new(config.grid)),
            buffer: PatternBuffer::new(),
            cursor: GridCursor::new(config.grid),
            store,
            view: GridView::default(),
            status: None,
            pending_delete: None,
        })
    }

    // ============== Accessors ==============

    pub fn editor(&self) -> &Editor<GridCanvas> {
        &self.editor
    }

    pub fn buffer(&self) -> &PatternBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Coord {
        self.cursor.position()
    }

    pub fn status(&self) -> Option<(StatusLevel, &str)> {
        self.status.as_ref().map(|(level, text)| (*level, text.as_str()))
    }

    pub fn pending_delete(&self) -> Option<ShapeId> {
        self.pending_delete
    }

    pub fn is_busy(&self) -> bool {
        self.store.is_busy()
    }

    // ============== Input ==============

    /// Handle a key press (quit keys are the caller's business).
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.pending_delete.is_some() {
            let yes = matches!(key.code, KeyCode::Char('y') | KeyCode::Char('Y'));
            self.answer_delete(yes);
            return;
        }
        if let Some(cmd) = map_key_event(key) {
            self.handle(cmd);
        }
    }

    pub fn handle(&mut self, cmd: InputCommand) {
        // Any input other than y/n answers the open prompt with "no".
        if self.pending_delete.is_some() {
            self.answer_delete(false);
            return;
        }
        match cmd {
            InputCommand::Action(action) => self.apply_action(action),
            InputCommand::Insert(ch) => self.buffer.insert(ch),
            InputCommand::Newline => self.buffer.newline(),
            InputCommand::Backspace => self.buffer.backspace(),
            InputCommand::MoveCursor { d_row, d_col } => self.cursor.move_by(d_row, d_col),
            InputCommand::ClickCursor => {
                let at = self.cursor.position();
                self.click(at);
            }
            InputCommand::Click { x, y } => {
                if let Some(at) = self.view.cell_at(self.editor.sink(), x, y) {
                    self.cursor.jump_to(at);
                    self.click(at);
                }
            }
        }
    }

    /// Resolve a pending delete confirmation
    pub fn answer_delete(&mut self, yes: bool) {
        let Some(id) = self.pending_delete.take() else {
            return;
        };
        if !yes || self.editor.selection().active_id() != Some(id) {
            self.info(format!("Kept shape #{}", id));
            return;
        }
        match self.editor.delete_selected() {
            Ok(id) => self.info(format!("Deleted shape #{}", id)),
            Err(e) => self.report(&e),
        }
    }

    pub fn apply_action(&mut self, action: EditorAction) {
        if action.mutates() && self.editor.is_load_pending() {
            self.report(&EditorError::LoadPending);
            return;
        }

        match action {
            EditorAction::ConfirmShape => match self.editor.confirm_shape(self.buffer.text()) {
                Ok(id) => {
                    self.buffer.clear();
                    self.info(format!("Placed shape #{}", id));
                }
                Err(e) => self.report(&e),
            },
            EditorAction::ConfirmTemplate => {
                match self.editor.confirm_template(self.buffer.text()) {
                    Ok(marks) => {
                        self.buffer.clear();
                        self.info(format!("Template overlay set ({} cells)", marks));
                    }
                    Err(e) => self.report(&e),
                }
            }
            EditorAction::ClearShapes => match self.editor.clear_shapes() {
                Ok(()) => self.info("All shapes cleared".to_string()),
                Err(e) => self.report(&e),
            },
            EditorAction::ClearOverlay => match self.editor.clear_overlay() {
                Ok(()) => self.info("Template overlay cleared".to_string()),
                Err(e) => self.report(&e),
            },
            EditorAction::DeleteSelected => match self.editor.selected_shape() {
                Some(shape) => {
                    let id = shape.id;
                    self.pending_delete = Some(id);
                    self.status = Some((
                        StatusLevel::Warn,
                        format!("Delete shape #{}? (y/n)", id),
                    ));
                }
                None => self.report(&EditorError::NoActiveSelection),
            },
            EditorAction::SaveLocal => self.save(DocumentStyle::Compact, |store, doc| {
                store.save_local(doc)?;
                Ok("State saved to local storage!".to_string())
            }),
            EditorAction::SaveFile => self.save(DocumentStyle::Pretty, |store, doc| {
                let path = store.save_file(doc)?;
                Ok(format!("State exported to {}", path.display()))
            }),
            EditorAction::LoadLocal => self.start_load(LoadSource::Local),
            EditorAction::LoadFile => {
                let path = self.store.config().export_path.clone();
                self.start_load(LoadSource::File(path));
            }
        }
    }

    fn click(&mut self, at: Coord) {
        match self.editor.click(at.row, at.col) {
            Ok(ClickOutcome::Selected { id, .. }) => self.info(format!("Selected shape #{}", id)),
            Ok(ClickOutcome::Deselected { id }) => self.info(format!("Deselected shape #{}", id)),
            Ok(ClickOutcome::Moved { id, to, .. }) => {
                self.info(format!("Moved shape #{} to {}", id, to))
            }
            Ok(ClickOutcome::Ignored) => {}
            Err(e) => self.report(&e),
        }
    }

    // ============== Storage ==============

    fn save<F>(&mut self, style: DocumentStyle, write: F)
    where
        F: FnOnce(&StoreRuntime, &str) -> Result<String>,
    {
        let document = match self.editor.save_document(style) {
            Ok(document) => document,
            Err(e) => return self.report(&e),
        };
        match write(&self.store, &document) {
            Ok(message) => self.info(message),
            Err(e) => {
                log::error!("save failed: {:#}", e);
                self.error(format!("Save failed: {:#}", e));
            }
        }
    }

    fn start_load(&mut self, source: LoadSource) {
        if let Err(e) = self.editor.begin_load() {
            return self.report(&e);
        }
        self.info(format!("Loading from {}...", describe(&source)));
        self.store.request_load(source);
    }

    /// Apply any finished storage work without blocking
    pub fn poll_store(&mut self) {
        while let Some(event) = self.store.try_recv() {
            self.apply_store_event(event);
        }
    }

    /// Block until pending storage work finishes or `timeout` passes.
    ///
    /// Returns `false` on timeout.
    pub fn wait_for_store(&mut self, timeout: Duration) -> bool {
        while self.store.is_busy() {
            match self.store.wait(timeout) {
                Some(event) => self.apply_store_event(event),
                None => return false,
            }
        }
        true
    }

    fn apply_store_event(&mut self, event: StoreEvent) {
        let StoreEvent::Loaded { source, result } = event;
        match result {
            Ok(LoadOutcome::Found(text)) => match self.editor.load_document(&text) {
                Ok(()) => self.info(format!("State loaded from {}", describe(&source))),
                Err(e) => self.report(&e),
            },
            Ok(LoadOutcome::NotFound) => {
                self.editor.cancel_load();
                self.status = Some((StatusLevel::Warn, "No saved state found".to_string()));
            }
            Err(e) => {
                self.editor.cancel_load();
                log::error!("load from {} failed: {:#}", source.label(), e);
                self.error(format!("Load failed: {:#}", e));
            }
        }
    }

    // ============== Status ==============

    fn info(&mut self, text: String) {
        self.status = Some((StatusLevel::Info, text));
    }

    fn error(&mut self, text: String) {
        self.status = Some((StatusLevel::Error, text));
    }

    fn report(&mut self, err: &EditorError) {
        let level = if err.is_notice() {
            StatusLevel::Warn
        } else {
            StatusLevel::Error
        };
        self.status = Some((level, capitalize(&err.to_string())));
    }

    // ============== Rendering ==============

    pub fn render_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let panel = PanelView {
            pattern: self.buffer.text(),
            shape_count: self.editor.shapes().len(),
            next_id: self.editor.next_id(),
            selected: self.editor.selected_shape().map(|s| (s.id, s.anchor)),
            overlay_marks: self.editor.overlay().len(),
            cursor: Some(self.cursor.position()),
            busy: self.store.is_busy(),
            status: self.status(),
        };
        self.view
            .render_into(self.editor.sink(), &panel, viewport, fb);
    }
}

fn describe(source: &LoadSource) -> String {
    match source {
        LoadSource::Local => source.label().to_string(),
        LoadSource::File(path) => path.display().to_string(),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
