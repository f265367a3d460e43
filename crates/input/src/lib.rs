//! Terminal input module (editor-facing).
//!
//! This module is intentionally independent of the editor core. It maps
//! `crossterm` key and mouse events into [`InputCommand`]s and keeps the two
//! pieces of input state the terminal UI needs: the pattern text being typed
//! and a keyboard cursor over the grid.

pub mod buffer;
pub mod cursor;
pub mod map;

pub use polygrid_types as types;

pub use buffer::PatternBuffer;
pub use cursor::GridCursor;
pub use map::{map_key_event, map_mouse_event, should_quit, InputCommand};
