//! Key and mouse mapping from terminal events to editor input.

use crate::types::EditorAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

/// One unit of user input, after decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    /// A toolbar-style editor action
    Action(EditorAction),
    /// Type a character into the pattern buffer
    Insert(char),
    Newline,
    Backspace,
    /// Move the keyboard cursor by (rows, cols)
    MoveCursor { d_row: i32, d_col: i32 },
    /// Click the grid cell under the keyboard cursor
    ClickCursor,
    /// Left mouse press at a terminal position
    Click { x: u16, y: u16 },
}

/// Map keyboard input to editor input.
pub fn map_key_event(key: KeyEvent) -> Option<InputCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let KeyCode::Char(ch) = key.code else {
            return None;
        };
        let action = match ch.to_ascii_lowercase() {
            'p' => EditorAction::ConfirmShape,
            't' => EditorAction::ConfirmTemplate,
            'k' => EditorAction::ClearShapes,
            'o' => EditorAction::ClearOverlay,
            's' => EditorAction::SaveLocal,
            'l' => EditorAction::LoadLocal,
            'e' => EditorAction::SaveFile,
            'r' => EditorAction::LoadFile,
            'g' => return Some(InputCommand::ClickCursor),
            _ => return None,
        };
        return Some(InputCommand::Action(action));
    }

    match key.code {
        KeyCode::Char(ch) => Some(InputCommand::Insert(ch)),
        KeyCode::Enter => Some(InputCommand::Newline),
        KeyCode::Backspace => Some(InputCommand::Backspace),
        KeyCode::Delete => Some(InputCommand::Action(EditorAction::DeleteSelected)),

        // Cursor
        KeyCode::Up => Some(InputCommand::MoveCursor { d_row: -1, d_col: 0 }),
        KeyCode::Down => Some(InputCommand::MoveCursor { d_row: 1, d_col: 0 }),
        KeyCode::Left => Some(InputCommand::MoveCursor { d_row: 0, d_col: -1 }),
        KeyCode::Right => Some(InputCommand::MoveCursor { d_row: 0, d_col: 1 }),

        _ => None,
    }
}

/// Map a mouse event; only left-button presses matter.
pub fn map_mouse_event(event: MouseEvent) -> Option<InputCommand> {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(InputCommand::Click {
            x: event.column,
            y: event.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the editor.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
