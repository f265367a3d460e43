//! Application tests - key handling, status messages and storage round trips

use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use polygrid::app::App;
use polygrid::config::AppConfig;
use polygrid::input::InputCommand;
use polygrid::store::StoreConfig;
use polygrid::term::{FrameBuffer, StatusLevel, Viewport};
use polygrid::types::{Coord, GridSize};

const VIEWPORT: Viewport = Viewport {
    width: 120,
    height: 40,
};

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("polygrid-app-{}-{}", std::process::id(), name));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn app(name: &str) -> (App, PathBuf) {
    let dir = scratch_dir(name);
    let config = AppConfig {
        grid: GridSize::new(12, 8),
        store: StoreConfig {
            data_dir: dir.clone(),
            export_path: dir.join("export.json"),
        },
        log_path: None,
    };
    (App::new(&config).unwrap(), dir)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        let code = if ch == '\n' {
            KeyCode::Enter
        } else {
            KeyCode::Char(ch)
        };
        app.handle_key(key(code));
    }
}

fn status_text(app: &App) -> String {
    app.status().map(|(_, text)| text.to_string()).unwrap_or_default()
}

#[test]
fn typing_and_confirming_places_a_shape() {
    let (mut app, dir) = app("place");
    type_text(&mut app, "ab\n.c");
    assert_eq!(app.buffer().text(), "AB\n.C");

    app.handle_key(ctrl('p'));
    assert_eq!(app.editor().shapes().len(), 1);
    assert_eq!(app.status(), Some((StatusLevel::Info, "Placed shape #0")));
    assert!(app.buffer().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn no_space_is_reported_as_warning() {
    let (mut app, dir) = app("no-space");
    type_text(&mut app, "aaaaaaaaaaaaa");
    app.handle_key(ctrl('p'));

    assert_eq!(
        app.status(),
        Some((StatusLevel::Warn, "No empty space found for this shape"))
    );
    assert!(app.editor().shapes().is_empty());
    // The text stays so it can be edited.
    assert!(!app.buffer().is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mouse_and_cursor_clicks_select_and_move() {
    let (mut app, dir) = app("click");
    type_text(&mut app, "a");
    app.handle_key(ctrl('p'));

    // Grid frame at x=1, first cell at terminal (2, 1).
    app.handle(InputCommand::Click { x: 3, y: 1 });
    assert_eq!(app.editor().selection().active_id(), Some(0));
    assert_eq!(app.status().map(|(level, _)| level), Some(StatusLevel::Info));

    // Move the cursor to (2, 3) and click there: the shape follows.
    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    for _ in 0..3 {
        app.handle_key(key(KeyCode::Right));
    }
    assert_eq!(app.cursor(), Coord::new(2, 3));
    app.handle_key(ctrl('g'));

    assert_eq!(app.editor().shape(0).unwrap().anchor, Coord::new(2, 3));
    assert_eq!(status_text(&app), "Moved shape #0 to (2, 3)");
    assert!(app.editor().selection().is_idle());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn delete_asks_for_confirmation() {
    let (mut app, dir) = app("delete");
    type_text(&mut app, "a");
    app.handle_key(ctrl('p'));

    // Nothing selected yet
    app.handle_key(key(KeyCode::Delete));
    assert_eq!(
        app.status(),
        Some((StatusLevel::Error, "No shape selected"))
    );
    assert_eq!(app.pending_delete(), None);

    app.handle_key(ctrl('g'));
    app.handle_key(key(KeyCode::Delete));
    assert_eq!(app.pending_delete(), Some(0));
    assert_eq!(status_text(&app), "Delete shape #0? (y/n)");

    app.handle_key(key(KeyCode::Char('n')));
    assert_eq!(app.pending_delete(), None);
    assert_eq!(app.editor().shapes().len(), 1);
    // The answer key is not typed into the buffer.
    assert!(app.buffer().is_empty());

    app.handle_key(key(KeyCode::Delete));
    app.handle_key(key(KeyCode::Char('y')));
    assert!(app.editor().shapes().is_empty());
    assert!(app.editor().grid().is_empty());
    assert_eq!(status_text(&app), "Deleted shape #0");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn click_during_delete_prompt_keeps_both_shapes() {
    let (mut app, dir) = app("delete-click");
    type_text(&mut app, "a");
    app.handle_key(ctrl('p'));
    type_text(&mut app, "b");
    app.handle_key(ctrl('p'));
    assert_eq!(app.editor().shape(1).unwrap().anchor, Coord::new(0, 1));

    app.handle_key(ctrl('g'));
    app.handle_key(key(KeyCode::Delete));
    assert_eq!(app.pending_delete(), Some(0));

    // Clicking shape #1 answers the prompt instead of changing the selection.
    app.handle(InputCommand::Click { x: 4, y: 1 });
    assert_eq!(app.pending_delete(), None);
    assert_eq!(status_text(&app), "Kept shape #0");
    assert_eq!(app.editor().selection().active_id(), Some(0));

    app.handle_key(key(KeyCode::Char('y')));
    assert_eq!(app.editor().shapes().len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn save_and_load_local_slot() {
    let (mut app, dir) = app("local");
    type_text(&mut app, "ab");
    app.handle_key(ctrl('p'));
    type_text(&mut app, "..x");
    app.handle_key(ctrl('t'));
    let saved = app.editor().snapshot();

    app.handle_key(ctrl('s'));
    assert_eq!(status_text(&app), "State saved to local storage!");

    app.handle_key(ctrl('k'));
    app.handle_key(ctrl('o'));
    assert!(app.editor().shapes().is_empty());
    assert!(app.editor().overlay().is_empty());

    app.handle_key(ctrl('l'));
    assert!(app.editor().is_load_pending());
    assert!(app.wait_for_store(Duration::from_secs(5)));

    assert!(!app.editor().is_load_pending());
    assert_eq!(app.editor().snapshot(), saved);
    assert_eq!(status_text(&app), "State loaded from local storage");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn load_without_saved_state_reports_not_found() {
    let (mut app, dir) = app("empty-slot");
    app.handle_key(ctrl('l'));
    assert!(app.wait_for_store(Duration::from_secs(5)));

    assert_eq!(
        app.status(),
        Some((StatusLevel::Warn, "No saved state found"))
    );
    assert!(!app.editor().is_load_pending());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn mutations_wait_for_pending_load() {
    let (mut app, dir) = app("pending");
    type_text(&mut app, "a");
    app.handle_key(ctrl('p'));
    app.handle_key(ctrl('e'));

    app.handle_key(ctrl('r'));
    type_text(&mut app, "b");
    app.handle_key(ctrl('p'));
    assert_eq!(
        app.status(),
        Some((StatusLevel::Error, "A load is in progress"))
    );

    // Saving is still allowed.
    app.handle_key(ctrl('s'));
    assert_eq!(status_text(&app), "State saved to local storage!");

    assert!(app.wait_for_store(Duration::from_secs(5)));
    assert_eq!(app.editor().shapes().len(), 1);
    app.handle_key(ctrl('p'));
    assert_eq!(app.editor().shapes().len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn malformed_import_keeps_current_state() {
    let (mut app, dir) = app("malformed");
    type_text(&mut app, "a");
    app.handle_key(ctrl('p'));
    let before = app.editor().snapshot();

    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("export.json"), r#"{"grid": []}"#).unwrap();
    app.handle_key(ctrl('r'));
    assert!(app.wait_for_store(Duration::from_secs(5)));

    let (level, text) = app.status().unwrap();
    assert_eq!(level, StatusLevel::Error);
    assert!(text.starts_with("Malformed document"), "{}", text);
    assert_eq!(app.editor().snapshot(), before);
    assert!(!app.editor().is_load_pending());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn render_shows_grid_and_status() {
    let (mut app, dir) = app("render");
    type_text(&mut app, "q");
    app.handle_key(ctrl('p'));

    let mut fb = FrameBuffer::new(0, 0);
    app.render_into(VIEWPORT, &mut fb);
    assert_eq!(fb.width(), VIEWPORT.width);
    assert_eq!(fb.get(2, 1).unwrap().ch, 'Q');
    // 8 rows + border; status line right below the frame.
    assert!(fb.row_text(10).contains("Placed shape #0"));

    let _ = std::fs::remove_dir_all(&dir);
}
