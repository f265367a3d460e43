//! `polygrid show`: print a saved document as text.
//!
//! Decodes the document with the same validation as an interactive load and
//! writes one line per grid row, pattern glyphs for occupied cells, `x` for
//! overlay marks and `.` for everything else.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, bail, Result};

use crate::config::AppConfig;
use crate::core::{decode, Editor, EditorSnapshot};
use crate::store::{LoadOutcome, LoadSource, StoreEvent, StoreRuntime};
use crate::types::{Coord, EMPTY_MARK, TEMPLATE_MARK};

const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// Read, validate and render the document at `path`.
pub fn run(config: &AppConfig, path: &Path) -> Result<String> {
    let mut store = StoreRuntime::new(config.store.clone())?;
    store.request_load(LoadSource::File(path.to_path_buf()));

    let event = store
        .wait(READ_TIMEOUT)
        .ok_or_else(|| anyhow!("timed out reading {}", path.display()))?;
    let StoreEvent::Loaded { result, .. } = event;
    let text = match result? {
        LoadOutcome::Found(text) => text,
        LoadOutcome::NotFound => bail!("no document at {}", path.display()),
    };

    let snapshot = decode(&text, config.grid)?;
    log::info!(
        "{}: {} shapes, next id {}",
        path.display(),
        snapshot.shapes.len(),
        snapshot.next_id
    );
    Ok(render_text(snapshot))
}

/// Render a snapshot as text, followed by a summary line.
pub fn render_text(snapshot: EditorSnapshot) -> String {
    let size = snapshot.grid.size();
    let mut editor = Editor::headless(size);
    editor.restore(snapshot);

    let mut out = String::with_capacity(size.area() + size.height as usize + 64);
    for row in 0..size.height as i32 {
        for col in 0..size.width as i32 {
            let at = Coord::new(row, col);
            let ch = match editor.shape_at(at).and_then(|s| s.glyph_at(at)) {
                Some(ch) => ch,
                None if editor.overlay().contains(&at) => TEMPLATE_MARK,
                None => EMPTY_MARK,
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "{} shapes, next id {}, {} overlay marks\n",
        editor.shapes().len(),
        editor.next_id(),
        editor.overlay().len()
    ));
    out
}
