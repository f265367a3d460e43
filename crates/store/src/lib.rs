//! Storage module - persistence I/O for editor documents
//!
//! The core turns state into JSON text and back; this crate only moves that
//! text to and from storage. Two destinations exist:
//!
//! - **Local slot**: a fixed file in the data directory, the quick
//!   save/restore spot (`Ctrl+S` / `Ctrl+L` in the terminal UI)
//! - **State file**: a user-chosen path for export/import (`Ctrl+E` / `Ctrl+R`)
//!
//! # Async Boundary
//!
//! Loads are the only asynchronous step. [`StoreRuntime`] owns a small tokio
//! runtime, reads files on it and hands the text back to the synchronous UI
//! loop through a channel ([`StoreRuntime::try_recv`]). While a read is in
//! flight the caller must keep conflicting actions away from the editor
//! (`Editor::begin_load` does this gating in the core).
//!
//! Saves never touch editor state, so they run to completion before returning.
//!
//! # Environment Variables
//!
//! - `POLYGRID_DATA_DIR`: directory holding the local slot (default: XDG data dir)
//! - `POLYGRID_EXPORT_PATH`: export/import file (default: `polyomino-state.json`)

pub mod config;
pub mod file;
pub mod local;
pub mod runtime;

pub use config::{default_data_dir, StoreConfig, DEFAULT_EXPORT_FILE, LOCAL_SLOT_FILE};
pub use file::{load_file, save_file, LoadOutcome};
pub use local::LocalSlot;
pub use runtime::{LoadSource, StoreEvent, StoreRuntime};
