//! Storage locations.

use std::env;
use std::path::PathBuf;

/// File name of the local slot inside the data directory
pub const LOCAL_SLOT_FILE: &str = "polyominoCreatorState.json";

/// Default export/import file, relative to the working directory
pub const DEFAULT_EXPORT_FILE: &str = "polyomino-state.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub export_path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            export_path: PathBuf::from(DEFAULT_EXPORT_FILE),
        }
    }
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let data_dir = non_empty_var("POLYGRID_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);
        let export_path = non_empty_var("POLYGRID_EXPORT_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));

        Self {
            data_dir,
            export_path,
        }
    }

    pub fn local_slot_path(&self) -> PathBuf {
        self.data_dir.join(LOCAL_SLOT_FILE)
    }
}

/// `$XDG_DATA_HOME/polygrid`, else `~/.local/share/polygrid`, else `./.polygrid`
pub fn default_data_dir() -> PathBuf {
    if let Some(xdg) = non_empty_var("XDG_DATA_HOME") {
        return PathBuf::from(xdg).join("polygrid");
    }
    if let Some(home) = non_empty_var("HOME") {
        return PathBuf::from(home).join(".local/share").join("polygrid");
    }
    PathBuf::from(".polygrid")
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
