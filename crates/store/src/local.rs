//! The local slot: one fixed document in the data directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::LOCAL_SLOT_FILE;
use crate::file::LoadOutcome;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSlot {
    path: PathBuf,
}

impl LocalSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The standard slot file inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(LOCAL_SLOT_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, document: &str) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&self.path, document)
            .with_context(|| format!("write {}", self.path.display()))?;
        Ok(())
    }

    pub fn load(&self) -> Result<LoadOutcome> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(LoadOutcome::Found(text)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(LoadOutcome::NotFound),
            Err(e) => Err(e).with_context(|| format!("read {}", self.path.display())),
        }
    }
}
