//! Async file access for state documents.

use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// What a load found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Found(String),
    NotFound,
}

/// Write a document, replacing any existing file.
///
/// The text goes to a sibling temp file first and is renamed into place, so
/// an interrupted save never leaves a truncated document behind.
pub async fn save_file(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("create directory {}", parent.display()))?;
    }

    let tmp = path.with_extension("json.tmp");
    let mut file = fs::File::create(&tmp)
        .await
        .with_context(|| format!("create {}", tmp.display()))?;
    file.write_all(document.as_bytes())
        .await
        .with_context(|| format!("write {}", tmp.display()))?;
    file.flush().await?;
    drop(file);

    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("rename {} to {}", tmp.display(), path.display()))?;
    log::debug!("saved {} bytes to {}", document.len(), path.display());
    Ok(())
}

/// Read a document. A missing file is [`LoadOutcome::NotFound`], not an error.
pub async fn load_file(path: &Path) -> Result<LoadOutcome> {
    match fs::read_to_string(path).await {
        Ok(text) => {
            log::debug!("read {} bytes from {}", text.len(), path.display());
            Ok(LoadOutcome::Found(text))
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(LoadOutcome::NotFound),
        Err(e) => Err(e).with_context(|| format!("read {}", path.display())),
    }
}
