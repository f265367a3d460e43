//! Store runtime integration.
//!
//! Bridges the sync UI loop with async file reads.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use crate::config::StoreConfig;
use crate::file::{load_file, save_file, LoadOutcome};
use crate::local::LocalSlot;

/// Where a load reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    Local,
    File(PathBuf),
}

impl LoadSource {
    pub fn label(&self) -> &'static str {
        match self {
            LoadSource::Local => "local storage",
            LoadSource::File(_) => "file",
        }
    }
}

/// Completion delivered to the UI loop
#[derive(Debug)]
pub enum StoreEvent {
    Loaded {
        source: LoadSource,
        result: Result<LoadOutcome>,
    },
}

/// Running store instance.
pub struct StoreRuntime {
    rt: Runtime,
    config: StoreConfig,
    slot: LocalSlot,
    event_tx: mpsc::UnboundedSender<StoreEvent>,
    event_rx: mpsc::UnboundedReceiver<StoreEvent>,
    in_flight: usize,
}

impl StoreRuntime {
    pub fn new(config: StoreConfig) -> Result<Self> {
        let rt = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("polygrid-store")
            .enable_all()
            .build()
            .context("create tokio runtime")?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let slot = LocalSlot::new(config.local_slot_path());

        Ok(Self {
            rt,
            config,
            slot,
            event_tx,
            event_rx,
            in_flight: 0,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Save to the local slot. Returns the path written.
    pub fn save_local(&self, document: &str) -> Result<PathBuf> {
        self.slot.save(document)?;
        Ok(self.slot.path().to_path_buf())
    }

    /// Export to the state file. Returns the path written.
    pub fn save_file(&self, document: &str) -> Result<PathBuf> {
        let path = self.config.export_path.clone();
        self.rt.block_on(save_file(&path, document))?;
        Ok(path)
    }

    /// Start reading a document. The result arrives via [`StoreRuntime::try_recv`].
    pub fn request_load(&mut self, source: LoadSource) {
        let path = match &source {
            LoadSource::Local => self.slot.path().to_path_buf(),
            LoadSource::File(path) => path.clone(),
        };
        let tx = self.event_tx.clone();
        self.in_flight += 1;
        log::debug!("loading from {}", path.display());

        self.rt.spawn(async move {
            let result = load_file(&path).await;
            let _ = tx.send(StoreEvent::Loaded { source, result });
        });
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight > 0
    }

    pub fn try_recv(&mut self) -> Option<StoreEvent> {
        let event = self.event_rx.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }

    /// Block until the next completion or until `timeout` passes
    pub fn wait(&mut self, timeout: Duration) -> Option<StoreEvent> {
        let rx = &mut self.event_rx;
        let event = self
            .rt
            .block_on(async { tokio::time::timeout(timeout, rx.recv()).await })
            .ok()
            .flatten()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(event)
    }
}
