//! Single-slot local autosave.
//!
//! One named slot holding the same JSON document as the export format,
//! read once at initialization and written only on an explicit save
//! action. A corrupt slot must never take the editor down: restore is
//! fail-soft and merely logs what it discarded.

use crate::snapshot::LayoutSnapshot;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed storage key for the layout slot.
const SLOT_FILE: &str = "jigDesign.json";

/// A persisted autosave slot backed by one file on disk.
#[derive(Debug, Clone)]
pub struct AutosaveSlot {
    path: PathBuf,
}

impl AutosaveSlot {
    /// The standard slot under the platform config directory.
    pub fn standard() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("jigkit");
        Self {
            path: dir.join(SLOT_FILE),
        }
    }

    /// A slot at an explicit path. Used by tests and embedders that manage
    /// their own storage location.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the snapshot, creating the slot directory if needed.
    pub fn store(&self, snapshot: &LayoutSnapshot) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create autosave directory")?;
        }
        snapshot.save_to_file(&self.path)?;
        debug!(path = %self.path.display(), "layout autosaved");
        Ok(())
    }

    /// Reads the slot. Missing or unparsable payloads yield `None`; a
    /// corrupt payload is logged and otherwise treated as nothing-to-load.
    pub fn restore(&self) -> Option<LayoutSnapshot> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) => {
                debug!(path = %self.path.display(), "no autosaved layout: {err}");
                return None;
            }
        };
        match LayoutSnapshot::from_json(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(err) => {
                warn!(
                    path = %self.path.display(),
                    "discarding corrupt autosave slot: {err}"
                );
                None
            }
        }
    }
}
