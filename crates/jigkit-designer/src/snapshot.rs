//! Layout snapshot serialization.
//!
//! Implements the `jig-design.json` export format: an ordered list of
//! `{type, x, y, rotation, props}` records. Identity and selection are
//! deliberately omitted; both regenerate on load. The autosave slot
//! persists the same document.

use anyhow::{Context, Result};
use jigkit_core::catalog::PropValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::part::PartInstance;

/// Conventional filename for downloaded exports.
pub const EXPORT_FILE_NAME: &str = "jig-design.json";

/// A serialized layout: the pure data projection of the part list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub components: Vec<ComponentData>,
}

/// One serialized part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentData {
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub props: BTreeMap<String, PropValue>,
}

impl LayoutSnapshot {
    /// Projects part instances, preserving order and dropping id/selection.
    pub fn from_parts<'a>(parts: impl IntoIterator<Item = &'a PartInstance>) -> Self {
        Self {
            components: parts
                .into_iter()
                .map(|part| ComponentData {
                    kind: part.kind.clone(),
                    x: part.x,
                    y: part.y,
                    rotation: part.rotation,
                    props: part.props.clone(),
                })
                .collect(),
        }
    }

    pub fn from_json(raw: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Pretty-printed JSON, matching the two-space indentation of files
    /// exported by earlier releases.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize layout")
    }

    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json).context("Failed to write layout file")?;
        Ok(())
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).context("Failed to read layout file")?;
        let snapshot = Self::from_json(&content).context("Failed to parse layout file")?;
        Ok(snapshot)
    }
}
