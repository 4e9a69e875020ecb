//! Layout editor state and pointer interaction.
//!
//! Owns the placed part list, the current tool mode, selection, drag
//! tracking, and the transient annotation list. All mutation happens
//! synchronously inside the handler that triggered it; the embedding shell
//! redraws after every call that returns. The editor is the single writer
//! of its state.

use crate::annotation::Annotation;
use crate::autosave::AutosaveSlot;
use crate::part::PartInstance;
use crate::snapshot::LayoutSnapshot;
use jigkit_core::catalog::{PartCatalog, PropValue};
use jigkit_core::error::{CatalogError, SnapshotError};
use tracing::debug;
use uuid::Uuid;

/// Tool modes selectable from the toolbar or keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Select,
    Line,
    Circle,
    Rectangle,
    Text,
}

/// Pointer interaction sub-state within the current tool mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Interaction {
    Idle,
    /// A part is being dragged; the offsets record where inside the part
    /// the pointer grabbed it.
    DraggingPart {
        id: Uuid,
        grab_dx: f64,
        grab_dy: f64,
    },
    /// A draw tool is tracking a stroke from `start` to `current`.
    Sketching {
        start: (f64, f64),
        current: (f64, f64),
    },
    /// The text tool is waiting for the shell to deliver typed input.
    AwaitingText { x: f64, y: f64 },
}

/// The jig layout editor.
pub struct LayoutEditor {
    catalog: PartCatalog,
    parts: Vec<PartInstance>,
    annotations: Vec<Annotation>,
    mode: ToolMode,
    interaction: Interaction,
    is_modified: bool,
}

impl LayoutEditor {
    pub fn new(catalog: PartCatalog) -> Self {
        Self {
            catalog,
            parts: Vec::new(),
            annotations: Vec::new(),
            mode: ToolMode::Select,
            interaction: Interaction::Idle,
            is_modified: false,
        }
    }

    pub fn catalog(&self) -> &PartCatalog {
        &self.catalog
    }

    /// Placed parts in z-order: later entries draw on top.
    pub fn parts(&self) -> &[PartInstance] {
        &self.parts
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    /// Switches tool mode, abandoning any in-flight interaction.
    pub fn set_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
        self.interaction = Interaction::Idle;
    }

    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// True once any edit happened since the last save or load.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Constructs a part via the catalog, appends it, and makes it the sole
    /// selection. The part list is untouched when the kind is unknown.
    pub fn place_part(&mut self, kind: &str, x: f64, y: f64) -> Result<Uuid, CatalogError> {
        let part = PartInstance::new(&self.catalog, kind, x, y)?;
        let id = part.id;
        self.parts.push(part);
        self.select(Some(id));
        self.is_modified = true;
        debug!(kind, x, y, "part placed");
        Ok(id)
    }

    /// Makes `id` the sole selected part, or clears selection entirely.
    pub fn select(&mut self, id: Option<Uuid>) {
        for part in &mut self.parts {
            part.selected = Some(part.id) == id;
        }
    }

    pub fn selected(&self) -> Option<&PartInstance> {
        self.parts.iter().find(|p| p.selected)
    }

    pub fn selected_id(&self) -> Option<Uuid> {
        self.selected().map(|p| p.id)
    }

    fn selected_mut(&mut self) -> Option<&mut PartInstance> {
        self.parts.iter_mut().find(|p| p.selected)
    }

    /// Topmost part under the pointer: last in the list wins among
    /// overlapping bounding boxes.
    fn hit_test(&self, mx: f64, my: f64) -> Option<Uuid> {
        self.parts.iter().rev().find_map(|part| {
            let def = self.catalog.lookup(&part.kind)?;
            part.contains(def, mx, my).then_some(part.id)
        })
    }

    pub fn pointer_down(&mut self, mx: f64, my: f64) {
        match self.mode {
            ToolMode::Select => {
                if let Some(id) = self.hit_test(mx, my) {
                    self.select(Some(id));
                    // Unwrap-free: the id came from the list we just searched.
                    if let Some(part) = self.parts.iter().find(|p| p.id == id) {
                        self.interaction = Interaction::DraggingPart {
                            id,
                            grab_dx: mx - part.x,
                            grab_dy: my - part.y,
                        };
                    }
                } else {
                    self.select(None);
                    self.interaction = Interaction::Idle;
                }
            }
            ToolMode::Line | ToolMode::Circle | ToolMode::Rectangle => {
                self.interaction = Interaction::Sketching {
                    start: (mx, my),
                    current: (mx, my),
                };
            }
            ToolMode::Text => {
                self.interaction = Interaction::AwaitingText { x: mx, y: my };
            }
        }
    }

    pub fn pointer_move(&mut self, mx: f64, my: f64) {
        match &mut self.interaction {
            Interaction::DraggingPart {
                id,
                grab_dx,
                grab_dy,
            } => {
                let (id, dx, dy) = (*id, *grab_dx, *grab_dy);
                if let Some(part) = self.parts.iter_mut().find(|p| p.id == id) {
                    part.x = mx - dx;
                    part.y = my - dy;
                    self.is_modified = true;
                }
            }
            Interaction::Sketching { current, .. } => {
                *current = (mx, my);
            }
            Interaction::Idle | Interaction::AwaitingText { .. } => {}
        }
    }

    /// Ends the current drag or commits the in-progress stroke.
    /// Idempotent when nothing is in flight.
    pub fn pointer_up(&mut self) {
        match std::mem::replace(&mut self.interaction, Interaction::Idle) {
            Interaction::Sketching { start, current } => {
                if let Some(annotation) = stroke_annotation(self.mode, start, current) {
                    self.annotations.push(annotation);
                }
            }
            Interaction::AwaitingText { x, y } => {
                // Text entry outlives the pointer gesture.
                self.interaction = Interaction::AwaitingText { x, y };
            }
            Interaction::DraggingPart { .. } | Interaction::Idle => {}
        }
    }

    /// Live preview of the stroke being drawn, rendered dashed.
    pub fn preview(&self) -> Option<Annotation> {
        match self.interaction {
            Interaction::Sketching { start, current } => {
                stroke_annotation(self.mode, start, current)
            }
            _ => None,
        }
    }

    /// Commits the pending text annotation. Empty or whitespace-only input
    /// is rejected; either way the text tool returns to idle.
    pub fn confirm_text(&mut self, text: &str) -> bool {
        let Interaction::AwaitingText { x, y } = self.interaction else {
            return false;
        };
        self.interaction = Interaction::Idle;
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.annotations.push(Annotation::Text {
            x,
            y,
            text: trimmed.to_string(),
        });
        true
    }

    /// Abandons a pending text annotation.
    pub fn cancel_text(&mut self) {
        if matches!(self.interaction, Interaction::AwaitingText { .. }) {
            self.interaction = Interaction::Idle;
        }
    }

    /// Removes the selected part. No-op without a selection.
    pub fn delete_selected(&mut self) {
        let before = self.parts.len();
        self.parts.retain(|p| !p.selected);
        if self.parts.len() != before {
            self.is_modified = true;
        }
    }

    /// Empties the part and annotation lists and clears selection.
    /// Asking the user for confirmation is the shell's concern.
    pub fn clear_all(&mut self) {
        self.parts.clear();
        self.annotations.clear();
        self.interaction = Interaction::Idle;
        self.is_modified = true;
    }

    /// Projects the part list into the export format.
    pub fn export_snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot::from_parts(&self.parts)
    }

    /// Replaces the part list with the snapshot contents, in order, with
    /// fresh ids and no selection.
    ///
    /// Validation happens up front: a snapshot referencing any unknown kind
    /// changes nothing.
    pub fn apply_snapshot(&mut self, snapshot: &LayoutSnapshot) -> Result<(), SnapshotError> {
        let mut parts = Vec::with_capacity(snapshot.components.len());
        for data in &snapshot.components {
            let mut part = PartInstance::new(&self.catalog, &data.kind, data.x, data.y)?;
            part.rotation = data.rotation;
            // Schema defaults first, stored values on top: files written by
            // older catalogs still get every key the schema knows.
            for (key, value) in &data.props {
                part.props.insert(key.clone(), value.clone());
            }
            parts.push(part);
        }
        self.parts = parts;
        self.annotations.clear();
        self.interaction = Interaction::Idle;
        self.is_modified = false;
        Ok(())
    }

    /// Writes the current layout to the autosave slot.
    pub fn save_local(&mut self, slot: &AutosaveSlot) -> anyhow::Result<()> {
        slot.store(&self.export_snapshot())?;
        self.is_modified = false;
        Ok(())
    }

    /// Restores the layout from the autosave slot, if one exists.
    ///
    /// Fail-soft: a missing or corrupt slot leaves the editor empty and
    /// returns `false`. Called once at initialization.
    pub fn load_local(&mut self, slot: &AutosaveSlot) -> bool {
        let Some(snapshot) = slot.restore() else {
            return false;
        };
        match self.apply_snapshot(&snapshot) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!("ignoring autosaved layout: {err}");
                false
            }
        }
    }

    /// Moves the selected part from the inspector's position fields.
    pub fn set_selected_position(&mut self, x: f64, y: f64) -> bool {
        match self.selected_mut() {
            Some(part) => {
                part.x = x;
                part.y = y;
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    pub fn set_selected_rotation(&mut self, degrees: f64) -> bool {
        match self.selected_mut() {
            Some(part) => {
                part.rotation = degrees;
                self.is_modified = true;
                true
            }
            None => false,
        }
    }

    /// Writes one schema property of the selected part. Keys outside the
    /// kind's schema are rejected.
    pub fn set_selected_prop(&mut self, key: &str, value: PropValue) -> bool {
        let Some(part) = self.parts.iter_mut().find(|p| p.selected) else {
            return false;
        };
        let Some(def) = self.catalog.lookup(&part.kind) else {
            return false;
        };
        if !def.props.iter().any(|(name, _)| *name == key) {
            return false;
        }
        part.props.insert(key.to_string(), value);
        self.is_modified = true;
        true
    }
}

/// Builds the committed annotation for a draw-tool stroke, if the mode has
/// one. Circle radius is the Euclidean distance from start to current; the
/// rectangle normalizes to non-negative width/height regardless of drag
/// direction.
fn stroke_annotation(
    mode: ToolMode,
    start: (f64, f64),
    current: (f64, f64),
) -> Option<Annotation> {
    let (sx, sy) = start;
    let (cx, cy) = current;
    match mode {
        ToolMode::Line => Some(Annotation::Line {
            x1: sx,
            y1: sy,
            x2: cx,
            y2: cy,
        }),
        ToolMode::Circle => Some(Annotation::Circle {
            x: sx,
            y: sy,
            radius: ((cx - sx).powi(2) + (cy - sy).powi(2)).sqrt(),
        }),
        ToolMode::Rectangle => Some(Annotation::Rect {
            x: sx.min(cx),
            y: sy.min(cy),
            width: (cx - sx).abs(),
            height: (cy - sy).abs(),
        }),
        ToolMode::Select | ToolMode::Text => None,
    }
}
