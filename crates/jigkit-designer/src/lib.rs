//! # JigKit Designer
//!
//! This crate provides the jig layout editor: a canvas of placed fixture
//! parts that can be selected, dragged, configured, annotated, exported to
//! JSON, and restored from a local autosave slot.
//!
//! ## Core Components
//!
//! - **Parts**: Placed instances of catalog kinds with position, rotation,
//!   and per-instance properties
//! - **Editor**: Tool modes and pointer interaction (select/drag, draw
//!   strokes, text placement)
//! - **Inspector**: Pure projection of the selected part into property
//!   panel field descriptors
//! - **Snapshot**: The `jig-design.json` export format and file I/O
//! - **Autosave**: One fail-soft local slot holding the same JSON document
//! - **Renderer**: Software rasterization of the layout to an image buffer
//!
//! ## Architecture
//!
//! ```text
//! LayoutEditor (state + interaction)
//!   ├── PartInstance list (list order is z-order)
//!   ├── Annotation list (ephemeral strokes)
//!   └── Snapshot (export / autosave projection)
//!
//! Renderer (tiny-skia -> RgbImage)
//! Inspector (schema x values -> field descriptors)
//! ```

pub mod annotation;
pub mod autosave;
pub mod editor;
pub mod font_manager;
pub mod inspector;
pub mod part;
pub mod renderer;
pub mod snapshot;

pub use annotation::Annotation;
pub use autosave::AutosaveSlot;
pub use editor::{Interaction, LayoutEditor, ToolMode};
pub use inspector::{inspector_fields, Field, FieldWidget};
pub use part::PartInstance;
pub use renderer::render_layout;
pub use snapshot::{ComponentData, LayoutSnapshot, EXPORT_FILE_NAME};
