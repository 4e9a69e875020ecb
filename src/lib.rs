//! # JigKit
//!
//! Layout designer core for welding jigs: a part catalog, a canvas layout
//! editor, and a 2D sketch tool with solid extrusion preview.
//!
//! ## Architecture
//!
//! JigKit is organized as a workspace with multiple crates:
//!
//! 1. **jigkit-core** - Core types, errors, and the part catalog
//! 2. **jigkit-designer** - Layout editor, inspector, snapshot, autosave,
//!    and the 2D renderer
//! 3. **jigkit-sketch** - Sketch commands, extrusion, and the preview
//!    camera
//! 4. **jigkit** - Facade crate with the headless CLI driver
//!
//! ## Features
//!
//! - **Part Catalog**: Base plates, clamps, pins, shims, and wedges with
//!   per-kind property schemas
//! - **Layout Editing**: Place, drag, select, configure, and annotate
//! - **Persistence**: `jig-design.json` export and a fail-soft local
//!   autosave slot
//! - **Sketch-to-Solid**: LINE/CIRCLE/RECTANGLE/ARC commands, EXTRUDE into
//!   a cylinder or box, orbit/zoom preview

pub use jigkit_designer as designer;
pub use jigkit_sketch as sketch;

pub use jigkit_core::{
    CatalogError, CommandError, Error, ExtrudeError, PartCatalog, PartCategory, PartDefinition,
    PropValue, PropertySpec, Result, ShapeHint, SnapshotError,
};

pub use jigkit_designer::{
    inspector_fields, render_layout, Annotation, AutosaveSlot, ComponentData, Field, FieldWidget,
    Interaction, LayoutEditor, LayoutSnapshot, PartInstance, ToolMode, EXPORT_FILE_NAME,
};

pub use jigkit_sketch::{
    render_sketch, ExtrudedSolid, OrbitCamera, Outcome, PreviewController, PreviewSurface,
    SketchCommand, SketchPad, SketchShape, SolidKind, TriMesh, Triangle3D, View,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer().with_target(true).with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
