//! # JigKit Sketch
//!
//! The 2D sketch sub-tool: a list of typed shapes built by a small textual
//! command interpreter, plus extrusion of one eligible shape into a 3D
//! solid for preview.
//!
//! ## Core Components
//!
//! - **Shapes**: Append-only lines, circles, rectangles, and arcs
//! - **Commands**: `LINE`/`CIRCLE`/`RECTANGLE`/`ARC`/`EXTRUDE` text grammar
//! - **Solids**: Cylinder/box extrusion with triangle mesh tessellation
//! - **Preview**: Orbit camera and the swappable `PreviewSurface`
//!   capability the concrete 3D backend implements
//! - **Renderer**: Software rasterization of the 2D sketch

pub mod command;
pub mod pad;
pub mod preview;
pub mod renderer;
pub mod shapes;
pub mod solid;

pub use command::SketchCommand;
pub use pad::{Outcome, SketchPad, View};
pub use preview::{OrbitCamera, PreviewController, PreviewSurface};
pub use renderer::render_sketch;
pub use shapes::SketchShape;
pub use solid::{ExtrudedSolid, SolidKind, TriMesh, Triangle3D};
