//! Sketch pad state.
//!
//! Owns the shape list, the single derived solid, and the active view.
//! All mutation flows through [`execute`] or the explicit operations; a
//! failed command leaves every field untouched.
//!
//! [`execute`]: SketchPad::execute

use crate::command::{parse, SketchCommand};
use crate::shapes::SketchShape;
use crate::solid::ExtrudedSolid;
use jigkit_core::error::{CommandError, ExtrudeError};
use tracing::debug;

/// Which surface is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The 2D sketch canvas.
    #[default]
    Plan,
    /// The 3D solid preview.
    Solid,
}

/// What a successfully executed command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    ShapeAdded,
    Extruded,
}

/// The sketch pad: 2D shapes plus at most one extruded solid.
#[derive(Debug, Default)]
pub struct SketchPad {
    shapes: Vec<SketchShape>,
    solid: Option<ExtrudedSolid>,
    view: View,
}

impl SketchPad {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in insertion order.
    pub fn shapes(&self) -> &[SketchShape] {
        &self.shapes
    }

    pub fn solid(&self) -> Option<&ExtrudedSolid> {
        self.solid.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn set_view(&mut self, view: View) {
        self.view = view;
    }

    /// Parses and applies one command line.
    pub fn execute(&mut self, input: &str) -> Result<Outcome, CommandError> {
        match parse(input)? {
            SketchCommand::Draw(shape) => {
                self.shapes.push(shape);
                debug!(?shape, "sketch shape added");
                Ok(Outcome::ShapeAdded)
            }
            SketchCommand::Extrude { height } => {
                self.extrude(height)?;
                Ok(Outcome::Extruded)
            }
        }
    }

    /// Extrudes the first extrudable shape in insertion order into the
    /// single active solid, replacing any previous one, and switches to
    /// the 3D view.
    pub fn extrude(&mut self, height: f64) -> Result<(), ExtrudeError> {
        if self.shapes.is_empty() {
            return Err(ExtrudeError::NoShapes);
        }
        let solid = self
            .shapes
            .iter()
            .find_map(|shape| ExtrudedSolid::from_shape(shape, height))
            .ok_or(ExtrudeError::NoExtrudableShape)?;
        debug!(?solid, "sketch extruded");
        self.solid = Some(solid);
        self.view = View::Solid;
        Ok(())
    }

    /// Empties the shape list and discards the derived solid.
    pub fn clear(&mut self) {
        self.shapes.clear();
        self.solid = None;
    }
}
