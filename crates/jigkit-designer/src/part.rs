//! Placed part instances.

use jigkit_core::catalog::{PartCatalog, PartDefinition, PropValue};
use jigkit_core::error::CatalogError;
use std::collections::BTreeMap;
use uuid::Uuid;

/// One placed, individually positioned occurrence of a catalog part kind.
///
/// Position is the part's center in canvas pixel space. Rotation is stored
/// in degrees and may be any real value; it is only normalized visually
/// when rendered. The `selected` flag is owned by the instance but the
/// at-most-one-selected invariant is enforced by [`LayoutEditor`], not here.
///
/// [`LayoutEditor`]: crate::editor::LayoutEditor
#[derive(Debug, Clone, PartialEq)]
pub struct PartInstance {
    /// Opaque unique identity, regenerated on snapshot load.
    pub id: Uuid,
    /// Kind identifier, resolved against the catalog at construction.
    pub kind: String,
    pub x: f64,
    pub y: f64,
    /// Degrees.
    pub rotation: f64,
    pub selected: bool,
    /// Per-instance properties, deep-copied from the schema defaults.
    pub props: BTreeMap<String, PropValue>,
}

impl PartInstance {
    /// Constructs an instance of `kind` at the given position.
    ///
    /// Fails with [`CatalogError::UnknownPartKind`] when the kind does not
    /// resolve; nothing is created in that case.
    pub fn new(
        catalog: &PartCatalog,
        kind: &str,
        x: f64,
        y: f64,
    ) -> Result<Self, CatalogError> {
        let def = catalog
            .lookup(kind)
            .ok_or_else(|| CatalogError::UnknownPartKind {
                kind: kind.to_string(),
            })?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind: kind.to_string(),
            x,
            y,
            rotation: 0.0,
            selected: false,
            props: def.default_props(),
        })
    }

    /// Axis-aligned bounding-box hit test centered on the instance position.
    ///
    /// Rotation is ignored: hits on rotated parts lose fidelity at the
    /// corners, trading accuracy for a trivially cheap test.
    pub fn contains(&self, def: &PartDefinition, mx: f64, my: f64) -> bool {
        mx >= self.x - def.width / 2.0
            && mx <= self.x + def.width / 2.0
            && my >= self.y - def.height / 2.0
            && my <= self.y + def.height / 2.0
    }
}
