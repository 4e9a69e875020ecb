//! # JigKit Core
//!
//! Core types, errors, and the part catalog for JigKit.
//! Provides the immutable registry of placeable welding-jig part kinds
//! and the shared error taxonomy used by the layout editor and the
//! sketch tool.

pub mod catalog;
pub mod error;

pub use catalog::{
    PartCatalog, PartCategory, PartDefinition, PropValue, PropertySpec, ShapeHint,
};
pub use error::{CatalogError, CommandError, Error, ExtrudeError, Result, SnapshotError};
