//! Error handling for JigKit
//!
//! Provides error types for all layers of the application:
//! - Catalog errors (unknown part kinds at construction)
//! - Command errors (malformed sketch commands from the user)
//! - Extrude errors (no usable sketch geometry)
//! - Snapshot errors (corrupt or inconsistent persisted layouts)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Catalog error type
///
/// Raised when a part instance is constructed against a kind the catalog
/// does not know. Fatal to the single construction call only; the caller's
/// instance list is never touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The requested part kind is not in the catalog
    #[error("Unknown part kind: {kind}")]
    UnknownPartKind {
        /// The kind identifier that failed to resolve.
        kind: String,
    },
}

/// Sketch command error type
///
/// Raised by the textual command interpreter. Every variant carries a
/// message suitable for inline display; execution of the single command is
/// aborted and no sketch state changes.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    /// Empty input line
    #[error("Empty command. Valid commands: LINE, CIRCLE, RECTANGLE, ARC, EXTRUDE")]
    Empty,

    /// The first token is not a known command
    #[error("Unknown command '{name}'. Valid commands: LINE, CIRCLE, RECTANGLE, ARC, EXTRUDE")]
    UnknownCommand {
        /// The unrecognized command token.
        name: String,
    },

    /// Wrong number of arguments for a known command
    #[error("Usage: {usage}")]
    Usage {
        /// The expected command form.
        usage: &'static str,
    },

    /// An argument token did not parse as a number
    #[error("Invalid number '{token}'")]
    InvalidNumber {
        /// The token that failed to parse.
        token: String,
    },

    /// Extrusion failed
    #[error(transparent)]
    Extrude(#[from] ExtrudeError),
}

/// Extrusion error type
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtrudeError {
    /// The sketch has no shapes at all
    #[error("Nothing to extrude: the sketch is empty")]
    NoShapes,

    /// The sketch has shapes, but none of them can form a solid
    #[error("No extrudable shape: draw a CIRCLE or RECTANGLE first")]
    NoExtrudableShape,
}

/// Snapshot error type
///
/// Covers reading, parsing, and validating persisted layout snapshots.
/// The autosave path treats these as fail-soft; explicit file loads
/// surface them to the caller.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The snapshot file could not be read
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// The payload is not valid snapshot JSON
    #[error("Malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The snapshot references a part kind the catalog does not know
    #[error("Snapshot references unknown part kind: {kind}")]
    UnknownPartKind {
        /// The kind identifier that failed to resolve.
        kind: String,
    },
}

impl From<CatalogError> for SnapshotError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::UnknownPartKind { kind } => SnapshotError::UnknownPartKind { kind },
        }
    }
}

/// Top-level error type aggregating all JigKit error kinds.
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// Command error
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Extrusion error
    #[error(transparent)]
    Extrude(#[from] ExtrudeError),

    /// Snapshot error
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// Convenience result alias for JigKit operations.
pub type Result<T> = std::result::Result<T, Error>;
