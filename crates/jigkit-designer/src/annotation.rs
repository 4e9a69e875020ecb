//! Transient canvas annotations.

/// An ephemeral stroke committed by one of the draw tools.
///
/// Annotations are not modeled entities: they have no identity, never
/// appear in snapshots, and are discarded by `clear_all`. They exist only
/// to mark up the canvas during a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Text {
        x: f64,
        y: f64,
        text: String,
    },
}
