//! Part catalog for welding-jig components.
//!
//! The catalog is the immutable registry of placeable part kinds: each kind
//! carries its display name, nominal footprint, colors, category, shape hint,
//! and configurable property schema. Defined once at startup and never
//! mutated; both the layout editor and the snapshot format resolve kinds
//! against it.
//!
//! Display names and select option strings are carried verbatim from the
//! shipped component library (Korean product wording) because exported
//! layout files embed select values; changing them would break round-trip
//! compatibility with existing `jig-design.json` files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Functional grouping of a part kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartCategory {
    /// Base plates the rest of the fixture builds on.
    Base,
    /// Rest and support blocks.
    Unit,
    /// Clamping mechanisms.
    Mechanism,
    /// Locating pins.
    Locator,
    /// Shims and wedges.
    Adjustment,
}

/// How a part renders on the canvas. Rectangle is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShapeHint {
    #[default]
    Rectangle,
    Circle,
    Diamond,
}

/// Schema descriptor for one configurable property of a part kind.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertySpec {
    /// A fixed choice between string options.
    Select {
        options: &'static [&'static str],
        default: &'static str,
    },
    /// A free numeric value.
    Number { default: f64 },
    /// A free text value.
    Text { default: &'static str },
}

impl PropertySpec {
    /// The default value a freshly constructed instance receives.
    pub fn default_value(&self) -> PropValue {
        match self {
            PropertySpec::Select { default, .. } => PropValue::Text((*default).to_string()),
            PropertySpec::Number { default } => PropValue::Number(*default),
            PropertySpec::Text { default } => PropValue::Text((*default).to_string()),
        }
    }
}

/// A property value on a part instance.
///
/// Untagged so that both the numeric and the string JSON values found in
/// previously exported layout files deserialize without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Number(f64),
    Text(String),
}

impl PropValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            PropValue::Text(s) => s.parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            PropValue::Number(_) => None,
        }
    }
}

impl std::fmt::Display for PropValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropValue::Number(n) => write!(f, "{}", n),
            PropValue::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Immutable template for one placeable part kind.
#[derive(Debug, Clone, PartialEq)]
pub struct PartDefinition {
    /// Stable kind identifier used in snapshots.
    pub kind: &'static str,
    /// Display name shown in the sidebar and inspector.
    pub name: &'static str,
    /// Nominal footprint in canvas pixels.
    pub width: f64,
    pub height: f64,
    /// Fill color, hex RGB.
    pub color: &'static str,
    /// Stroke color, hex RGB.
    pub stroke: &'static str,
    pub category: PartCategory,
    pub shape: ShapeHint,
    /// Ordered property schema. Empty for kinds with nothing to configure.
    pub props: &'static [(&'static str, PropertySpec)],
}

impl PartDefinition {
    /// Deep copy of the schema defaults for a new instance.
    pub fn default_props(&self) -> BTreeMap<String, PropValue> {
        self.props
            .iter()
            .map(|(key, spec)| ((*key).to_string(), spec.default_value()))
            .collect()
    }

    /// Clamp mechanisms get a direction indicator when rendered.
    pub fn is_clamp(&self) -> bool {
        self.category == PartCategory::Mechanism
    }
}

/// Read-only lookup table of part definitions.
#[derive(Debug, Clone)]
pub struct PartCatalog {
    parts: Vec<PartDefinition>,
}

impl PartCatalog {
    /// An empty catalog. Useful for tests; real editors use [`standard`].
    ///
    /// [`standard`]: PartCatalog::standard
    pub fn empty() -> Self {
        Self { parts: Vec::new() }
    }

    /// The standard welding-jig component library.
    pub fn standard() -> Self {
        Self {
            parts: STANDARD_PARTS.to_vec(),
        }
    }

    /// Resolves a kind identifier to its definition.
    pub fn lookup(&self, kind: &str) -> Option<&PartDefinition> {
        self.parts.iter().find(|def| def.kind == kind)
    }

    /// All definitions in sidebar order.
    pub fn iter(&self) -> impl Iterator<Item = &PartDefinition> {
        self.parts.iter()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// The shipped component library. Kind ids, dimensions, colors, and
/// property schemas must stay stable: exported layout files reference them.
static STANDARD_PARTS: &[PartDefinition] = &[
    PartDefinition {
        kind: "base_plate",
        name: "베이스 플레이트",
        width: 200.0,
        height: 200.0,
        color: "#2d2d2d",
        stroke: "#4b5563",
        category: PartCategory::Base,
        shape: ShapeHint::Rectangle,
        props: &[],
    },
    PartDefinition {
        kind: "rest_block",
        name: "레스트 블록",
        width: 40.0,
        height: 40.0,
        color: "#4b5563",
        stroke: "#9ca3af",
        category: PartCategory::Unit,
        shape: ShapeHint::Rectangle,
        props: &[],
    },
    PartDefinition {
        kind: "clamp_toggle",
        name: "토글 클램프",
        width: 60.0,
        height: 80.0,
        color: "#3b82f6",
        stroke: "#2563eb",
        category: PartCategory::Mechanism,
        shape: ShapeHint::Rectangle,
        props: &[
            (
                "state",
                PropertySpec::Select {
                    options: &["열림", "닫힘"],
                    default: "닫힘",
                },
            ),
            ("model", PropertySpec::Text { default: "TC-200" }),
        ],
    },
    PartDefinition {
        kind: "clamp_swing",
        name: "스윙 클램프",
        width: 50.0,
        height: 50.0,
        color: "#8b5cf6",
        stroke: "#7c3aed",
        category: PartCategory::Mechanism,
        shape: ShapeHint::Rectangle,
        props: &[
            ("angle", PropertySpec::Number { default: 90.0 }),
            ("arm_length", PropertySpec::Number { default: 40.0 }),
        ],
    },
    PartDefinition {
        kind: "clamp_power",
        name: "파워 클램프",
        width: 60.0,
        height: 90.0,
        color: "#1d4ed8",
        stroke: "#1e40af",
        category: PartCategory::Mechanism,
        shape: ShapeHint::Rectangle,
        props: &[
            ("model", PropertySpec::Text { default: "PC-100" }),
            ("pressure", PropertySpec::Number { default: 150.0 }),
        ],
    },
    PartDefinition {
        kind: "clamp_l",
        name: "L-클램프",
        width: 55.0,
        height: 70.0,
        color: "#4338ca",
        stroke: "#3730a3",
        category: PartCategory::Mechanism,
        shape: ShapeHint::Rectangle,
        props: &[
            ("arm_length", PropertySpec::Number { default: 60.0 }),
            ("reach", PropertySpec::Number { default: 30.0 }),
        ],
    },
    PartDefinition {
        kind: "clamp_pin",
        name: "핀 클램프",
        width: 40.0,
        height: 40.0,
        color: "#0f766e",
        stroke: "#0d9488",
        category: PartCategory::Mechanism,
        shape: ShapeHint::Rectangle,
        props: &[("diameter", PropertySpec::Number { default: 20.0 })],
    },
    PartDefinition {
        kind: "pin_round",
        name: "라운드 핀",
        width: 20.0,
        height: 20.0,
        color: "#ef4444",
        stroke: "#dc2626",
        category: PartCategory::Locator,
        shape: ShapeHint::Circle,
        props: &[("diameter", PropertySpec::Number { default: 16.0 })],
    },
    PartDefinition {
        kind: "pin_diamond",
        name: "다이아몬드 핀",
        width: 20.0,
        height: 20.0,
        color: "#f59e0b",
        stroke: "#d97706",
        category: PartCategory::Locator,
        shape: ShapeHint::Diamond,
        props: &[("diameter", PropertySpec::Number { default: 16.0 })],
    },
    PartDefinition {
        kind: "shim_pack",
        name: "심 팩",
        width: 40.0,
        height: 10.0,
        color: "#10b981",
        stroke: "#059669",
        category: PartCategory::Adjustment,
        shape: ShapeHint::Rectangle,
        props: &[("thickness", PropertySpec::Number { default: 1.0 })],
    },
    PartDefinition {
        kind: "wedge_unit",
        name: "웨지 유닛",
        width: 40.0,
        height: 30.0,
        color: "#ec4899",
        stroke: "#db2777",
        category: PartCategory::Adjustment,
        shape: ShapeHint::Rectangle,
        props: &[("angle", PropertySpec::Number { default: 5.0 })],
    },
];
