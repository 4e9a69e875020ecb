//! Property inspector field projection.
//!
//! Pure function from a part's schema and current values to a list of
//! field descriptors. The UI layer owns widget creation and routes edits
//! back through the editor's setter methods; nothing here touches state.

use crate::part::PartInstance;
use jigkit_core::catalog::{PartDefinition, PropertySpec};

/// Widget a field should render as.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWidget {
    Number,
    Text,
    Select { options: Vec<String> },
}

/// One row of the property panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Stable key: fixed field name or schema property name.
    pub key: String,
    /// Human-facing label.
    pub label: String,
    pub widget: FieldWidget,
    /// Current value, formatted for display.
    pub value: String,
    pub read_only: bool,
}

/// Projects the selected part into inspector fields: kind name, id, x, y,
/// rotation, then one field per schema property in schema order.
///
/// Positions display rounded to whole pixels, matching what the panel's
/// number inputs show.
pub fn inspector_fields(def: &PartDefinition, part: &PartInstance) -> Vec<Field> {
    let mut fields = vec![
        Field {
            key: "kind".to_string(),
            label: "Type".to_string(),
            widget: FieldWidget::Text,
            value: def.name.to_string(),
            read_only: true,
        },
        Field {
            key: "id".to_string(),
            label: "ID".to_string(),
            widget: FieldWidget::Text,
            value: part.id.to_string(),
            read_only: true,
        },
        Field {
            key: "x".to_string(),
            label: "X".to_string(),
            widget: FieldWidget::Number,
            value: format!("{}", part.x.round()),
            read_only: false,
        },
        Field {
            key: "y".to_string(),
            label: "Y".to_string(),
            widget: FieldWidget::Number,
            value: format!("{}", part.y.round()),
            read_only: false,
        },
        Field {
            key: "rotation".to_string(),
            label: "Rotation".to_string(),
            widget: FieldWidget::Number,
            value: format!("{}", part.rotation),
            read_only: false,
        },
    ];

    for (key, spec) in def.props {
        let widget = match spec {
            PropertySpec::Select { options, .. } => FieldWidget::Select {
                options: options.iter().map(|o| (*o).to_string()).collect(),
            },
            PropertySpec::Number { .. } => FieldWidget::Number,
            PropertySpec::Text { .. } => FieldWidget::Text,
        };
        let value = part
            .props
            .get(*key)
            .map(|v| v.to_string())
            .unwrap_or_default();
        fields.push(Field {
            key: (*key).to_string(),
            label: label_for(key),
            widget,
            value,
            read_only: false,
        });
    }

    fields
}

/// "arm_length" -> "Arm length".
fn label_for(key: &str) -> String {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().replace('_', " ")
        }
        None => String::new(),
    }
}
