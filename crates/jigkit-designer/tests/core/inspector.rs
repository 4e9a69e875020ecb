use jigkit_core::catalog::{PartCatalog, PropValue};
use jigkit_designer::inspector::{inspector_fields, FieldWidget};
use jigkit_designer::part::PartInstance;

#[test]
fn test_fields_cover_transform_and_schema() {
    let catalog = PartCatalog::standard();
    let def = catalog.lookup("clamp_toggle").unwrap();
    let part = PartInstance::new(&catalog, "clamp_toggle", 120.4, 80.6).unwrap();

    let fields = inspector_fields(def, &part);
    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["kind", "id", "x", "y", "rotation", "state", "model"]);

    let x = fields.iter().find(|f| f.key == "x").unwrap();
    assert_eq!(x.value, "120");
    assert!(!x.read_only);
    let y = fields.iter().find(|f| f.key == "y").unwrap();
    assert_eq!(y.value, "81");

    let kind = &fields[0];
    assert!(kind.read_only);
    assert_eq!(kind.value, "토글 클램프");

    let state = fields.iter().find(|f| f.key == "state").unwrap();
    assert_eq!(state.label, "State");
    assert_eq!(state.value, "닫힘");
    assert_eq!(
        state.widget,
        FieldWidget::Select {
            options: vec!["열림".to_string(), "닫힘".to_string()]
        }
    );

    let model = fields.iter().find(|f| f.key == "model").unwrap();
    assert_eq!(model.widget, FieldWidget::Text);
    assert_eq!(model.value, "TC-200");
}

#[test]
fn test_fields_reflect_current_values() {
    let catalog = PartCatalog::standard();
    let def = catalog.lookup("clamp_swing").unwrap();
    let mut part = PartInstance::new(&catalog, "clamp_swing", 0.0, 0.0).unwrap();
    part.props
        .insert("angle".to_string(), PropValue::Number(45.0));

    let fields = inspector_fields(def, &part);
    let angle = fields.iter().find(|f| f.key == "angle").unwrap();
    assert_eq!(angle.label, "Angle");
    assert_eq!(angle.value, "45");
    assert_eq!(angle.widget, FieldWidget::Number);

    let arm = fields.iter().find(|f| f.key == "arm_length").unwrap();
    assert_eq!(arm.label, "Arm length");
    assert_eq!(arm.value, "40");
}

#[test]
fn test_kinds_without_schema_show_only_fixed_fields() {
    let catalog = PartCatalog::standard();
    let def = catalog.lookup("base_plate").unwrap();
    let part = PartInstance::new(&catalog, "base_plate", 10.0, 10.0).unwrap();

    let fields = inspector_fields(def, &part);
    assert_eq!(fields.len(), 5);
}
