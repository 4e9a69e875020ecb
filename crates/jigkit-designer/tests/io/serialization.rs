use jigkit_core::catalog::{PartCatalog, PropValue};
use jigkit_designer::editor::LayoutEditor;
use jigkit_designer::snapshot::LayoutSnapshot;

fn editor() -> LayoutEditor {
    LayoutEditor::new(PartCatalog::standard())
}

#[test]
fn test_round_trip_preserves_order_and_values() {
    let mut source = editor();
    source.place_part("base_plate", 400.0, 300.0).unwrap();
    source.place_part("clamp_toggle", 150.0, 120.0).unwrap();
    source.place_part("pin_diamond", 420.0, 180.0).unwrap();
    source.set_selected_rotation(45.0);
    source.set_selected_prop("diameter", PropValue::Number(12.0));

    let exported = source.export_snapshot();
    let json = exported.to_json().unwrap();

    let mut restored = editor();
    restored
        .apply_snapshot(&LayoutSnapshot::from_json(&json).unwrap())
        .unwrap();

    assert_eq!(restored.parts().len(), 3);
    for (a, b) in source.parts().iter().zip(restored.parts()) {
        assert_eq!(a.kind, b.kind);
        assert_eq!((a.x, a.y), (b.x, b.y));
        assert_eq!(a.rotation, b.rotation);
        assert_eq!(a.props, b.props);
        // Identity regenerates on load.
        assert_ne!(a.id, b.id);
    }
    // Selection does not survive the round trip.
    assert_eq!(restored.selected_id(), None);
}

#[test]
fn test_snapshot_omits_identity_and_selection() {
    let mut source = editor();
    source.place_part("rest_block", 10.0, 20.0).unwrap();

    let json = source.export_snapshot().to_json().unwrap();
    assert!(!json.contains("\"id\""));
    assert!(!json.contains("selected"));
    assert!(json.contains("\"type\": \"rest_block\""));
}

#[test]
fn test_parses_files_from_the_previous_exporter() {
    // Shape written by earlier releases: string-valued numeric props and
    // no pretty-printing guarantees.
    let legacy = r#"{"components":[
        {"type":"clamp_power","x":210,"y":95,"rotation":90,
         "props":{"model":"PC-100","pressure":"150"}},
        {"type":"shim_pack","x":40,"y":330,"rotation":0,"props":{"thickness":1.0}}
    ]}"#;

    let mut restored = editor();
    restored
        .apply_snapshot(&LayoutSnapshot::from_json(legacy).unwrap())
        .unwrap();

    assert_eq!(restored.parts().len(), 2);
    let clamp = &restored.parts()[0];
    assert_eq!(clamp.rotation, 90.0);
    assert_eq!(
        clamp.props.get("pressure"),
        Some(&PropValue::Text("150".to_string()))
    );
    assert_eq!(clamp.props.get("pressure").unwrap().as_f64(), Some(150.0));
}

#[test]
fn test_missing_rotation_and_props_default() {
    let minimal = r#"{"components":[{"type":"rest_block","x":5,"y":6}]}"#;
    let snapshot = LayoutSnapshot::from_json(minimal).unwrap();
    assert_eq!(snapshot.components[0].rotation, 0.0);
    assert!(snapshot.components[0].props.is_empty());
}

#[test]
fn test_unknown_kind_fails_load_atomically() {
    let mut restored = editor();
    restored.place_part("base_plate", 100.0, 100.0).unwrap();

    let bad = r#"{"components":[
        {"type":"rest_block","x":1,"y":2,"rotation":0,"props":{}},
        {"type":"conveyor_belt","x":3,"y":4,"rotation":0,"props":{}}
    ]}"#;
    let err = restored
        .apply_snapshot(&LayoutSnapshot::from_json(bad).unwrap())
        .unwrap_err();
    assert!(err.to_string().contains("conveyor_belt"));

    // The failed load touched nothing.
    assert_eq!(restored.parts().len(), 1);
    assert_eq!(restored.parts()[0].kind, "base_plate");
}

#[test]
fn test_save_and_load_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jig-design.json");

    let mut source = editor();
    source.place_part("wedge_unit", 77.0, 88.0).unwrap();
    source.export_snapshot().save_to_file(&path).unwrap();

    let loaded = LayoutSnapshot::load_from_file(&path).unwrap();
    assert_eq!(loaded, source.export_snapshot());
}

#[test]
fn test_load_missing_file_is_an_error() {
    assert!(LayoutSnapshot::load_from_file("/nonexistent/jig-design.json").is_err());
}
