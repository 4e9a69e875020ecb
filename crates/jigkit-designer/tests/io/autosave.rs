use jigkit_core::catalog::PartCatalog;
use jigkit_designer::autosave::AutosaveSlot;
use jigkit_designer::editor::LayoutEditor;

fn editor() -> LayoutEditor {
    LayoutEditor::new(PartCatalog::standard())
}

#[test]
fn test_save_and_restore_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let slot = AutosaveSlot::at(dir.path().join("jigDesign.json"));

    let mut source = editor();
    source.place_part("base_plate", 300.0, 300.0).unwrap();
    source.place_part("clamp_l", 120.0, 90.0).unwrap();
    source.save_local(&slot).unwrap();
    assert!(!source.is_modified());

    let mut restored = editor();
    assert!(restored.load_local(&slot));
    assert_eq!(restored.parts().len(), 2);
    assert_eq!(restored.parts()[1].kind, "clamp_l");
}

#[test]
fn test_missing_slot_restores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let slot = AutosaveSlot::at(dir.path().join("jigDesign.json"));

    let mut restored = editor();
    assert!(!restored.load_local(&slot));
    assert!(restored.parts().is_empty());
}

#[test]
fn test_corrupt_slot_is_fail_soft() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jigDesign.json");
    std::fs::write(&path, "{not json at all").unwrap();

    let slot = AutosaveSlot::at(&path);
    assert!(slot.restore().is_none());

    // The editor comes up empty rather than failing initialization.
    let mut restored = editor();
    assert!(!restored.load_local(&slot));
    assert!(restored.parts().is_empty());
}

#[test]
fn test_slot_with_unknown_kind_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jigDesign.json");
    std::fs::write(
        &path,
        r#"{"components":[{"type":"hover_pad","x":0,"y":0,"rotation":0,"props":{}}]}"#,
    )
    .unwrap();

    let mut restored = editor();
    assert!(!restored.load_local(&AutosaveSlot::at(&path)));
    assert!(restored.parts().is_empty());
}

#[test]
fn test_store_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let slot = AutosaveSlot::at(dir.path().join("nested/config/jigDesign.json"));

    let mut source = editor();
    source.place_part("pin_round", 1.0, 2.0).unwrap();
    source.save_local(&slot).unwrap();
    assert!(slot.path().exists());
    assert!(slot.restore().is_some());
}
