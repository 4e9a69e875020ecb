use jigkit_core::catalog::{PartCatalog, PropValue};
use jigkit_core::error::CatalogError;
use jigkit_designer::editor::{Interaction, LayoutEditor, ToolMode};
use jigkit_designer::Annotation;

fn editor() -> LayoutEditor {
    LayoutEditor::new(PartCatalog::standard())
}

#[test]
fn test_place_part_defaults() {
    let mut editor = editor();
    let id = editor.place_part("clamp_toggle", 120.0, 80.0).unwrap();

    assert_eq!(editor.parts().len(), 1);
    let part = &editor.parts()[0];
    assert_eq!(part.id, id);
    assert_eq!((part.x, part.y), (120.0, 80.0));
    assert_eq!(part.rotation, 0.0);
    assert!(part.selected);
    assert_eq!(
        part.props.get("state"),
        Some(&PropValue::Text("닫힘".to_string()))
    );
    assert_eq!(
        part.props.get("model"),
        Some(&PropValue::Text("TC-200".to_string()))
    );
}

#[test]
fn test_place_unknown_kind_leaves_list_unchanged() {
    let mut editor = editor();
    editor.place_part("base_plate", 100.0, 100.0).unwrap();

    let err = editor.place_part("conveyor_belt", 0.0, 0.0).unwrap_err();
    assert_eq!(
        err,
        CatalogError::UnknownPartKind {
            kind: "conveyor_belt".to_string()
        }
    );
    assert_eq!(editor.parts().len(), 1);
}

#[test]
fn test_at_most_one_selected() {
    let mut editor = editor();
    let a = editor.place_part("rest_block", 50.0, 50.0).unwrap();
    let b = editor.place_part("rest_block", 200.0, 200.0).unwrap();

    let selected_count = |e: &LayoutEditor| e.parts().iter().filter(|p| p.selected).count();

    // Placement selects the newest part only.
    assert_eq!(selected_count(&editor), 1);
    assert_eq!(editor.selected_id(), Some(b));

    editor.select(Some(a));
    assert_eq!(selected_count(&editor), 1);
    assert_eq!(editor.selected_id(), Some(a));

    editor.delete_selected();
    assert_eq!(selected_count(&editor), 0);
    assert_eq!(editor.parts().len(), 1);

    editor.select(None);
    assert_eq!(selected_count(&editor), 0);
}

#[test]
fn test_hit_test_picks_topmost() {
    let mut editor = editor();
    let bottom = editor.place_part("base_plate", 100.0, 100.0).unwrap();
    let top = editor.place_part("rest_block", 100.0, 100.0).unwrap();

    editor.pointer_down(100.0, 100.0);
    assert_eq!(editor.selected_id(), Some(top));
    editor.pointer_up();

    // Outside the rest block but still on the plate.
    editor.pointer_down(180.0, 100.0);
    assert_eq!(editor.selected_id(), Some(bottom));
    editor.pointer_up();
}

#[test]
fn test_click_empty_space_clears_selection() {
    let mut editor = editor();
    editor.place_part("rest_block", 50.0, 50.0).unwrap();
    assert!(editor.selected_id().is_some());

    editor.pointer_down(500.0, 500.0);
    assert_eq!(editor.selected_id(), None);
}

#[test]
fn test_drag_keeps_grab_offset() {
    let mut editor = editor();
    editor.place_part("rest_block", 100.0, 100.0).unwrap();

    // Grab 5 pixels right and 10 below the center.
    editor.pointer_down(105.0, 110.0);
    editor.pointer_move(205.0, 210.0);

    let part = &editor.parts()[0];
    assert_eq!((part.x, part.y), (200.0, 200.0));

    editor.pointer_up();
    // Further movement has no effect once released, and a second
    // pointer_up is harmless.
    editor.pointer_move(300.0, 300.0);
    editor.pointer_up();
    let part = &editor.parts()[0];
    assert_eq!((part.x, part.y), (200.0, 200.0));
}

#[test]
fn test_line_stroke_commits_annotation() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Line);
    editor.pointer_down(10.0, 20.0);
    editor.pointer_move(30.0, 40.0);

    // Live preview while sketching, nothing committed yet.
    assert!(editor.preview().is_some());
    assert!(editor.annotations().is_empty());

    editor.pointer_up();
    assert_eq!(
        editor.annotations(),
        &[Annotation::Line {
            x1: 10.0,
            y1: 20.0,
            x2: 30.0,
            y2: 40.0
        }]
    );
    assert!(editor.preview().is_none());
}

#[test]
fn test_circle_radius_is_euclidean_distance() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Circle);
    editor.pointer_down(0.0, 0.0);
    editor.pointer_move(3.0, 4.0);
    editor.pointer_up();

    assert_eq!(
        editor.annotations(),
        &[Annotation::Circle {
            x: 0.0,
            y: 0.0,
            radius: 5.0
        }]
    );
}

#[test]
fn test_rectangle_normalizes_drag_direction() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Rectangle);
    // Drag up-left.
    editor.pointer_down(100.0, 100.0);
    editor.pointer_move(40.0, 70.0);
    editor.pointer_up();

    assert_eq!(
        editor.annotations(),
        &[Annotation::Rect {
            x: 40.0,
            y: 70.0,
            width: 60.0,
            height: 30.0
        }]
    );
}

#[test]
fn test_text_tool_requires_confirmed_nonempty_input() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Text);
    editor.pointer_down(15.0, 25.0);
    assert!(matches!(
        editor.interaction(),
        Interaction::AwaitingText { .. }
    ));

    // Whitespace-only input is rejected and ends the pending entry.
    assert!(!editor.confirm_text("   "));
    assert!(editor.annotations().is_empty());
    assert!(matches!(editor.interaction(), Interaction::Idle));

    editor.pointer_down(15.0, 25.0);
    assert!(editor.confirm_text("DATUM A"));
    assert_eq!(
        editor.annotations(),
        &[Annotation::Text {
            x: 15.0,
            y: 25.0,
            text: "DATUM A".to_string()
        }]
    );

    // Confirming with nothing pending is a no-op.
    assert!(!editor.confirm_text("ignored"));
}

#[test]
fn test_cancel_text_aborts_entry() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Text);
    editor.pointer_down(0.0, 0.0);
    editor.cancel_text();
    assert!(matches!(editor.interaction(), Interaction::Idle));
    assert!(editor.annotations().is_empty());
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut editor = editor();
    editor.place_part("shim_pack", 10.0, 10.0).unwrap();
    editor.select(None);
    editor.delete_selected();
    assert_eq!(editor.parts().len(), 1);
}

#[test]
fn test_clear_all_resets_everything() {
    let mut editor = editor();
    editor.place_part("base_plate", 100.0, 100.0).unwrap();
    editor.place_part("wedge_unit", 50.0, 50.0).unwrap();
    editor.set_mode(ToolMode::Line);
    editor.pointer_down(0.0, 0.0);
    editor.pointer_move(10.0, 10.0);
    editor.pointer_up();

    editor.clear_all();
    assert!(editor.parts().is_empty());
    assert!(editor.annotations().is_empty());
    assert_eq!(editor.selected_id(), None);

    // Clearing an already-empty editor is fine too.
    editor.clear_all();
    assert!(editor.parts().is_empty());
}

#[test]
fn test_inspector_edits_write_back() {
    let mut editor = editor();
    editor.place_part("clamp_swing", 60.0, 60.0).unwrap();

    assert!(editor.set_selected_position(90.0, 45.0));
    assert!(editor.set_selected_rotation(135.0));
    assert!(editor.set_selected_prop("angle", PropValue::Number(45.0)));
    // Keys outside the schema are rejected.
    assert!(!editor.set_selected_prop("torque", PropValue::Number(1.0)));

    let part = editor.selected().unwrap();
    assert_eq!((part.x, part.y), (90.0, 45.0));
    assert_eq!(part.rotation, 135.0);
    assert_eq!(part.props.get("angle"), Some(&PropValue::Number(45.0)));
    assert!(!part.props.contains_key("torque"));

    editor.select(None);
    assert!(!editor.set_selected_position(0.0, 0.0));
    assert!(!editor.set_selected_rotation(0.0));
}

#[test]
fn test_switching_tool_abandons_interaction() {
    let mut editor = editor();
    editor.set_mode(ToolMode::Rectangle);
    editor.pointer_down(0.0, 0.0);
    editor.set_mode(ToolMode::Select);
    editor.pointer_up();
    assert!(editor.annotations().is_empty());
}
