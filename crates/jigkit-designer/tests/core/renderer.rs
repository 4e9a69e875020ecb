use jigkit_core::catalog::PartCatalog;
use jigkit_designer::editor::{LayoutEditor, ToolMode};
use jigkit_designer::renderer::render_layout;

#[test]
fn test_render_produces_requested_dimensions() {
    let editor = LayoutEditor::new(PartCatalog::standard());
    let image = render_layout(&editor, 320, 240);
    assert_eq!((image.width(), image.height()), (320, 240));
}

#[test]
fn test_placed_parts_change_pixels() {
    let mut editor = LayoutEditor::new(PartCatalog::standard());
    let empty = render_layout(&editor, 200, 200);

    editor.place_part("pin_round", 100.0, 100.0).unwrap();
    let with_pin = render_layout(&editor, 200, 200);

    assert_ne!(empty.as_raw(), with_pin.as_raw());
    // The pin center carries its fill color, not the background.
    let center = with_pin.get_pixel(100, 100);
    assert_ne!(center.0, [17, 24, 39]);
}

#[test]
fn test_preview_stroke_is_drawn_while_sketching() {
    let mut editor = LayoutEditor::new(PartCatalog::standard());
    editor.set_mode(ToolMode::Rectangle);
    editor.pointer_down(20.0, 20.0);
    editor.pointer_move(120.0, 90.0);

    let during = render_layout(&editor, 200, 200);
    editor.pointer_up();
    let after = render_layout(&editor, 200, 200);

    // Committed stroke renders solid instead of dashed, so the frames differ.
    assert_ne!(during.as_raw(), after.as_raw());
}
