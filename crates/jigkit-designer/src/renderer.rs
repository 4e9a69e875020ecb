//! Layout renderer
//! Renders the layout editor to an image buffer for display in the UI
//! using tiny-skia for high-quality 2D rendering.
//!
//! Draw order: background, grid, parts in list order (list order is
//! z-order), committed annotations, then the in-progress stroke preview
//! with a dashed stroke.

use crate::annotation::Annotation;
use crate::editor::LayoutEditor;
use crate::font_manager;
use crate::part::PartInstance;
use image::{Rgb, RgbImage};
use jigkit_core::catalog::{PartDefinition, ShapeHint};
use rusttype::{point as rt_point, Scale};
use tiny_skia::{
    Color, FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, StrokeDash, Transform,
};

const GRID_SPACING: f32 = 50.0;
const ANNOTATION_WIDTH: f32 = 2.0;
const TEXT_SIZE: f32 = 16.0;

fn background_color() -> Color {
    Color::from_rgba8(17, 24, 39, 255)
}
fn grid_color() -> Color {
    Color::from_rgba8(45, 45, 45, 255)
}
fn annotation_color() -> Color {
    Color::from_rgba8(96, 165, 250, 255) // #60a5fa
}
fn selection_stroke_color() -> Color {
    Color::from_rgba8(96, 165, 250, 255)
}
fn selection_glow_color() -> Color {
    Color::from_rgba8(59, 130, 246, 90) // #3b82f6, translucent halo
}
fn text_color() -> Color {
    Color::from_rgba8(229, 231, 235, 255) // #e5e7eb
}

/// Parses a `#rrggbb` catalog color. Unrecognized strings fall back to
/// mid-gray rather than fail a frame.
fn parse_hex(color: &str) -> Color {
    let hex = color.strip_prefix('#').unwrap_or(color);
    if hex.len() == 6 {
        if let (Ok(r), Ok(g), Ok(b)) = (
            u8::from_str_radix(&hex[0..2], 16),
            u8::from_str_radix(&hex[2..4], 16),
            u8::from_str_radix(&hex[4..6], 16),
        ) {
            return Color::from_rgba8(r, g, b, 255);
        }
    }
    Color::from_rgba8(128, 128, 128, 255)
}

/// Local-to-canvas transform: translate to the part position, then rotate.
/// Rotation is normalized modulo 360 for rendering only.
fn part_transform(part: &PartInstance) -> Transform {
    let rad = (part.rotation % 360.0).to_radians() as f32;
    let (s, c) = rad.sin_cos();
    Transform::from_row(c, s, -s, c, part.x as f32, part.y as f32)
}

/// Render the layout to an image buffer.
pub fn render_layout(editor: &LayoutEditor, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(background_color());

    draw_grid(&mut pixmap, width, height);

    for part in editor.parts() {
        let Some(def) = editor.catalog().lookup(&part.kind) else {
            continue;
        };
        draw_part(&mut pixmap, part, def);
    }

    for annotation in editor.annotations() {
        draw_annotation(&mut pixmap, annotation, false, width, height);
    }

    if let Some(preview) = editor.preview() {
        draw_annotation(&mut pixmap, &preview, true, width, height);
    }

    // Convert Pixmap to RgbImage
    let data = pixmap.data();
    RgbImage::from_fn(width, height, |x, y| {
        let idx = ((y * width + x) * 4) as usize;
        Rgb([data[idx], data[idx + 1], data[idx + 2]])
    })
}

fn draw_grid(pixmap: &mut Pixmap, width: u32, height: u32) {
    let mut paint = Paint::default();
    paint.set_color(grid_color());
    paint.anti_alias = false;
    let stroke = Stroke {
        width: 1.0,
        ..Default::default()
    };

    let mut pb = PathBuilder::new();
    let mut x = 0.0;
    while x < width as f32 {
        pb.move_to(x, 0.0);
        pb.line_to(x, height as f32);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y < height as f32 {
        pb.move_to(0.0, y);
        pb.line_to(width as f32, y);
        y += GRID_SPACING;
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_part(pixmap: &mut Pixmap, part: &PartInstance, def: &PartDefinition) {
    let transform = part_transform(part);
    let w = def.width as f32;
    let h = def.height as f32;

    let mut fill = Paint::default();
    fill.set_color(parse_hex(def.color));
    fill.anti_alias = true;

    let mut stroke_paint = Paint::default();
    stroke_paint.anti_alias = true;
    let stroke = if part.selected {
        stroke_paint.set_color(selection_stroke_color());
        Stroke {
            width: 2.0,
            ..Default::default()
        }
    } else {
        stroke_paint.set_color(parse_hex(def.stroke));
        Stroke {
            width: 1.0,
            ..Default::default()
        }
    };

    let outline = match def.shape {
        ShapeHint::Circle => PathBuilder::from_circle(0.0, 0.0, w / 2.0),
        ShapeHint::Diamond => {
            let mut pb = PathBuilder::new();
            pb.move_to(0.0, -h / 2.0);
            pb.line_to(w / 2.0, 0.0);
            pb.line_to(0.0, h / 2.0);
            pb.line_to(-w / 2.0, 0.0);
            pb.close();
            pb.finish()
        }
        ShapeHint::Rectangle => {
            Rect::from_xywh(-w / 2.0, -h / 2.0, w, h).map(PathBuilder::from_rect)
        }
    };
    let Some(outline) = outline else {
        return;
    };

    // Selection glow: a wide translucent halo behind the highlight stroke.
    if part.selected {
        let mut glow = Paint::default();
        glow.set_color(selection_glow_color());
        glow.anti_alias = true;
        let halo = Stroke {
            width: 8.0,
            ..Default::default()
        };
        pixmap.stroke_path(&outline, &glow, &halo, transform, None);
    }

    pixmap.fill_path(&outline, &fill, FillRule::Winding, transform, None);
    pixmap.stroke_path(&outline, &stroke_paint, &stroke, transform, None);

    if def.shape == ShapeHint::Circle {
        // Faint centered crosshair.
        let mut pb = PathBuilder::new();
        pb.move_to(-w / 4.0, 0.0);
        pb.line_to(w / 4.0, 0.0);
        pb.move_to(0.0, -w / 4.0);
        pb.line_to(0.0, w / 4.0);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(Color::from_rgba8(255, 255, 255, 128));
            paint.anti_alias = true;
            let hair = Stroke {
                width: 1.0,
                ..Default::default()
            };
            pixmap.stroke_path(&path, &paint, &hair, transform, None);
        }
    }

    if def.shape == ShapeHint::Rectangle && def.is_clamp() {
        // Clamp direction indicator.
        let mut pb = PathBuilder::new();
        pb.move_to(-5.0, 0.0);
        pb.line_to(5.0, 0.0);
        pb.line_to(0.0, -10.0);
        pb.close();
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(Color::from_rgba8(255, 255, 255, 77));
            paint.anti_alias = true;
            pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
        }
    }
}

fn draw_annotation(
    pixmap: &mut Pixmap,
    annotation: &Annotation,
    dashed: bool,
    width: u32,
    height: u32,
) {
    if let Annotation::Text { x, y, text } = annotation {
        draw_text(pixmap, *x as f32, *y as f32, text, width, height);
        return;
    }

    let path = match *annotation {
        Annotation::Line { x1, y1, x2, y2 } => {
            let mut pb = PathBuilder::new();
            pb.move_to(x1 as f32, y1 as f32);
            pb.line_to(x2 as f32, y2 as f32);
            pb.finish()
        }
        Annotation::Circle { x, y, radius } => {
            PathBuilder::from_circle(x as f32, y as f32, radius.max(0.1) as f32)
        }
        Annotation::Rect {
            x,
            y,
            width: w,
            height: h,
        } => Rect::from_xywh(x as f32, y as f32, w.max(0.1) as f32, h.max(0.1) as f32)
            .map(PathBuilder::from_rect),
        Annotation::Text { .. } => None,
    };
    let Some(path) = path else {
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(annotation_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: ANNOTATION_WIDTH,
        dash: if dashed {
            StrokeDash::new(vec![5.0, 5.0], 0.0)
        } else {
            None
        },
        ..Default::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn draw_text(pixmap: &mut Pixmap, x: f32, y: f32, text: &str, width: u32, height: u32) {
    let Some(font) = font_manager::default_font() else {
        return;
    };
    let scale = Scale::uniform(TEXT_SIZE);
    let v_metrics = font.v_metrics(scale);
    let start = rt_point(x, y + v_metrics.ascent);
    let color = text_color();
    let (tr, tg, tb) = (
        (color.red() * 255.0) as u16,
        (color.green() * 255.0) as u16,
        (color.blue() * 255.0) as u16,
    );

    for glyph in font.layout(text, scale, start) {
        if let Some(bounding_box) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, v| {
                let px = gx as i32 + bounding_box.min.x;
                let py = gy as i32 + bounding_box.min.y;
                if px >= 0 && px < width as i32 && py >= 0 && py < height as i32 {
                    let alpha = (v * 255.0) as u8;
                    if alpha > 0 {
                        let idx = ((py as u32 * width + px as u32) * 4) as usize;
                        let pixel = &mut pixmap.data_mut()[idx..idx + 4];
                        // Premultiplied alpha, written straight over the
                        // opaque background.
                        let a = alpha as u16;
                        pixel[0] = (tr * a / 255) as u8;
                        pixel[1] = (tg * a / 255) as u8;
                        pixel[2] = (tb * a / 255) as u8;
                        pixel[3] = alpha;
                    }
                }
            });
        }
    }
}
