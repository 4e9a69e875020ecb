//! Sketch renderer
//! Renders the 2D sketch to an image buffer using tiny-skia.

use crate::shapes::SketchShape;
use crate::SketchPad;
use image::{Rgb, RgbImage};
use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

const GRID_SPACING: f32 = 20.0;
const STROKE_WIDTH: f32 = 2.0;
/// Segments used to flatten arcs into polylines.
const ARC_SEGMENTS: u32 = 48;

fn background_color() -> Color {
    Color::from_rgba8(248, 250, 252, 255) // #f8fafc
}
fn grid_color() -> Color {
    Color::from_rgba8(226, 232, 240, 255) // #e2e8f0
}
fn shape_color() -> Color {
    Color::from_rgba8(37, 99, 235, 255) // #2563eb
}

/// Render the sketch shapes over a light grid.
pub fn render_sketch(pad: &SketchPad, width: u32, height: u32) -> RgbImage {
    let Some(mut pixmap) = Pixmap::new(width, height) else {
        return RgbImage::new(width, height);
    };
    pixmap.fill(background_color());

    draw_grid(&mut pixmap, width, height);

    let mut paint = Paint::default();
    paint.set_color(shape_color());
    paint.anti_alias = true;
    let stroke = Stroke {
        width: STROKE_WIDTH,
        ..Default::default()
    };

    for shape in pad.shapes() {
        if let Some(path) = shape_path(shape) {
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

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
    while x <= width as f32 {
        pb.move_to(x, 0.0);
        pb.line_to(x, height as f32);
        x += GRID_SPACING;
    }
    let mut y = 0.0;
    while y <= height as f32 {
        pb.move_to(0.0, y);
        pb.line_to(width as f32, y);
        y += GRID_SPACING;
    }
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn shape_path(shape: &SketchShape) -> Option<tiny_skia::Path> {
    match *shape {
        SketchShape::Line { x1, y1, x2, y2 } => {
            let mut pb = PathBuilder::new();
            pb.move_to(x1 as f32, y1 as f32);
            pb.line_to(x2 as f32, y2 as f32);
            pb.finish()
        }
        SketchShape::Circle { x, y, radius } => {
            PathBuilder::from_circle(x as f32, y as f32, radius.max(0.1) as f32)
        }
        SketchShape::Rectangle {
            x,
            y,
            width,
            height,
        } => Rect::from_xywh(
            x as f32,
            y as f32,
            width.max(0.1) as f32,
            height.max(0.1) as f32,
        )
        .map(PathBuilder::from_rect),
        SketchShape::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
        } => arc_path(x, y, radius, start_angle, end_angle),
    }
}

/// Flattens an arc into a polyline; tiny-skia has no arc primitive.
fn arc_path(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> Option<tiny_skia::Path> {
    let mut pb = PathBuilder::new();
    let sweep = end_angle - start_angle;
    for i in 0..=ARC_SEGMENTS {
        let t = start_angle + sweep * f64::from(i) / f64::from(ARC_SEGMENTS);
        let px = (x + radius * t.cos()) as f32;
        let py = (y + radius * t.sin()) as f32;
        if i == 0 {
            pb.move_to(px, py);
        } else {
            pb.line_to(px, py);
        }
    }
    pb.finish()
}
