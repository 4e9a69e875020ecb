//! Extruded solids and triangle mesh tessellation.

use crate::shapes::SketchShape;
use nalgebra::{Point3, Vector3};

/// The cross-section of an extruded solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolidKind {
    Cylinder { radius: f64 },
    Box { width: f64, depth: f64 },
}

/// The single active solid derived from one sketch shape.
///
/// Placed at the source shape's 2D coordinates and lifted by half the
/// extrusion height along the depth axis, so the solid sits on the sketch
/// plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudedSolid {
    pub kind: SolidKind,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl ExtrudedSolid {
    /// Builds a solid from an extrudable shape. Lines and arcs yield `None`.
    pub fn from_shape(shape: &SketchShape, height: f64) -> Option<Self> {
        match *shape {
            SketchShape::Circle { x, y, radius } => Some(Self {
                kind: SolidKind::Cylinder { radius },
                height,
                x,
                y,
            }),
            SketchShape::Rectangle {
                x,
                y,
                width,
                height: depth,
            } => Some(Self {
                kind: SolidKind::Box { width, depth },
                height,
                x,
                y,
            }),
            SketchShape::Line { .. } | SketchShape::Arc { .. } => None,
        }
    }

    /// Center of the solid in preview space.
    pub fn center(&self) -> Point3<f32> {
        Point3::new(self.x as f32, self.y as f32, (self.height / 2.0) as f32)
    }

    /// Tessellates into triangles. `segments` controls the roundness of
    /// cylinders and is ignored for boxes.
    pub fn to_mesh(&self, segments: u32) -> TriMesh {
        match self.kind {
            SolidKind::Cylinder { radius } => {
                cylinder_mesh(self.center(), radius as f32, self.height as f32, segments)
            }
            SolidKind::Box { width, depth } => {
                box_mesh(self.center(), width as f32, depth as f32, self.height as f32)
            }
        }
    }
}

/// A 3D triangle made up of three vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle3D {
    pub vertices: [Point3<f32>; 3],
    pub normal: Vector3<f32>,
}

impl Triangle3D {
    pub fn new(v1: Point3<f32>, v2: Point3<f32>, v3: Point3<f32>) -> Self {
        // Normal from the winding order via cross product.
        let edge1 = v2 - v1;
        let edge2 = v3 - v1;
        let normal = edge1.cross(&edge2).normalize();
        Self {
            vertices: [v1, v2, v3],
            normal,
        }
    }
}

/// A triangle soup ready for upload to whatever renders the preview.
#[derive(Debug, Clone, Default)]
pub struct TriMesh {
    pub triangles: Vec<Triangle3D>,
}

impl TriMesh {
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Axis-aligned bounds over all vertices.
    pub fn bounds(&self) -> Option<(Point3<f32>, Point3<f32>)> {
        let mut vertices = self.triangles.iter().flat_map(|t| t.vertices.iter());
        let first = *vertices.next()?;
        let (mut min, mut max) = (first, first);
        for v in vertices {
            min = Point3::new(min.x.min(v.x), min.y.min(v.y), min.z.min(v.z));
            max = Point3::new(max.x.max(v.x), max.y.max(v.y), max.z.max(v.z));
        }
        Some((min, max))
    }
}

/// Closed cylinder around `center`, axis along +Z: `segments` quads on the
/// side plus triangle fans on both caps, 4 * segments triangles total.
fn cylinder_mesh(center: Point3<f32>, radius: f32, height: f32, segments: u32) -> TriMesh {
    let segments = segments.max(3);
    let half = height / 2.0;
    let top = center.z + half;
    let bottom = center.z - half;
    let mut triangles = Vec::with_capacity(segments as usize * 4);

    let ring = |i: u32, z: f32| {
        let angle = 2.0 * std::f32::consts::PI * (i % segments) as f32 / segments as f32;
        Point3::new(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
            z,
        )
    };

    for i in 0..segments {
        let (b0, b1) = (ring(i, bottom), ring(i + 1, bottom));
        let (t0, t1) = (ring(i, top), ring(i + 1, top));

        // Side quad, outward-facing winding.
        triangles.push(Triangle3D::new(b0, b1, t1));
        triangles.push(Triangle3D::new(b0, t1, t0));

        // Caps fan out from the axis.
        let top_center = Point3::new(center.x, center.y, top);
        let bottom_center = Point3::new(center.x, center.y, bottom);
        triangles.push(Triangle3D::new(top_center, t0, t1));
        triangles.push(Triangle3D::new(bottom_center, b1, b0));
    }

    TriMesh { triangles }
}

/// Axis-aligned box around `center`: two triangles per face, 12 total.
fn box_mesh(center: Point3<f32>, width: f32, depth: f32, height: f32) -> TriMesh {
    let (hx, hy, hz) = (width / 2.0, depth / 2.0, height / 2.0);
    let corner = |sx: f32, sy: f32, sz: f32| {
        Point3::new(center.x + sx * hx, center.y + sy * hy, center.z + sz * hz)
    };

    // Corner layout: (x sign, y sign, z sign).
    let faces: [[Point3<f32>; 4]; 6] = [
        // +Z (top), counter-clockwise seen from above
        [
            corner(-1.0, -1.0, 1.0),
            corner(1.0, -1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
        ],
        // -Z (bottom)
        [
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, 1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, -1.0, -1.0),
        ],
        // +X
        [
            corner(1.0, -1.0, -1.0),
            corner(1.0, 1.0, -1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, -1.0, 1.0),
        ],
        // -X
        [
            corner(-1.0, -1.0, -1.0),
            corner(-1.0, -1.0, 1.0),
            corner(-1.0, 1.0, 1.0),
            corner(-1.0, 1.0, -1.0),
        ],
        // +Y
        [
            corner(-1.0, 1.0, -1.0),
            corner(-1.0, 1.0, 1.0),
            corner(1.0, 1.0, 1.0),
            corner(1.0, 1.0, -1.0),
        ],
        // -Y
        [
            corner(-1.0, -1.0, -1.0),
            corner(1.0, -1.0, -1.0),
            corner(1.0, -1.0, 1.0),
            corner(-1.0, -1.0, 1.0),
        ],
    ];

    let mut triangles = Vec::with_capacity(12);
    for [a, b, c, d] in faces {
        triangles.push(Triangle3D::new(a, b, c));
        triangles.push(Triangle3D::new(a, c, d));
    }
    TriMesh { triangles }
}
