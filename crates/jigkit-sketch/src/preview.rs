//! Orbit camera and the preview surface capability.
//!
//! The sketch tool never talks to a concrete 3D backend. It drives a
//! [`PreviewSurface`] (whatever scene graph the host mounts) and owns only
//! the camera parameters and the sync logic. While the 3D view is mounted
//! the host redraws every frame unconditionally; the camera here just
//! answers with current matrices.

use crate::solid::ExtrudedSolid;
use glam::{Mat4, Vec3};

/// Radians of yaw per horizontal pixel of drag.
pub const ROTATE_SPEED: f32 = 0.005;
/// Fraction of the current distance added or removed per wheel event.
pub const ZOOM_STEP: f32 = 0.1;

/// Orbit camera for the solid preview.
///
/// Press-drag rotates around the vertical axis only; the vertical pointer
/// delta is intentionally unused. Wheel zoom scales the distance with
/// clamping.
#[derive(Debug, Clone, Copy)]
pub struct OrbitCamera {
    /// Radians around the vertical axis.
    pub yaw: f32,
    pub distance: f32,
    /// Degrees.
    pub fov: f32,
    pub aspect_ratio: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            distance: 200.0,
            fov: 75.0,
            aspect_ratio: 1.0,
            near: 0.1,
            far: 1000.0,
            min_distance: 50.0,
            max_distance: 500.0,
        }
    }
}

impl OrbitCamera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_aspect_ratio(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect_ratio = width / height;
        }
    }

    /// Horizontal drag: fixed angular speed per pixel.
    pub fn drag(&mut self, delta_x: f32) {
        self.yaw += delta_x * ROTATE_SPEED;
    }

    /// Wheel zoom: one proportional step per event, clamped.
    pub fn zoom(&mut self, wheel_delta: f32) {
        let step = if wheel_delta > 0.0 {
            ZOOM_STEP
        } else {
            -ZOOM_STEP
        };
        self.distance =
            (self.distance + step * self.distance).clamp(self.min_distance, self.max_distance);
    }

    /// Eye position orbiting the scene origin, Y up.
    pub fn eye(&self) -> Vec3 {
        Vec3::new(
            self.distance * self.yaw.sin(),
            0.0,
            self.distance * self.yaw.cos(),
        )
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), Vec3::ZERO, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect_ratio, self.near, self.far)
    }
}

/// Capability interface the hosting 3D backend implements.
///
/// Keeps the sketch tool independent of any particular scene graph: a GL
/// widget, a software rasterizer, and a test double all satisfy it.
pub trait PreviewSurface {
    /// Installs the given solid, replacing whatever was shown before.
    fn create_solid(&mut self, solid: &ExtrudedSolid);
    /// Removes the shown solid, if any.
    fn clear_solid(&mut self);
    fn set_camera_orbit(&mut self, yaw: f32);
    fn set_zoom_distance(&mut self, distance: f32);
}

/// Drives a [`PreviewSurface`] from camera input and pad state.
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewController {
    pub camera: OrbitCamera,
}

impl PreviewController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes the pad's current solid (or its absence) to the surface.
    pub fn sync_solid(&self, surface: &mut dyn PreviewSurface, solid: Option<&ExtrudedSolid>) {
        match solid {
            Some(solid) => surface.create_solid(solid),
            None => surface.clear_solid(),
        }
    }

    pub fn drag(&mut self, surface: &mut dyn PreviewSurface, delta_x: f32) {
        self.camera.drag(delta_x);
        surface.set_camera_orbit(self.camera.yaw);
    }

    pub fn scroll(&mut self, surface: &mut dyn PreviewSurface, wheel_delta: f32) {
        self.camera.zoom(wheel_delta);
        surface.set_zoom_distance(self.camera.distance);
    }
}
