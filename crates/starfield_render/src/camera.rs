//! Fixed perspective camera
//!
//! The backdrop never moves its camera: it sits at (0, 0, 3) looking at the
//! origin with a 60° vertical field of view.

use starfield_math::{mat4, Mat4, Vec3};

/// Perspective camera looking at a target point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera with the backdrop's defaults
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 60.0,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// World-to-view matrix
    pub fn view_matrix(&self) -> Mat4 {
        mat4::look_at(self.position, self.target, self.up)
    }

    /// View-to-clip matrix for the given aspect ratio
    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        mat4::perspective(self.fov_y.to_radians(), aspect, self.near, self.far)
    }
}
