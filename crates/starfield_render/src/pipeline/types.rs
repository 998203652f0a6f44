//! GPU-compatible data types for the point pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};
use starfield_math::{mat4, Mat4, Vec3};

/// Per-instance vertex: one point of the cloud, uploaded straight from
/// [`PointCloud::points`](starfield_core::PointCloud::points)
pub type PointVertex = Vec3;

/// Vertices emitted per point (two triangles forming a sprite quad)
pub const QUAD_VERTEX_COUNT: u32 = 6;

/// Uniforms for the point pass
/// Layout: 224 bytes total (must match points.wgsl PointUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct PointUniforms {
    /// Model matrix: the field's rigid rotation (64 bytes)
    pub model_matrix: Mat4,
    /// View matrix (64 bytes)
    pub view_matrix: Mat4,
    /// Projection matrix (64 bytes)
    pub projection_matrix: Mat4,
    /// RGBA point color (16 bytes)
    pub color: [f32; 4],
    /// Sprite size: world units with attenuation, pixels without
    pub point_size: f32,
    /// Viewport width / height
    pub aspect: f32,
    /// Viewport height in pixels
    pub viewport_height: f32,
    /// Nonzero scales sprites with distance
    pub size_attenuation: u32,
}

impl Default for PointUniforms {
    fn default() -> Self {
        Self {
            model_matrix: mat4::IDENTITY,
            view_matrix: mat4::IDENTITY,
            projection_matrix: mat4::IDENTITY,
            color: [1.0, 1.0, 1.0, 1.0],
            point_size: 0.01,
            aspect: 1.0,
            viewport_height: 720.0,
            size_attenuation: 1,
        }
    }
}
