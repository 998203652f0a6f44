//! Rendering pipeline components
//!
//! The point pipeline draws every point of the cloud as a camera-facing quad
//! (two triangles per instance).

pub mod types;
pub mod point_pipeline;

// Re-export types
pub use types::{PointUniforms, PointVertex, QUAD_VERTEX_COUNT};

// Re-export pipelines
pub use point_pipeline::PointPipeline;
