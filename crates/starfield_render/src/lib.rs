//! Starfield Rendering Library
//!
//! This crate provides the wgpu-based pipeline that draws a
//! [`ParticleField`](starfield_core::ParticleField) as round point sprites.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - Fixed perspective camera looking at the field
//! - [`pipeline::PointPipeline`] - Instanced point-sprite rendering
//!
//! The point buffer is uploaded once per mount; each frame only rewrites the
//! uniform block with the field's model matrix.

pub mod context;
pub mod camera;
pub mod pipeline;

// Re-export core types for convenience
pub use starfield_core::{ParticleField, PointCloud, RotationState, Vec3, Mat4};
