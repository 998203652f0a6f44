//! Core types for the starfield backdrop
//!
//! This crate holds everything the animated background needs that does not
//! touch the GPU:
//!
//! - [`PointCloud`] - Immutable set of points sampled in a spherical shell
//! - [`generate`] - Area-uniform shell sampling with an injectable RNG
//! - [`RotationState`] - Accumulated X/Y rotation angles
//! - [`RotationRates`] - Angular velocity per axis
//! - [`advance`] - Pure per-frame state transition
//! - [`ParticleField`] - Cloud + rotation, driven once per frame
//! - [`FieldConfig`] - Serializable parameters with the observed defaults
//! - [`FieldError`] - Precondition violations

mod error;
mod config;
mod point_cloud;
mod rotation;
mod field;

pub use error::FieldError;
pub use config::FieldConfig;
pub use point_cloud::{PointCloud, generate};
pub use rotation::{RotationState, RotationRates, advance};
pub use field::ParticleField;

// Re-export math types used in the public API
pub use starfield_math::{Vec3, Mat4};
