//! Starfield Mathematics Library
//!
//! Small, dependency-light math types shared by the starfield crates.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components (GPU-compatible)
//! - [`Mat4`] - 4x4 column-major matrix for rigid transforms and projection

mod vec3;
pub mod mat4;

pub use vec3::Vec3;
pub use mat4::Mat4;
