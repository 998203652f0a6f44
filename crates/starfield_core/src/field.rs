//! The particle field component
//!
//! Owns one [`PointCloud`] for its whole lifetime and a [`RotationState`]
//! that the host advances once per frame.

use rand::Rng;
use starfield_math::{mat4, Mat4, Vec3};

use crate::{FieldConfig, FieldError, PointCloud, RotationRates, RotationState};

/// A static point cloud plus its continuous rotation
#[derive(Debug, Clone)]
pub struct ParticleField {
    cloud: PointCloud,
    rotation: RotationState,
    rates: RotationRates,
    tilt_z: f32,
}

impl ParticleField {
    /// Sample the cloud once and start at zero rotation
    pub fn new<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Result<Self, FieldError> {
        config.validate()?;
        let cloud = PointCloud::generate_with(config, rng)?;
        log::info!(
            "Generated particle field: {} points in shell [{}, {}]",
            cloud.len(),
            config.radius_min,
            config.radius_max
        );
        Ok(Self::from_cloud(cloud, config.rates(), config.tilt_z))
    }

    /// Wrap an existing cloud
    pub fn from_cloud(cloud: PointCloud, rates: RotationRates, tilt_z: f32) -> Self {
        Self {
            cloud,
            rotation: RotationState::ZERO,
            rates,
            tilt_z,
        }
    }

    /// Per-frame update: advance the rotation by `delta_time`
    ///
    /// Negative deltas are ignored. Points are never touched.
    pub fn update(&mut self, delta_time: f64) {
        self.rotation = self.rotation.advance(delta_time, &self.rates);
    }

    /// Rigid transform for the point group: `Rz(tilt) * Rx(x) * Ry(y)`
    pub fn model_matrix(&self) -> Mat4 {
        mat4::mul(mat4::rotation_z(self.tilt_z), self.rotation.to_matrix())
    }

    /// The generated points (object space)
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        self.cloud.points()
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.cloud.len()
    }

    pub fn cloud(&self) -> &PointCloud {
        &self.cloud
    }

    pub fn rotation(&self) -> RotationState {
        self.rotation
    }

    pub fn rates(&self) -> RotationRates {
        self.rates
    }

    pub fn tilt_z(&self) -> f32 {
        self.tilt_z
    }

    pub fn radius_range(&self) -> (f32, f32) {
        self.cloud.radius_range()
    }
}
