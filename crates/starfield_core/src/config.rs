//! Particle field parameters
//!
//! Defaults reproduce the observed backdrop: 5000 points in a 1.5..3.0 shell,
//! spinning at -1/20 rad/s about X and -1/25 rad/s about Y, tilted 45° about Z.

use serde::{Serialize, Deserialize};

use crate::{FieldError, RotationRates};

/// Configuration for a [`ParticleField`](crate::ParticleField)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Number of points in the cloud
    pub count: usize,
    /// Inner radius of the spherical shell
    pub radius_min: f32,
    /// Outer radius of the spherical shell
    pub radius_max: f32,
    /// Angular velocity [x, y] in radians per second
    pub rotation_rate: [f64; 2],
    /// Fixed tilt of the whole group about Z, in radians
    pub tilt_z: f32,
    /// RNG seed; `None` samples from the thread RNG
    pub seed: Option<u64>,
}

impl Default for FieldConfig {
    fn default() -> Self {
        let rates = RotationRates::default();
        Self {
            count: 5000,
            radius_min: 1.5,
            radius_max: 3.0,
            rotation_rate: [rates.x, rates.y],
            tilt_z: std::f32::consts::FRAC_PI_4,
            seed: None,
        }
    }
}

impl FieldConfig {
    /// Rotation rates as a [`RotationRates`]
    pub fn rates(&self) -> RotationRates {
        RotationRates::new(self.rotation_rate[0], self.rotation_rate[1])
    }

    /// Check the radius and rotation preconditions without generating anything
    pub fn validate(&self) -> Result<(), FieldError> {
        validate_radius(self.radius_min, self.radius_max)?;
        let rotation = [
            ("rotation_rate.x", self.rotation_rate[0]),
            ("rotation_rate.y", self.rotation_rate[1]),
            ("tilt_z", self.tilt_z as f64),
        ];
        for (name, value) in rotation {
            if !value.is_finite() {
                return Err(FieldError::NonFiniteRotation { name, value });
            }
        }
        Ok(())
    }
}

/// Shared radius precondition: finite, `0 <= min <= max`
pub(crate) fn validate_radius(min: f32, max: f32) -> Result<(), FieldError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(FieldError::NonFiniteRadius { min, max });
    }
    if min < 0.0 || max < min {
        return Err(FieldError::InvalidRadius { min, max });
    }
    Ok(())
}
