//! Spherical-shell point cloud
//!
//! Points are sampled once and never change afterwards. The polar angle is
//! drawn as `acos(2u - 1)` so density is uniform per unit of surface area;
//! drawing it uniformly would bunch points at the poles.

use std::f32::consts::TAU;

use rand::Rng;
use starfield_math::Vec3;

use crate::config::validate_radius;
use crate::{FieldConfig, FieldError};

/// An immutable, ordered set of points inside a spherical shell
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud {
    points: Vec<Vec3>,
    radius_min: f32,
    radius_max: f32,
}

impl PointCloud {
    /// Generate a cloud from a [`FieldConfig`]
    pub fn generate_with<R: Rng + ?Sized>(config: &FieldConfig, rng: &mut R) -> Result<Self, FieldError> {
        generate(config.count, config.radius_min, config.radius_max, rng)
    }

    /// The generated points, in generation order
    #[inline]
    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    /// Number of points
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the cloud holds no points
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterate over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Vec3> {
        self.points.iter()
    }

    /// The shell bounds this cloud was sampled from
    pub fn radius_range(&self) -> (f32, f32) {
        (self.radius_min, self.radius_max)
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Vec3;
    type IntoIter = std::slice::Iter<'a, Vec3>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Sample `count` points uniformly over the shell `radius_min..=radius_max`
///
/// Each point draws, in order, a radius uniform in the range, an azimuth
/// uniform in `[0, 2π)` and a polar angle `acos(2u - 1)`.
///
/// Fails with [`FieldError`] if the range is not finite, `radius_min < 0`
/// or `radius_max < radius_min`. `count == 0` yields an empty cloud.
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    radius_min: f32,
    radius_max: f32,
    rng: &mut R,
) -> Result<PointCloud, FieldError> {
    validate_radius(radius_min, radius_max)?;

    let span = radius_max - radius_min;
    let mut points = Vec::with_capacity(count);

    for _ in 0..count {
        let radius = radius_min + rng.random::<f32>() * span;
        let theta = rng.random::<f32>() * TAU;
        let phi = (2.0 * rng.random::<f32>() - 1.0).acos();
        points.push(Vec3::from_spherical(radius, theta, phi));
    }

    Ok(PointCloud {
        points,
        radius_min,
        radius_max,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    const EPSILON: f32 = 1e-4;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(0x5747)
    }

    #[test]
    fn test_generate_count() {
        for n in [0usize, 1, 2, 17, 1000] {
            let cloud = generate(n, 1.5, 3.0, &mut rng()).unwrap();
            assert_eq!(cloud.len(), n);
        }
    }

    #[test]
    fn test_generate_empty() {
        let cloud = generate(0, 1.5, 3.0, &mut rng()).unwrap();
        assert!(cloud.is_empty());
        assert!(cloud.points().is_empty());
    }

    #[test]
    fn test_radius_within_shell() {
        let cloud = generate(2000, 1.5, 3.0, &mut rng()).unwrap();
        for p in &cloud {
            let r = p.length();
            assert!(r >= 1.5 - EPSILON && r <= 3.0 + EPSILON, "radius {} out of shell", r);
        }
    }

    #[test]
    fn test_zero_thickness_shell() {
        let cloud = generate(500, 2.0, 2.0, &mut rng()).unwrap();
        for p in cloud.iter() {
            assert!((p.length() - 2.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_zero_radius_collapses_to_origin() {
        let cloud = generate(10, 0.0, 0.0, &mut rng()).unwrap();
        assert!(cloud.iter().all(|p| p.length() == 0.0));
    }

    #[test]
    fn test_same_seed_same_cloud() {
        let a = generate(100, 1.5, 3.0, &mut SmallRng::seed_from_u64(9)).unwrap();
        let b = generate(100, 1.5, 3.0, &mut SmallRng::seed_from_u64(9)).unwrap();
        let c = generate(100, 1.5, 3.0, &mut SmallRng::seed_from_u64(10)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_invalid_range_rejected() {
        assert_eq!(
            generate(10, 3.0, 1.5, &mut rng()),
            Err(FieldError::InvalidRadius { min: 3.0, max: 1.5 })
        );
        assert!(generate(10, -1.0, 1.5, &mut rng()).is_err());
        assert!(generate(10, 1.0, f32::NAN, &mut rng()).is_err());
    }

    #[test]
    fn test_invalid_range_rejected_even_when_empty() {
        assert!(generate(0, 3.0, 1.5, &mut rng()).is_err());
    }

    #[test]
    fn test_generate_with_config() {
        let config = FieldConfig { count: 42, ..Default::default() };
        let cloud = PointCloud::generate_with(&config, &mut rng()).unwrap();
        assert_eq!(cloud.len(), 42);
        assert_eq!(cloud.radius_range(), (1.5, 3.0));
    }

    #[test]
    fn test_works_with_dyn_rng() {
        let mut inner = rng();
        let dyn_rng: &mut dyn rand::RngCore = &mut inner;
        let cloud = generate(5, 1.0, 2.0, dyn_rng).unwrap();
        assert_eq!(cloud.len(), 5);
    }
}
