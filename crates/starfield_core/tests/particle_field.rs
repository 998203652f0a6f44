//! Integration tests for the particle field
//!
//! These exercise the public API the renderer relies on:
//! 1. Shell sampling produces the requested count inside the shell
//! 2. Sampling is uniform by area (chi-squared over cos φ)
//! 3. Rotation depends only on total elapsed time

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use starfield_core::{
    advance, generate, FieldConfig, ParticleField, RotationRates, RotationState, Vec3,
};

const BUCKETS: usize = 20;
const SAMPLES: usize = 100_000;
/// Chi-squared critical value for 19 degrees of freedom at p = 0.001
const CHI2_CRITICAL_19: f64 = 43.82;

fn chi_squared(values: impl Iterator<Item = f32>, lo: f32, hi: f32) -> f64 {
    let mut counts = [0usize; BUCKETS];
    let mut total = 0usize;
    for v in values {
        let t = (v - lo) / (hi - lo);
        let bucket = ((t * BUCKETS as f32) as usize).min(BUCKETS - 1);
        counts[bucket] += 1;
        total += 1;
    }
    let expected = total as f64 / BUCKETS as f64;
    counts
        .iter()
        .map(|&c| {
            let d = c as f64 - expected;
            d * d / expected
        })
        .sum()
}

fn cos_polar(p: &Vec3) -> f32 {
    p.z / p.length()
}

// ==================== Generation ====================

#[test]
fn test_generate_empty_cloud() {
    let cloud = generate(0, 1.5, 3.0, &mut rand::rng()).unwrap();
    assert!(cloud.is_empty());
}

#[test]
fn test_observed_configuration_stays_in_shell() {
    let cloud = generate(5000, 1.5, 3.0, &mut rand::rng()).unwrap();
    assert_eq!(cloud.len(), 5000);
    for p in &cloud {
        let r = p.length();
        assert!(
            (1.5 - 1e-4..=3.0 + 1e-4).contains(&r),
            "point {:?} has norm {}",
            p,
            r
        );
    }
}

#[test]
fn test_counts_for_many_sizes() {
    let mut rng = SmallRng::seed_from_u64(11);
    for n in (0..200).step_by(13) {
        assert_eq!(generate(n, 0.5, 4.0, &mut rng).unwrap().len(), n);
    }
}

#[test]
fn test_zero_thickness_shell_is_a_sphere() {
    let cloud = generate(1000, 2.25, 2.25, &mut SmallRng::seed_from_u64(5)).unwrap();
    assert!(cloud.iter().all(|p| (p.length() - 2.25).abs() < 1e-4));
}

#[test]
fn test_polar_distribution_is_area_uniform() {
    let cloud = generate(SAMPLES, 1.5, 3.0, &mut SmallRng::seed_from_u64(2024)).unwrap();
    let chi2 = chi_squared(cloud.iter().map(cos_polar), -1.0, 1.0);
    assert!(chi2 < CHI2_CRITICAL_19, "cos(phi) not uniform: chi2 = {}", chi2);
}

#[test]
fn test_azimuth_distribution_is_uniform() {
    use std::f32::consts::PI;

    let cloud = generate(SAMPLES, 1.5, 3.0, &mut SmallRng::seed_from_u64(77)).unwrap();
    let chi2 = chi_squared(cloud.iter().map(|p| p.y.atan2(p.x)), -PI, PI);
    assert!(chi2 < CHI2_CRITICAL_19, "azimuth not uniform: chi2 = {}", chi2);
}

#[test]
fn test_bucket_test_detects_pole_clustering() {
    // Naive sampling with phi uniform in [0, pi] piles points up at the poles
    let mut rng = SmallRng::seed_from_u64(2024);
    let naive: Vec<Vec3> = (0..SAMPLES)
        .map(|_| {
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = rng.random::<f32>() * std::f32::consts::PI;
            Vec3::from_spherical(2.0, theta, phi)
        })
        .collect();
    let chi2 = chi_squared(naive.iter().map(cos_polar), -1.0, 1.0);
    assert!(chi2 > CHI2_CRITICAL_19 * 10.0, "naive sampling passed: chi2 = {}", chi2);
}

#[test]
fn test_invalid_requests_fail_fast() {
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(generate(10, 3.0, 1.5, &mut rng).is_err());
    assert!(generate(10, -0.5, 1.5, &mut rng).is_err());
    assert!(generate(10, 0.0, f32::INFINITY, &mut rng).is_err());
}

// ==================== Rotation ====================

#[test]
fn test_twenty_units_in_random_splits() {
    let mut rng = SmallRng::seed_from_u64(99);
    for _ in 0..10 {
        let mut state = RotationState::ZERO;
        let mut remaining = 20.0f64;
        while remaining > 0.0 {
            let step = (rng.random::<f64>() * 0.5).min(remaining);
            state = advance(state, step);
            remaining -= step;
        }
        assert!((state.x + 1.0).abs() < 1e-9, "x = {}", state.x);
        assert!((state.y + 0.8).abs() < 1e-9, "y = {}", state.y);
    }
}

#[test]
fn test_frame_rate_independence() {
    let rates = RotationRates::default();
    let mut at_30 = RotationState::ZERO;
    let mut at_144 = RotationState::ZERO;
    for _ in 0..(30 * 60) {
        at_30 = at_30.advance(1.0 / 30.0, &rates);
    }
    for _ in 0..(144 * 60) {
        at_144 = at_144.advance(1.0 / 144.0, &rates);
    }
    assert!((at_30.x - at_144.x).abs() < 1e-9);
    assert!((at_30.y - at_144.y).abs() < 1e-9);
    assert!((at_30.x + 3.0).abs() < 1e-9);
}

// ==================== Component ====================

#[test]
fn test_field_from_config_is_reproducible_with_seed() {
    let config = FieldConfig { count: 64, seed: Some(8), ..Default::default() };
    let seed = config.seed.unwrap();
    let a = ParticleField::new(&config, &mut SmallRng::seed_from_u64(seed)).unwrap();
    let b = ParticleField::new(&config, &mut SmallRng::seed_from_u64(seed)).unwrap();
    assert_eq!(a.points(), b.points());
}

#[test]
fn test_field_long_run_keeps_points_and_precision() {
    let config = FieldConfig { count: 32, ..Default::default() };
    let mut field = ParticleField::new(&config, &mut SmallRng::seed_from_u64(4)).unwrap();
    let points = field.points().to_vec();

    // One simulated day at 60 fps
    for _ in 0..(60 * 86_400) {
        field.update(1.0 / 60.0);
    }

    assert_eq!(field.points(), points.as_slice());
    let expected = RotationState::at(86_400.0, &field.rates());
    assert!((field.rotation().x - expected.x).abs() < 1e-4);
    assert!((field.rotation().y - expected.y).abs() < 1e-4);
}
