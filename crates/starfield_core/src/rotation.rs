//! Time-driven rotation of the point group
//!
//! Angles only ever change by `delta_time * rate`, so the orientation after
//! a total elapsed time `T` is `angle(0) + T * rate` however the time was
//! split into frames. Angles are kept in `f64` and grow without bound;
//! [`RotationState::wrapped`] reduces them for display.

use std::f64::consts::TAU;

use serde::{Serialize, Deserialize};
use starfield_math::{mat4, Mat4};

use crate::FieldError;

/// Angular velocity about the X and Y axes, in radians per unit time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RotationRates {
    pub x: f64,
    pub y: f64,
}

impl RotationRates {
    /// The backdrop's observed rates: -1/20 rad/s about X, -1/25 rad/s about Y
    pub const OBSERVED: Self = Self {
        x: -1.0 / 20.0,
        y: -1.0 / 25.0,
    };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for RotationRates {
    fn default() -> Self {
        Self::OBSERVED
    }
}

/// Accumulated rotation angles (radians) about the X and Y axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RotationState {
    pub x: f64,
    pub y: f64,
}

impl RotationState {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Closed-form state after `elapsed` time from zero
    pub fn at(elapsed: f64, rates: &RotationRates) -> Self {
        Self::ZERO.advance(elapsed, rates)
    }

    /// Advance by `delta_time` at the given rates
    ///
    /// Negative or NaN deltas are clamped to zero, leaving the state
    /// unchanged. Use [`try_advance`](Self::try_advance) to reject them instead.
    #[must_use]
    pub fn advance(self, delta_time: f64, rates: &RotationRates) -> Self {
        // NaN fails the comparison and is clamped too
        let dt = if delta_time > 0.0 { delta_time } else { 0.0 };
        Self {
            x: self.x + dt * rates.x,
            y: self.y + dt * rates.y,
        }
    }

    /// Like [`advance`](Self::advance) but fails on a negative or NaN delta
    pub fn try_advance(self, delta_time: f64, rates: &RotationRates) -> Result<Self, FieldError> {
        if delta_time.is_nan() || delta_time < 0.0 {
            return Err(FieldError::NegativeDelta(delta_time));
        }
        Ok(self.advance(delta_time, rates))
    }

    /// Same orientation with both angles reduced to `[0, 2π)`
    pub fn wrapped(self) -> Self {
        Self {
            x: self.x.rem_euclid(TAU),
            y: self.y.rem_euclid(TAU),
        }
    }

    /// Rotation matrix `Rx(x) * Ry(y)` (X applied last, matching XYZ Euler order)
    pub fn to_matrix(&self) -> Mat4 {
        let w = self.wrapped();
        mat4::mul(mat4::rotation_x(w.x as f32), mat4::rotation_y(w.y as f32))
    }
}

/// Advance `state` by `delta_time` at the observed default rates
///
/// This is the plain per-frame transition; see [`RotationState::advance`]
/// for the clamping rule.
#[must_use]
pub fn advance(state: RotationState, delta_time: f64) -> RotationState {
    state.advance(delta_time, &RotationRates::OBSERVED)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_zero_delta_is_noop() {
        let s = RotationState::new(0.3, -1.2);
        assert_eq!(advance(s, 0.0), s);
    }

    #[test]
    fn test_single_step() {
        let s = advance(RotationState::ZERO, 1.0);
        assert!(approx_eq(s.x, -0.05));
        assert!(approx_eq(s.y, -0.04));
    }

    #[test]
    fn test_twenty_units_in_one_step() {
        let s = advance(RotationState::ZERO, 20.0);
        assert!(approx_eq(s.x, -1.0));
        assert!(approx_eq(s.y, -0.8));
    }

    #[test]
    fn test_split_intervals_are_additive() {
        let s = RotationState::new(0.1, 0.2);
        for (t1, t2) in [(0.0, 1.0), (0.016, 0.017), (3.5, 0.25), (100.0, 1e-3)] {
            let split = advance(advance(s, t1), t2);
            let whole = advance(s, t1 + t2);
            assert!(approx_eq(split.x, whole.x), "x: {} vs {}", split.x, whole.x);
            assert!(approx_eq(split.y, whole.y), "y: {} vs {}", split.y, whole.y);
        }
    }

    #[test]
    fn test_negative_delta_clamped() {
        let s = RotationState::new(1.0, 2.0);
        assert_eq!(advance(s, -0.5), s);
        assert_eq!(advance(s, f64::NAN), s);
    }

    #[test]
    fn test_try_advance_rejects_negative() {
        let rates = RotationRates::default();
        assert_eq!(
            RotationState::ZERO.try_advance(-1.0, &rates),
            Err(FieldError::NegativeDelta(-1.0))
        );
        assert!(RotationState::ZERO.try_advance(f64::NAN, &rates).is_err());
        assert_eq!(
            RotationState::ZERO.try_advance(2.0, &rates),
            Ok(advance(RotationState::ZERO, 2.0))
        );
    }

    #[test]
    fn test_custom_rates() {
        let rates = RotationRates::new(1.0, 0.0);
        let s = RotationState::ZERO.advance(0.5, &rates);
        assert_eq!(s, RotationState::new(0.5, 0.0));
    }

    #[test]
    fn test_closed_form_matches_steps() {
        let rates = RotationRates::default();
        let mut s = RotationState::ZERO;
        for _ in 0..600 {
            s = s.advance(1.0 / 60.0, &rates);
        }
        let closed = RotationState::at(10.0, &rates);
        assert!((s.x - closed.x).abs() < 1e-9);
        assert!((s.y - closed.y).abs() < 1e-9);
    }

    #[test]
    fn test_wrapped_range() {
        let w = RotationState::new(-1.0, 7.0).wrapped();
        assert!(w.x >= 0.0 && w.x < TAU);
        assert!(w.y >= 0.0 && w.y < TAU);
        assert!(approx_eq(w.x, TAU - 1.0));
        assert!(approx_eq(w.y, 7.0 - TAU));
    }

    #[test]
    fn test_matrix_ignores_full_turns() {
        let a = RotationState::new(0.4, -0.9).to_matrix();
        let b = RotationState::new(0.4 + 3.0 * TAU, -0.9 - 5.0 * TAU).to_matrix();
        for i in 0..4 {
            for j in 0..4 {
                assert!((a[i][j] - b[i][j]).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_zero_state_matrix_is_identity() {
        assert_eq!(RotationState::ZERO.to_matrix(), mat4::IDENTITY);
    }
}
