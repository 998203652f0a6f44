//! Field error types
//!
//! Precondition violations for point generation and rotation updates.

use std::fmt;

/// Error type for particle field operations
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Radius range is empty or negative (`min < 0` or `max < min`)
    InvalidRadius { min: f32, max: f32 },
    /// A radius bound is NaN or infinite
    NonFiniteRadius { min: f32, max: f32 },
    /// Elapsed time passed to a rejecting update was negative or NaN
    NegativeDelta(f64),
    /// A rotation rate or the tilt angle is NaN or infinite
    NonFiniteRotation { name: &'static str, value: f64 },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::InvalidRadius { min, max } => write!(
                f,
                "Invalid radius range [{}, {}]: requires 0 <= min <= max",
                min, max
            ),
            FieldError::NonFiniteRadius { min, max } => {
                write!(f, "Radius range [{}, {}] is not finite", min, max)
            }
            FieldError::NegativeDelta(dt) => {
                write!(f, "Elapsed time must be non-negative, got {}", dt)
            }
            FieldError::NonFiniteRotation { name, value } => {
                write!(f, "Rotation parameter {} must be finite, got {}", name, value)
            }
        }
    }
}

impl std::error::Error for FieldError {}
