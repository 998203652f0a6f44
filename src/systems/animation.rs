//! Frame timing and field animation
//!
//! Measures the wall-clock delta between redraws and feeds it to the
//! particle field. The field itself never looks at the clock.

use std::time::Instant;
use starfield_core::ParticleField;

/// Drives a [`ParticleField`] from frame-to-frame elapsed time
pub struct AnimationSystem {
    last_frame: Instant,
    max_frame_delta: Option<f64>,
}

impl AnimationSystem {
    /// Create an animation system whose clock starts now
    pub fn new(max_frame_delta: Option<f64>) -> Self {
        Self::starting_at(Instant::now(), max_frame_delta)
    }

    /// Create an animation system whose clock starts at `start`
    pub fn starting_at(start: Instant, max_frame_delta: Option<f64>) -> Self {
        Self {
            last_frame: start,
            max_frame_delta,
        }
    }

    /// Seconds since the previous tick, optionally capped
    ///
    /// An `now` earlier than the last tick yields zero.
    pub fn tick(&mut self, now: Instant) -> f64 {
        let raw_dt = now.saturating_duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        match self.max_frame_delta {
            Some(max) => raw_dt.min(max),
            None => raw_dt,
        }
    }

    /// Run one animation frame at `now`, returning the delta applied
    pub fn update_at(&mut self, field: &mut ParticleField, now: Instant) -> f64 {
        let dt = self.tick(now);
        field.update(dt);
        dt
    }

    /// Run one animation frame using the current time
    pub fn update(&mut self, field: &mut ParticleField) -> f64 {
        self.update_at(field, Instant::now())
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new(None)
    }
}
