//! Shake energy to forcing term.
//!
//! ```text
//! acceleration = gain * |velocity| - restoring * ratio
//! ```
//!
//! Fast window motion in any direction pushes the ratio up; the linear
//! restoring term pulls it back toward zero once the shaking stops.

use super::sampler::Vector;

/// Default drive gain (λ): acceleration per unit of window speed.
pub const DEFAULT_GAIN: f64 = 1e-3;

/// Default restoring constant (k): spring pulling the ratio back to zero.
pub const DEFAULT_RESTORING: f64 = 1.0;

/// Leaky-integrator forcing law.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DriveModel {
    /// Drive gain (λ).
    pub gain: f64,
    /// Restoring constant (k).
    pub restoring: f64,
}

impl Default for DriveModel {
    fn default() -> Self {
        Self::new(DEFAULT_GAIN, DEFAULT_RESTORING)
    }
}

impl DriveModel {
    pub fn new(gain: f64, restoring: f64) -> Self {
        Self { gain, restoring }
    }

    /// Forcing term for the given window velocity and current ratio.
    ///
    /// Only the speed magnitude matters, so a diagonal shake and a
    /// single-axis shake of the same speed drive identically.
    pub fn drive(&self, velocity: Vector, ratio: f64) -> f64 {
        self.gain * velocity.length() - self.restoring * ratio
    }
}
