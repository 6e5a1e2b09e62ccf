//! Window position sampling and finite-difference velocity.
//!
//! The sampler keeps exactly one rolling [`PositionSample`].  Each tick the
//! current window position is compared against it to produce a velocity,
//! then it is replaced by the new sample.

use std::ops::{Div, Sub};
use std::time::Instant;

use super::timing::{elapsed_secs, TimingError};

// ───────────────────────────────────────── vector ────────────

/// A 2D quantity: a position, a position delta, or a velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean length.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Div<f64> for Vector {
    type Output = Vector;

    fn div(self, rhs: f64) -> Vector {
        Vector::new(self.x / rhs, self.y / rhs)
    }
}

// ───────────────────────────────────────── samples ───────────

/// Immutable snapshot of where the window was, and when.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    pub position: Vector,
    pub timestamp: Instant,
}

/// Capture a sample of `position` at `now`.
pub fn sample(position: Vector, now: Instant) -> PositionSample {
    PositionSample {
        position,
        timestamp: now,
    }
}

/// Velocity from `previous` to `current`, in position units per second.
pub fn velocity(
    previous: &PositionSample,
    current: Vector,
    now: Instant,
) -> Result<Vector, TimingError> {
    let dt = elapsed_secs(previous.timestamp, now)?;
    Ok((current - previous.position) / dt)
}

// ───────────────────────────────────────── sampler ───────────

/// Rolling sampler state owned by the sampling task.
#[derive(Debug, Default)]
pub struct PositionSampler {
    previous: Option<PositionSample>,
}

impl PositionSampler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `position` at `now` and return the velocity since the last
    /// tick.
    ///
    /// Returns `None` on the warm-up tick (no previous sample yet), and when
    /// the interval or the position is unusable.  In those cases the previous
    /// sample is kept so the next tick measures across both intervals.
    pub fn tick(&mut self, position: Vector, now: Instant) -> Option<Vector> {
        if !position.is_finite() {
            tracing::trace!("sampler tick skipped: non-finite position");
            return None;
        }

        let Some(previous) = self.previous else {
            tracing::debug!("sampler warm-up at ({}, {})", position.x, position.y);
            self.previous = Some(sample(position, now));
            return None;
        };

        let v = match velocity(&previous, position, now) {
            Ok(v) => v,
            Err(err) => {
                tracing::trace!("sampler tick skipped: {err}");
                return None;
            }
        };
        self.previous = Some(sample(position, now));

        if !v.is_finite() {
            tracing::trace!("sampler tick skipped: non-finite velocity");
            return None;
        }
        Some(v)
    }
}
