//! Semi-implicit Euler integration of the scroll ratio.

use std::time::Instant;

use super::timing::elapsed_secs;

/// Live simulation state shared by the sampling and integration tasks.
///
/// `ratio` stays within `[0, 1]`; whenever a step clamps it, `speed` is
/// zeroed in the same step.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    /// Forcing term, written by the sampling task.
    pub acceleration: f64,
    /// Rate of change of `ratio`, per second.
    pub speed: f64,
    /// Fractional scroll position (0 = top, 1 = fully scrolled).
    pub ratio: f64,
}

/// Advance `state` by `dt` seconds.
///
/// The ratio moves with the speed from the previous step before the speed
/// picks up the new acceleration.  Crossing either bound snaps the ratio to
/// the bound and brings it to rest (no bounce).
pub fn integrate(state: MotionState, dt: f64) -> MotionState {
    let mut next = state;
    next.ratio += state.speed * dt;
    next.speed += state.acceleration * dt;

    if next.ratio < 0.0 {
        next.ratio = 0.0;
        next.speed = 0.0;
    }
    if next.ratio > 1.0 {
        next.ratio = 1.0;
        next.speed = 0.0;
    }
    next
}

/// Integration task state: remembers when it last ran so each step uses the
/// measured interval rather than the nominal period.
#[derive(Debug)]
pub struct Integrator {
    last_tick: Instant,
}

impl Integrator {
    pub fn new(started: Instant) -> Self {
        Self { last_tick: started }
    }

    /// Step `state` to `now`.  Returns `false` (leaving everything untouched)
    /// when the interval since the previous step is degenerate.
    pub fn tick(&mut self, state: &mut MotionState, now: Instant) -> bool {
        let dt = match elapsed_secs(self.last_tick, now) {
            Ok(dt) => dt,
            Err(err) => {
                tracing::trace!("integrator tick skipped: {err}");
                return false;
            }
        };
        self.last_tick = now;
        *state = integrate(*state, dt);
        true
    }
}
