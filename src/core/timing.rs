//! Elapsed-time measurement between ticks.
//!
//! Both periodic tasks divide or multiply by the time since their previous
//! run.  A zero (or otherwise unusable) interval would push `NaN`/`Inf` into
//! the motion state, and once `ratio` is `NaN` neither clamp ever fires again.
//! Every interval therefore goes through [`elapsed_secs`], and callers skip
//! the tick when it fails.

use std::time::Instant;

use thiserror::Error;

/// Why an interval could not be used as a time step.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TimingError {
    /// `now` is not after `since` (identical timestamps or a clock anomaly).
    #[error("non-positive time step ({secs}s)")]
    NonPositive { secs: f64 },
    /// The interval converted to a non-finite number of seconds.
    #[error("non-finite time step")]
    NonFinite,
}

/// Seconds elapsed from `since` to `now`, rejecting degenerate intervals.
///
/// `Instant` is monotonic, so a backwards step shows up as zero here rather
/// than as a negative value; both cases are reported as
/// [`TimingError::NonPositive`].
pub fn elapsed_secs(since: Instant, now: Instant) -> Result<f64, TimingError> {
    let secs = now.saturating_duration_since(since).as_secs_f64();
    if !secs.is_finite() {
        return Err(TimingError::NonFinite);
    }
    if secs <= 0.0 {
        return Err(TimingError::NonPositive { secs });
    }
    Ok(secs)
}
