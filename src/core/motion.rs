//! Shake-to-scroll engine.
//!
//! Owns the rolling sampler, the forcing law, the integrator and the shared
//! [`MotionState`], and exposes the two periodic tasks as methods:
//!
//! - [`ShakeScroll::sample_tick`]: window position → velocity → acceleration.
//! - [`ShakeScroll::integrate_tick`]: acceleration → ratio → scroll position.
//!
//! Both take `&mut self`, so whichever task the scheduler runs has exclusive
//! access to the state for the duration of the call.  The two may fire in any
//! order and need not alternate 1:1.  Neither blocks and both are O(1).

use std::time::{Duration, Instant};

use super::drive::DriveModel;
use super::integrator::{Integrator, MotionState};
use super::projector::{project, ScrollRange};
use super::sampler::{PositionSampler, Vector};

/// Nominal period of both periodic tasks.  The integrator still measures
/// the real elapsed time on every tick.
pub const TICK_PERIOD: Duration = Duration::from_millis(10);

// ───────────────────────────────────────── boundary ──────────

/// Something whose on-screen position can be polled.
pub trait WindowSource {
    fn current_window_position(&self) -> Vector;
}

/// A scrollable view driven by the engine.
pub trait ScrollTarget {
    fn scroll_range(&self) -> ScrollRange;
    fn set_scroll_position(&mut self, value: f64);
}

// ───────────────────────────────────────── engine ────────────

#[derive(Debug)]
pub struct ShakeScroll {
    sampler: PositionSampler,
    drive: DriveModel,
    integrator: Integrator,
    state: MotionState,
}

impl ShakeScroll {
    /// Fresh engine at rest with the default drive constants.
    pub fn new(started: Instant) -> Self {
        Self::with_drive(DriveModel::default(), started)
    }

    pub fn with_drive(drive: DriveModel, started: Instant) -> Self {
        Self {
            sampler: PositionSampler::new(),
            drive,
            integrator: Integrator::new(started),
            state: MotionState::default(),
        }
    }

    /// Sampling task: poll the window and refresh the forcing term.
    ///
    /// The first call only records a sample.  Calls with an unusable interval
    /// leave the acceleration as it was.
    pub fn sample_tick(&mut self, window: &impl WindowSource, now: Instant) {
        let position = window.current_window_position();
        if let Some(velocity) = self.sampler.tick(position, now) {
            self.apply_velocity(velocity);
        }
    }

    /// Integration task: advance the ratio and push the projected position to
    /// `target`.  Returns the position that was set.
    pub fn integrate_tick(&mut self, target: &mut impl ScrollTarget, now: Instant) -> f64 {
        self.integrator.tick(&mut self.state, now);
        let position = project(self.state.ratio, target.scroll_range());
        target.set_scroll_position(position);
        position
    }

    /// Forget the last window sample.  The next sampling tick is a warm-up
    /// again, so a jump the user did not make (the host relocating the
    /// window) never reads as a shake.
    pub fn reset_sampler(&mut self) {
        self.sampler = PositionSampler::new();
    }

    /// Feed a velocity straight into the forcing law.
    pub fn apply_velocity(&mut self, velocity: Vector) {
        self.state.acceleration = self.drive.drive(velocity, self.state.ratio);
    }

    pub fn state(&self) -> MotionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::integrator::integrate;
    use std::cell::Cell;

    const TICK: Duration = TICK_PERIOD;

    struct FakeWindow {
        pos: Cell<Vector>,
    }

    impl FakeWindow {
        fn at(x: f64, y: f64) -> Self {
            Self {
                pos: Cell::new(Vector::new(x, y)),
            }
        }

        fn move_to(&self, x: f64, y: f64) {
            self.pos.set(Vector::new(x, y));
        }
    }

    impl WindowSource for FakeWindow {
        fn current_window_position(&self) -> Vector {
            self.pos.get()
        }
    }

    struct FakeView {
        range: ScrollRange,
        value: Option<f64>,
    }

    impl ScrollTarget for FakeView {
        fn scroll_range(&self) -> ScrollRange {
            self.range
        }

        fn set_scroll_position(&mut self, value: f64) {
            self.value = Some(value);
        }
    }

    fn view() -> FakeView {
        FakeView {
            range: ScrollRange::new(0.0, 100.0, 20.0),
            value: None,
        }
    }

    #[test]
    fn test_warm_up_leaves_acceleration_untouched() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(500.0, 300.0);

        engine.sample_tick(&window, t0 + TICK);
        assert_eq!(engine.state(), MotionState::default());
    }

    #[test]
    fn test_shaking_scrolls_down() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(500.0, 300.0);
        let mut target = view();

        let mut now = t0;
        for i in 0..200 {
            now += TICK;
            // 40 px back and forth every tick: 4000 px/s.
            let x = if i % 2 == 0 { 540.0 } else { 500.0 };
            window.move_to(x, 300.0);
            engine.sample_tick(&window, now);
            engine.integrate_tick(&mut target, now);
        }

        assert!(engine.state().ratio > 0.5, "ratio {}", engine.state().ratio);
        let value = target.value.unwrap();
        assert!((value - engine.state().ratio * 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_settles_back_to_top_after_shaking() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(0.0, 0.0);
        let mut target = view();

        let mut now = t0;
        for i in 0..100 {
            now += TICK;
            window.move_to(if i % 2 == 0 { 30.0 } else { 0.0 }, 0.0);
            engine.sample_tick(&window, now);
            engine.integrate_tick(&mut target, now);
        }
        assert!(engine.state().ratio > 0.0);

        // Window held still.  Once the leftover speed is spent, the ratio
        // only goes down, and stays at zero once it arrives.
        let mut peaked = false;
        let mut prev = engine.state().ratio;
        for _ in 0..1_000 {
            if engine.state().speed <= 0.0 {
                peaked = true;
            }
            now += TICK;
            engine.sample_tick(&window, now);
            engine.integrate_tick(&mut target, now);
            let ratio = engine.state().ratio;
            if peaked {
                assert!(ratio <= prev, "ratio rose from {prev} to {ratio}");
            }
            prev = ratio;
        }
        assert_eq!(engine.state().ratio, 0.0);
        assert_eq!(engine.state().speed, 0.0);
        assert_eq!(target.value, Some(0.0));
    }

    #[test]
    fn test_tasks_need_not_alternate() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(0.0, 0.0);
        let mut target = view();

        let mut now = t0;
        for i in 0..300 {
            now += TICK;
            window.move_to(if i % 2 == 0 { 25.0 } else { 0.0 }, 25.0);
            // Sampler fires twice as often as the integrator.
            engine.sample_tick(&window, now);
            if i % 2 == 0 {
                engine.integrate_tick(&mut target, now);
            }
            let ratio = engine.state().ratio;
            assert!((0.0..=1.0).contains(&ratio));
        }
    }

    #[test]
    fn test_same_instant_ticks_do_not_poison_state() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(0.0, 0.0);
        let mut target = view();

        engine.sample_tick(&window, t0);
        window.move_to(50.0, 0.0);
        engine.sample_tick(&window, t0);
        engine.integrate_tick(&mut target, t0);

        let state = engine.state();
        assert!(state.acceleration.is_finite());
        assert!(state.speed.is_finite());
        assert!(state.ratio.is_finite());
        assert_eq!(target.value, Some(0.0));
    }

    #[test]
    fn test_reset_sampler_swallows_a_jump() {
        let t0 = Instant::now();
        let mut engine = ShakeScroll::new(t0);
        let window = FakeWindow::at(0.0, 0.0);

        engine.sample_tick(&window, t0 + TICK);
        engine.reset_sampler();
        window.move_to(800.0, 600.0);
        engine.sample_tick(&window, t0 + TICK * 2);
        assert_eq!(engine.state(), MotionState::default());

        // Measuring resumes from the new position.
        window.move_to(810.0, 600.0);
        engine.sample_tick(&window, t0 + TICK * 3);
        assert!((engine.state().acceleration - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_drive_constants_change_the_response() {
        let t0 = Instant::now();
        let mut stock = ShakeScroll::new(t0);
        let mut stiff = ShakeScroll::with_drive(DriveModel::new(1e-4, 4.0), t0);
        let window = FakeWindow::at(0.0, 0.0);
        let mut stock_view = view();
        let mut stiff_view = view();

        let mut now = t0;
        for i in 0..100 {
            now += TICK;
            window.move_to(if i % 2 == 0 { 40.0 } else { 0.0 }, 0.0);
            stock.sample_tick(&window, now);
            stiff.sample_tick(&window, now);
            stock.integrate_tick(&mut stock_view, now);
            stiff.integrate_tick(&mut stiff_view, now);
        }

        // A tenth of the gain against four times the spring oscillates
        // around 0.1 and never gets far.
        assert!(stiff.state().ratio < stock.state().ratio);
        assert!(stiff.state().ratio < 0.25, "ratio {}", stiff.state().ratio);
        assert!(stock.state().ratio > 0.5, "ratio {}", stock.state().ratio);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let inputs: Vec<(Vector, f64)> = (0..500)
            .map(|i| {
                let s = (i % 7) as f64 * 120.0;
                (Vector::new(s, -s / 2.0), 0.008 + (i % 3) as f64 * 0.002)
            })
            .collect();

        let run = || {
            let drive = DriveModel::default();
            let mut state = MotionState::default();
            let mut trace = Vec::new();
            for &(v, dt) in &inputs {
                state.acceleration = drive.drive(v, state.ratio);
                state = integrate(state, dt);
                trace.push((
                    state.acceleration.to_bits(),
                    state.speed.to_bits(),
                    state.ratio.to_bits(),
                ));
            }
            trace
        };

        assert_eq!(run(), run());
    }
}
