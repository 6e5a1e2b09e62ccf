//! Central application state.
//!
//! All mutable state lives here so that the rest of the app can be pure
//! functions over `&AppState` (rendering) or `&mut AppState` (event handling
//! and the periodic ticks).

use std::time::Instant;

use ratatui::layout::Rect;

use crate::config::AppConfig;
use crate::core::motion::ShakeScroll;
use crate::ui::layout::WindowLayout;

use super::terms::TermsView;
use super::window::DialogWindow;

/// Which view / overlay is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Terms,
    /// "Shake the window to scroll down…" message.
    Instruction,
    /// Shown after Continue.
    Agreed,
}

/// Top-level application state.
pub struct AppState {
    /// User-configurable keybindings.
    pub config: AppConfig,
    /// Full terminal area minus the status bar.
    pub desktop: Rect,
    /// The floating window that gets shaken.
    pub window: DialogWindow,
    /// Scrollable content inside the window.
    pub terms: TermsView,
    /// Shake-to-scroll engine driving `terms`.
    pub motion: ShakeScroll,
    /// Whether the "I have read and accept" checkbox is ticked.
    pub accepted: bool,
    /// Which view / overlay is currently shown.
    pub active_view: ActiveView,
    /// Grab point inside the window while its title bar is being dragged.
    pub drag_anchor: Option<(u16, u16)>,
    /// Controls the main event loop.
    pub should_quit: bool,
    /// Set whenever something visible changed since the last draw.
    pub needs_redraw: bool,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        desktop: Rect,
        cell_px: (f64, f64),
        body: String,
        started: Instant,
    ) -> Self {
        let mut state = Self {
            config,
            desktop,
            window: DialogWindow::centered(desktop, cell_px),
            terms: TermsView::new(body),
            motion: ShakeScroll::new(started),
            accepted: false,
            active_view: ActiveView::default(),
            drag_anchor: None,
            should_quit: false,
            needs_redraw: true,
        };
        state.sync_viewport();
        state
    }

    /// The Continue button only works once the terms are accepted.
    pub fn can_continue(&self) -> bool {
        self.accepted
    }

    /// Terminal was resized: keep the window on screen.
    ///
    /// Both the clamp in `fit` and a new cell size can move the window's
    /// reported position without the user touching it, so the sampler starts
    /// over from the new position.
    pub fn resize(&mut self, desktop: Rect, cell_px: (f64, f64)) {
        self.desktop = desktop;
        self.window.set_cell_px(cell_px);
        self.window.fit(desktop);
        self.motion.reset_sampler();
        self.sync_viewport();
        self.needs_redraw = true;
    }

    /// Match the content wrapping to the window's current size.
    fn sync_viewport(&mut self) {
        let content = WindowLayout::from_rect(self.window.rect()).content;
        self.terms.set_viewport(content.width, content.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::motion::{WindowSource, TICK_PERIOD};
    use crate::core::sampler::Vector;

    const CELL: (f64, f64) = (8.0, 16.0);

    fn state(started: Instant) -> AppState {
        AppState::new(
            AppConfig::default(),
            Rect::new(0, 0, 120, 40),
            CELL,
            "some terms".into(),
            started,
        )
    }

    #[test]
    fn test_resize_does_not_read_as_a_shake() {
        let t0 = Instant::now();
        let mut state = state(t0);
        state.motion.sample_tick(&state.window, t0 + TICK_PERIOD);

        // Shrinking the terminal pulls the window from (30, 10) to (0, 0).
        state.resize(Rect::new(0, 0, 40, 12), CELL);
        assert_eq!((state.window.x, state.window.y), (0, 0));
        state.motion.sample_tick(&state.window, t0 + TICK_PERIOD * 2);

        assert_eq!(state.motion.state().acceleration, 0.0);
    }

    #[test]
    fn test_resize_picks_up_new_cell_size() {
        let t0 = Instant::now();
        let mut state = state(t0);
        state.resize(Rect::new(0, 0, 120, 40), (10.0, 20.0));
        assert_eq!(
            state.window.current_window_position(),
            Vector::new(300.0, 200.0)
        );
    }
}
