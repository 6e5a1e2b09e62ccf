//! Layout helpers: split the terminal and the floating window into regions.
//!
//! Shared by the renderer and the mouse handler so hit-testing always agrees
//! with what is on screen.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Label of the accept checkbox (without the `[x] ` box).
pub const CHECKBOX_LABEL: &str = "I have read and accept the Terms of Use";
/// Label of the continue button, brackets included.
pub const BUTTON_LABEL: &str = "[ Continue ]";

/// Primary screen layout: a desktop the window floats on, plus a status bar.
pub struct AppLayout {
    pub desktop_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Compute the layout from the full terminal area.
    pub fn from_area(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // desktop (takes all remaining space)
                Constraint::Length(1), // status bar
            ])
            .split(area);

        Self {
            desktop_area: chunks[0],
            status_area: chunks[1],
        }
    }
}

/// Regions inside the floating window.
pub struct WindowLayout {
    pub outer: Rect,
    /// Top border row; dragging here moves the window.
    pub title_bar: Rect,
    /// Scrollable content, inside the border with a one-column margin.
    pub content: Rect,
}

impl WindowLayout {
    pub fn from_rect(outer: Rect) -> Self {
        let title_bar = Rect::new(outer.x, outer.y, outer.width, outer.height.min(1));
        let content = Rect::new(
            outer.x.saturating_add(2),
            outer.y.saturating_add(1),
            outer.width.saturating_sub(4),
            outer.height.saturating_sub(2),
        );
        Self {
            outer,
            title_bar,
            content,
        }
    }

    /// Checkbox and button hit boxes when the confirmation line is shown on
    /// content row `row`.
    pub fn confirmation_areas(&self, row: u16) -> (Rect, Rect) {
        let y = self.content.y + row;
        let button_w = (BUTTON_LABEL.chars().count() as u16).min(self.content.width);
        let button = Rect::new(
            self.content.x + self.content.width - button_w,
            y,
            button_w,
            1,
        );
        let checkbox_w = (CHECKBOX_LABEL.chars().count() as u16 + 4)
            .min(self.content.width.saturating_sub(button_w + 1));
        let checkbox = Rect::new(self.content.x, y, checkbox_w, 1);
        (checkbox, button)
    }
}

/// Create a centered rectangle with fixed dimensions, clamped to the available area.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

pub fn point_in_rect(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_regions() {
        let layout = WindowLayout::from_rect(Rect::new(10, 5, 60, 20));
        assert_eq!(layout.title_bar, Rect::new(10, 5, 60, 1));
        assert_eq!(layout.content, Rect::new(12, 6, 56, 18));
    }

    #[test]
    fn test_confirmation_areas_do_not_overlap() {
        let layout = WindowLayout::from_rect(Rect::new(0, 0, 60, 20));
        let (checkbox, button) = layout.confirmation_areas(3);
        assert_eq!(button, Rect::new(46, 4, 12, 1));
        assert_eq!(checkbox.y, 4);
        assert!(checkbox.x + checkbox.width <= button.x);
    }

    #[test]
    fn test_status_bar_is_last_row() {
        let layout = AppLayout::from_area(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.status_area, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.desktop_area.height, 23);
    }
}
