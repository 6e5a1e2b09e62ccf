//! The floating "Terms of Use" window.
//!
//! Its position is what gets shaken.  Geometry is kept in terminal cells;
//! the motion engine sees it in approximate pixels so the drive gain means
//! the same thing it would for a desktop window.

use ratatui::layout::Rect;

use crate::core::motion::WindowSource;
use crate::core::sampler::Vector;

/// Default window size in cells (not resizable).
pub const DEFAULT_WIDTH: u16 = 60;
pub const DEFAULT_HEIGHT: u16 = 20;

/// Fallback cell size when the terminal does not report pixel dimensions.
const FALLBACK_CELL_PX: (f64, f64) = (8.0, 16.0);

/// Pixel size of one terminal cell, as reported by the terminal.
pub fn cell_size_px() -> (f64, f64) {
    match crossterm::terminal::window_size() {
        Ok(size) if size.width > 0 && size.height > 0 && size.columns > 0 && size.rows > 0 => {
            let w = f64::from(size.width) / f64::from(size.columns);
            let h = f64::from(size.height) / f64::from(size.rows);
            tracing::debug!("terminal cell size {w:.1}x{h:.1}px");
            (w, h)
        }
        _ => FALLBACK_CELL_PX,
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialogWindow {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
    cell_px: (f64, f64),
}

impl DialogWindow {
    /// A window of the default size, centered in `area`.
    pub fn centered(area: Rect, cell_px: (f64, f64)) -> Self {
        let mut window = Self {
            x: 0,
            y: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            cell_px,
        };
        window.fit(area);
        window.x = area.x + area.width.saturating_sub(window.width) / 2;
        window.y = area.y + area.height.saturating_sub(window.height) / 2;
        window
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Move the top-left corner to `(x, y)`, keeping the window inside `area`.
    pub fn move_to(&mut self, x: i32, y: i32, area: Rect) {
        let max_x = i32::from(area.x) + i32::from(area.width.saturating_sub(self.width));
        let max_y = i32::from(area.y) + i32::from(area.height.saturating_sub(self.height));
        self.x = x.clamp(i32::from(area.x), max_x) as u16;
        self.y = y.clamp(i32::from(area.y), max_y) as u16;
    }

    pub fn move_by(&mut self, dx: i32, dy: i32, area: Rect) {
        self.move_to(i32::from(self.x) + dx, i32::from(self.y) + dy, area);
    }

    pub fn set_cell_px(&mut self, cell_px: (f64, f64)) {
        self.cell_px = cell_px;
    }

    /// Shrink to the terminal if needed and pull back inside it.
    pub fn fit(&mut self, area: Rect) {
        self.width = DEFAULT_WIDTH.min(area.width);
        self.height = DEFAULT_HEIGHT.min(area.height);
        self.move_to(i32::from(self.x), i32::from(self.y), area);
    }
}

impl WindowSource for DialogWindow {
    fn current_window_position(&self) -> Vector {
        Vector::new(
            f64::from(self.x) * self.cell_px.0,
            f64::from(self.y) * self.cell_px.1,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: (f64, f64) = (8.0, 16.0);

    #[test]
    fn test_centered_in_area() {
        let window = DialogWindow::centered(Rect::new(0, 0, 100, 40), CELL);
        assert_eq!(window.rect(), Rect::new(20, 10, 60, 20));
    }

    #[test]
    fn test_shrinks_to_small_terminal() {
        let window = DialogWindow::centered(Rect::new(0, 0, 40, 10), CELL);
        assert_eq!(window.rect(), Rect::new(0, 0, 40, 10));
    }

    #[test]
    fn test_move_is_clamped() {
        let area = Rect::new(0, 0, 100, 40);
        let mut window = DialogWindow::centered(area, CELL);
        window.move_by(-500, 3, area);
        assert_eq!((window.x, window.y), (0, 13));
        window.move_to(95, 39, area);
        assert_eq!((window.x, window.y), (40, 20));
    }

    #[test]
    fn test_position_in_pixels() {
        let window = DialogWindow::centered(Rect::new(0, 0, 100, 40), CELL);
        assert_eq!(window.current_window_position(), Vector::new(160.0, 160.0));
    }
}
