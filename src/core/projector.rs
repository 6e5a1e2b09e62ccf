//! Ratio to absolute scroll position.

/// Scrollable extent of a view, in the view's own units.
///
/// The usable span is `[lower, upper - page_size]`.  If that span is empty
/// (`upper - page_size < lower`) projection still returns a number, just not
/// a useful one; keeping the range sane is up to the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollRange {
    pub lower: f64,
    pub upper: f64,
    pub page_size: f64,
}

impl ScrollRange {
    pub fn new(lower: f64, upper: f64, page_size: f64) -> Self {
        Self {
            lower,
            upper,
            page_size,
        }
    }

    /// Largest position the view can scroll to.
    pub fn max_position(&self) -> f64 {
        self.upper - self.page_size
    }
}

/// Map a ratio in `[0, 1]` onto the usable span of `range`.
pub fn project(ratio: f64, range: ScrollRange) -> f64 {
    range.lower + (range.max_position() - range.lower) * ratio
}
