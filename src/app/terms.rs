//! Scrollable content of the window: heading, wrapped document body and,
//! at the very end, the confirmation row.
//!
//! The view has no scrollbar of its own.  Its offset is written only by the
//! motion engine through [`ScrollTarget`], so the confirmation row comes into
//! view only after the window has been shaken enough.

use crate::core::motion::ScrollTarget;
use crate::core::projector::ScrollRange;

use super::document::{self, HEADING};

/// One row of scrollable content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentLine {
    Heading(String),
    Text(String),
    Confirmation,
}

#[derive(Debug)]
pub struct TermsView {
    body: String,
    lines: Vec<ContentLine>,
    width: u16,
    visible_rows: u16,
    /// Absolute position last set by the projector, in rows.
    position: f64,
}

impl TermsView {
    pub fn new(body: String) -> Self {
        Self {
            body,
            lines: Vec::new(),
            width: 0,
            visible_rows: 0,
            position: 0.0,
        }
    }

    /// Re-wrap for a viewport of `width` columns and `rows` rows.  Cheap when
    /// nothing changed.
    pub fn set_viewport(&mut self, width: u16, rows: u16) {
        self.visible_rows = rows;
        if width == self.width && !self.lines.is_empty() {
            return;
        }
        self.width = width;

        let width = usize::from(width);
        let mut lines: Vec<ContentLine> = document::wrap(HEADING, width)
            .into_iter()
            .map(ContentLine::Heading)
            .collect();
        lines.push(ContentLine::Text(String::new()));
        lines.extend(
            document::wrap(&self.body, width)
                .into_iter()
                .map(ContentLine::Text),
        );
        lines.push(ContentLine::Text(String::new()));
        lines.push(ContentLine::Confirmation);

        tracing::debug!("terms wrapped to {} rows at width {}", lines.len(), self.width);
        self.lines = lines;
    }

    pub fn lines(&self) -> &[ContentLine] {
        &self.lines
    }

    /// First visible row, rounded from the projected position and kept in
    /// the scrollable span.
    pub fn row_offset(&self) -> usize {
        let max = self.lines.len().saturating_sub(usize::from(self.visible_rows));
        if !self.position.is_finite() || self.position <= 0.0 {
            return 0;
        }
        (self.position.round() as usize).min(max)
    }

    /// Row of the confirmation line relative to the top of the viewport, if
    /// it is currently visible.
    pub fn confirmation_row(&self) -> Option<u16> {
        let index = self
            .lines
            .iter()
            .position(|l| *l == ContentLine::Confirmation)?;
        let offset = self.row_offset();
        if index < offset {
            return None;
        }
        let row = index - offset;
        if row < usize::from(self.visible_rows) {
            u16::try_from(row).ok()
        } else {
            None
        }
    }
}

impl ScrollTarget for TermsView {
    fn scroll_range(&self) -> ScrollRange {
        ScrollRange::new(0.0, self.lines.len() as f64, f64::from(self.visible_rows))
    }

    fn set_scroll_position(&mut self, value: f64) {
        self.position = value;
    }
}
