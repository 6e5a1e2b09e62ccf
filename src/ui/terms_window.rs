//! Renders the floating Terms of Use window: border with title bar, the
//! scrolled content, and the confirmation row when it is in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Widget},
};

use crate::app::document::HEADING;
use crate::app::state::AppState;
use crate::app::terms::ContentLine;

use super::layout::{WindowLayout, BUTTON_LABEL, CHECKBOX_LABEL};
use super::theme::Theme;

pub struct TermsWindow<'a> {
    pub state: &'a AppState,
}

impl<'a> Widget for TermsWindow<'a> {
    fn render(self, _area: Rect, buf: &mut Buffer) {
        let state = self.state;
        let layout = WindowLayout::from_rect(state.window.rect());
        Clear.render(layout.outer, buf);

        Block::default()
            .title(format!(" {HEADING} "))
            .title_style(Theme::title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style(state.drag_anchor.is_some()))
            .render(layout.outer, buf);

        let content = layout.content;
        let offset = state.terms.row_offset();
        let rows = state
            .terms
            .lines()
            .iter()
            .skip(offset)
            .take(usize::from(content.height));

        for (i, line) in rows.enumerate() {
            let y = content.y + i as u16;
            match line {
                ContentLine::Heading(text) => {
                    buf.set_line(
                        content.x,
                        y,
                        &Line::from(Span::styled(text.as_str(), Theme::heading_style())),
                        content.width,
                    );
                }
                ContentLine::Text(text) => {
                    buf.set_line(
                        content.x,
                        y,
                        &Line::from(Span::styled(text.as_str(), Theme::text_style())),
                        content.width,
                    );
                }
                ContentLine::Confirmation => {
                    let (checkbox, button) = layout.confirmation_areas(i as u16);
                    let mark = if state.accepted { "[x] " } else { "[ ] " };
                    buf.set_line(
                        checkbox.x,
                        checkbox.y,
                        &Line::from(Span::styled(
                            format!("{mark}{CHECKBOX_LABEL}"),
                            Theme::checkbox_style(state.accepted),
                        )),
                        checkbox.width,
                    );
                    buf.set_line(
                        button.x,
                        button.y,
                        &Line::from(Span::styled(
                            BUTTON_LABEL,
                            Theme::button_style(state.can_continue()),
                        )),
                        button.width,
                    );
                }
            }
        }
    }
}
