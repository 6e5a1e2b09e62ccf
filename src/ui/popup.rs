//! Modal message popups ("Instruction", "Terms agreed").

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::app::document::wrap;

use super::layout::centered_fixed;
use super::theme::Theme;

pub const INSTRUCTION_TITLE: &str = "Instruction";
pub const INSTRUCTION_TEXT: &str = "Shake the window to scroll down. If you agree to the Terms, \
                                    check the checkbox and press Continue.";
pub const AGREED_TITLE: &str = "Terms agreed";
pub const AGREED_TEXT: &str = "Now you can use our application!";

const POPUP_WIDTH: u16 = 44;

/// A centered message box with an OK hint.
pub struct MessagePopup<'a> {
    pub title: &'a str,
    pub message: &'a str,
}

impl<'a> Widget for MessagePopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_width = usize::from(POPUP_WIDTH.saturating_sub(4));
        let body = wrap(self.message, text_width);
        // body + blank + hint + blank above + 2 border
        let height = body.len() as u16 + 5;
        let popup = centered_fixed(POPUP_WIDTH, height, area);
        Clear.render(popup, buf);

        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_style(Theme::popup_title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Theme::border_style(false));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines = vec![Line::raw("")];
        lines.extend(
            body.into_iter()
                .map(|l| Line::from(Span::styled(format!(" {l}"), Theme::text_style()))),
        );
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            " Enter/Esc/click: OK",
            Theme::hint_style(),
        )));

        Paragraph::new(lines).render(inner, buf);
    }
}
