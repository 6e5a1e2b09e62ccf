//! Input handling: maps key/mouse events to state mutations.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::config::Action;
use crate::ui::layout::{point_in_rect, WindowLayout};

use super::state::{ActiveView, AppState};

/// Process a key event, dispatching based on the active view.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl+c always quits, regardless of view.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match state.active_view {
        ActiveView::Terms => handle_terms_key(state, key),
        ActiveView::Instruction | ActiveView::Agreed => {
            // Modal: only dismissal keys do anything.
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                close_dialog(state);
            }
        }
    }
}

fn handle_terms_key(state: &mut AppState, key: KeyEvent) {
    let Some(action) = state.config.match_key(key) else {
        return;
    };

    let desktop = state.desktop;
    match action {
        Action::MoveLeft => state.window.move_by(-1, 0, desktop),
        Action::MoveRight => state.window.move_by(1, 0, desktop),
        Action::MoveUp => state.window.move_by(0, -1, desktop),
        Action::MoveDown => state.window.move_by(0, 1, desktop),
        Action::ToggleAccept => toggle_accept(state),
        Action::Continue => press_continue(state),
        Action::Quit => state.should_quit = true,
    }
    state.needs_redraw = true;
}

/// Process a mouse event.
pub fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.active_view != ActiveView::Terms {
        if let MouseEventKind::Down(_) = mouse.kind {
            close_dialog(state);
        }
        return;
    }

    let layout = WindowLayout::from_rect(state.window.rect());

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if point_in_rect(layout.title_bar, mouse.column, mouse.row) {
                state.drag_anchor = Some((
                    mouse.column - state.window.x,
                    mouse.row - state.window.y,
                ));
                state.needs_redraw = true;
                return;
            }

            if let Some(row) = state.terms.confirmation_row() {
                let (checkbox, button) = layout.confirmation_areas(row);
                if point_in_rect(checkbox, mouse.column, mouse.row) {
                    toggle_accept(state);
                    return;
                }
                if point_in_rect(button, mouse.column, mouse.row) {
                    press_continue(state);
                    return;
                }
            }

            if point_in_rect(layout.content, mouse.column, mouse.row) {
                state.active_view = ActiveView::Instruction;
                state.needs_redraw = true;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            if let Some((ax, ay)) = state.drag_anchor {
                let x = i32::from(mouse.column) - i32::from(ax);
                let y = i32::from(mouse.row) - i32::from(ay);
                state.window.move_to(x, y, state.desktop);
                state.needs_redraw = true;
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            if state.drag_anchor.take().is_some() {
                state.needs_redraw = true;
            }
        }
        _ => {}
    }
}

fn toggle_accept(state: &mut AppState) {
    // The checkbox is part of the scrolled content: it can only be used
    // once it has been scrolled into view.
    if state.terms.confirmation_row().is_none() {
        return;
    }
    state.accepted = !state.accepted;
    tracing::debug!("accept toggled: {}", state.accepted);
    state.needs_redraw = true;
}

fn press_continue(state: &mut AppState) {
    if state.terms.confirmation_row().is_none() || !state.can_continue() {
        return;
    }
    tracing::info!("terms accepted");
    state.active_view = ActiveView::Agreed;
    state.needs_redraw = true;
}

fn close_dialog(state: &mut AppState) {
    state.active_view = ActiveView::Terms;
    state.needs_redraw = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::core::motion::ScrollTarget;
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use std::time::Instant;

    fn state() -> AppState {
        let body = (0..40).map(|i| format!("clause {i}\n")).collect::<String>();
        AppState::new(
            AppConfig::default(),
            Rect::new(0, 0, 100, 40),
            (8.0, 16.0),
            body,
            Instant::now(),
        )
    }

    fn scroll_to_bottom(state: &mut AppState) {
        let range = state.terms.scroll_range();
        state.terms.set_scroll_position(range.max_position());
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_move_window() {
        let mut state = state();
        let (x, y) = (state.window.x, state.window.y);
        press(&mut state, KeyCode::Left);
        press(&mut state, KeyCode::Down);
        assert_eq!((state.window.x, state.window.y), (x - 1, y + 1));
    }

    #[test]
    fn test_drag_title_bar_moves_window() {
        let mut state = state();
        let (x, y) = (state.window.x, state.window.y);
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), x + 5, y));
        assert!(state.drag_anchor.is_some());
        handle_mouse(&mut state, mouse(MouseEventKind::Drag(MouseButton::Left), x + 15, y + 2));
        assert_eq!((state.window.x, state.window.y), (x + 10, y + 2));
        handle_mouse(&mut state, mouse(MouseEventKind::Up(MouseButton::Left), x + 15, y + 2));
        assert!(state.drag_anchor.is_none());
    }

    #[test]
    fn test_accept_requires_scrolling_to_confirmation() {
        let mut state = state();
        press(&mut state, KeyCode::Char(' '));
        assert!(!state.accepted);

        scroll_to_bottom(&mut state);
        press(&mut state, KeyCode::Char(' '));
        assert!(state.accepted);
    }

    #[test]
    fn test_continue_disabled_until_accepted() {
        let mut state = state();
        scroll_to_bottom(&mut state);
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.active_view, ActiveView::Terms);

        press(&mut state, KeyCode::Char(' '));
        press(&mut state, KeyCode::Enter);
        assert_eq!(state.active_view, ActiveView::Agreed);

        press(&mut state, KeyCode::Esc);
        assert_eq!(state.active_view, ActiveView::Terms);
    }

    #[test]
    fn test_click_in_text_shows_instruction() {
        let mut state = state();
        let content = WindowLayout::from_rect(state.window.rect()).content;
        handle_mouse(
            &mut state,
            mouse(MouseEventKind::Down(MouseButton::Left), content.x + 3, content.y + 3),
        );
        assert_eq!(state.active_view, ActiveView::Instruction);

        // Modal: movement keys are ignored while the dialog is open.
        let x = state.window.x;
        press(&mut state, KeyCode::Left);
        assert_eq!(state.window.x, x);

        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(state.active_view, ActiveView::Terms);
    }

    #[test]
    fn test_click_checkbox_and_button() {
        let mut state = state();
        scroll_to_bottom(&mut state);
        let layout = WindowLayout::from_rect(state.window.rect());
        let row = state.terms.confirmation_row().unwrap();
        let (checkbox, button) = layout.confirmation_areas(row);

        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), checkbox.x, checkbox.y));
        assert!(state.accepted);
        handle_mouse(&mut state, mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y));
        assert_eq!(state.active_view, ActiveView::Agreed);
    }

    #[test]
    fn test_ctrl_c_quits_from_dialog() {
        let mut state = state();
        state.active_view = ActiveView::Instruction;
        handle_key(
            &mut state,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                kind: KeyEventKind::Press,
                state: KeyEventState::NONE,
            },
        );
        assert!(state.should_quit);
    }
}
