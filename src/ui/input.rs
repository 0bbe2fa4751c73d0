use crate::ui::app::{App, CursorMove};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown in the explanation panel.
const PAGE_LINES: u16 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }
    if is_ctrl_char(key, 'e') || key.code == KeyCode::F(5) {
        app.request_explain();
        return;
    }
    if is_ctrl_char(key, 'l') {
        app.cycle_language();
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.toggle_panel();
        return;
    }
    if is_ctrl_char(key, 'y') {
        app.copy_explanation();
        return;
    }

    if app.panel().is_visible() {
        match key.code {
            KeyCode::Esc => app.close_panel(),
            KeyCode::Up => app.scroll_panel_up(1),
            KeyCode::Down => app.scroll_panel_down(1),
            KeyCode::PageUp => app.scroll_panel_up(PAGE_LINES),
            KeyCode::PageDown => app.scroll_panel_down(PAGE_LINES),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char(ch) if !has_command_modifier(key) => app.insert_char(ch),
        KeyCode::Enter => app.insert_newline(),
        KeyCode::Tab => app.insert_tab(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete(),
        KeyCode::Left => app.move_cursor(CursorMove::Left),
        KeyCode::Right => app.move_cursor(CursorMove::Right),
        KeyCode::Up => app.move_cursor(CursorMove::Up),
        KeyCode::Down => app.move_cursor(CursorMove::Down),
        KeyCode::Home => app.move_cursor(CursorMove::Home),
        KeyCode::End => app.move_cursor(CursorMove::End),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
