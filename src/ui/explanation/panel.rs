use crate::ui::session::ExplainSession;
use crate::ui::theme::{ACCENT, PANEL_BORDER, PANEL_TEXT, STATUS_BUSY, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::state::PanelState;

/// Lines shown in the panel for the current session.
///
/// The error replaces the explanation when set. While a request is in flight
/// an "Analyzing..." line is prepended and the previous result stays visible.
pub fn panel_lines(session: &ExplainSession) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    if session.is_loading() {
        lines.push(Line::from(Span::styled(
            "Analyzing...",
            Style::default().fg(STATUS_BUSY).add_modifier(Modifier::ITALIC),
        )));
        lines.push(Line::from(""));
    }

    let style = if session.error().is_some() {
        Style::default().fg(STATUS_ERROR)
    } else {
        Style::default().fg(PANEL_TEXT)
    };

    let text = session.display_text();
    if text.is_empty() && !session.is_loading() {
        lines.push(Line::from(Span::styled(
            "No explanation yet. Press Ctrl+E to explain the code.",
            Style::default().fg(PANEL_TEXT).add_modifier(Modifier::DIM),
        )));
    } else {
        lines.extend(
            text.lines()
                .map(|line| Line::from(Span::styled(line.to_string(), style))),
        );
    }

    lines
}

fn panel_block() -> Block<'static> {
    Block::default()
        .title(Span::styled(" Explanation ", Style::default().fg(ACCENT)))
        .title_bottom(Line::from(" Esc/Ctrl+O: Edit Code  ↑/↓: Scroll ").right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PANEL_BORDER))
}

fn panel_text(session: &ExplainSession) -> Paragraph<'static> {
    Paragraph::new(panel_lines(session)).wrap(Wrap { trim: false })
}

/// Largest useful scroll offset when the panel covers `area`: wrapped rows
/// minus the rows that fit inside the borders.
pub fn max_scroll(session: &ExplainSession, area: Rect) -> u16 {
    let inner = panel_block().inner(area);
    if inner.width == 0 || inner.height == 0 {
        return 0;
    }
    // Measured without the block: line_count wraps at the width it is given
    let rows = panel_text(session).line_count(inner.width);
    let hidden = rows.saturating_sub(usize::from(inner.height));
    u16::try_from(hidden).unwrap_or(u16::MAX)
}

pub fn render_explanation_panel(
    frame: &mut Frame,
    area: Rect,
    session: &ExplainSession,
    state: &PanelState,
) {
    if !state.is_visible() || area.width == 0 || area.height == 0 {
        return;
    }

    // Content may have shrunk since the last scroll (new result, resize)
    let scroll = state.scroll().min(max_scroll(session, area));
    let widget = panel_text(session)
        .block(panel_block())
        .scroll((scroll, 0));

    frame.render_widget(Clear, area);
    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explain::{ExplainError, ExplainResponse, Language};
    use crate::ui::session::SessionStore;

    fn text_of(lines: &[Line]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn empty_session_shows_hint() {
        let session = ExplainSession::default();
        let lines = text_of(&panel_lines(&session));
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Ctrl+E"));
    }

    #[test]
    fn loading_prepends_analyzing() {
        let mut store = SessionStore::default();
        store.begin_explain("x", Language::Python);
        let lines = text_of(&panel_lines(store.state()));
        assert_eq!(lines[0], "Analyzing...");
    }

    #[test]
    fn error_replaces_explanation() {
        let mut store = SessionStore::default();
        let first = store.begin_explain("x", Language::Python);
        store.complete_explain(
            first.generation,
            Ok(ExplainResponse {
                explanation: "Assigns x".into(),
            }),
        );
        let second = store.begin_explain("x", Language::Python);
        store.complete_explain(
            second.generation,
            Err(ExplainError::Service {
                status: 500,
                body: "server error".into(),
            }),
        );

        let lines = text_of(&panel_lines(store.state()));
        assert_eq!(lines, vec!["server error".to_string()]);
    }

    #[test]
    fn multiline_explanation_keeps_lines() {
        let mut store = SessionStore::default();
        let pending = store.begin_explain("x", Language::Python);
        store.complete_explain(
            pending.generation,
            Ok(ExplainResponse {
                explanation: "line one\nline two".into(),
            }),
        );
        let lines = text_of(&panel_lines(store.state()));
        assert_eq!(lines, vec!["line one".to_string(), "line two".to_string()]);
    }

    fn explained(text: &str) -> SessionStore {
        let mut store = SessionStore::default();
        let pending = store.begin_explain("x", Language::Python);
        store.complete_explain(
            pending.generation,
            Ok(ExplainResponse {
                explanation: text.into(),
            }),
        );
        store
    }

    #[test]
    fn max_scroll_counts_wrapped_rows() {
        // 12 wrapped rows of 10 cells inside a 12x7 panel (10x5 inner)
        let store = explained(&"abcdefghij".repeat(12));
        assert_eq!(max_scroll(store.state(), Rect::new(0, 0, 12, 7)), 7);
    }

    #[test]
    fn max_scroll_is_zero_when_text_fits() {
        let store = explained("short");
        assert_eq!(max_scroll(store.state(), Rect::new(0, 0, 40, 10)), 0);
        assert_eq!(max_scroll(store.state(), Rect::new(0, 0, 1, 1)), 0);
    }
}
