use crate::ui::session::ExplainSession;
use crate::ui::theme::{
    ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_BUSY, STATUS_ERROR, STATUS_OK,
};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const SPINNER: [&str; 8] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧"];

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, session: &ExplainSession, tick: u8) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_icon, status_text, status_color) = status(session, tick);

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                "Code Explainer",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("Language: {}", session.language().label()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled(" ", text_style),
            Span::styled(status_text, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

fn status(session: &ExplainSession, tick: u8) -> (&'static str, &'static str, Color) {
    if session.is_loading() {
        let frame = SPINNER[usize::from(tick) % SPINNER.len()];
        (frame, "Analyzing...", STATUS_BUSY)
    } else if session.error().is_some() {
        ("✗", "Request failed", STATUS_ERROR)
    } else if !session.explanation().is_empty() {
        ("●", "Explained", STATUS_OK)
    } else {
        ("○", "Ready", HEADER_SEPARATOR)
    }
}
