use crate::ui::app::App;
use crate::ui::editor::display_slice;
use crate::ui::explanation::render_explanation_panel;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, panel_rect, scroll_offset};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_TEXT, LINE_NUMBER, PLACEHOLDER};
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const PLACEHOLDER_TEXT: &str = "Enter your code here...";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.session(), app.tick()), header);
    frame.render_widget(Clear, body);
    draw_editor(frame, app, body);
    frame.render_widget(Footer::new().widget(footer, app.status_message()), footer);

    render_explanation_panel(frame, panel_rect(body), app.session(), app.panel());
}

fn draw_editor(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let session = app.session();
    let title = Line::from(vec![
        Span::styled(" Code ", Style::default().fg(ACCENT)),
        Span::styled(
            format!("({}) ", session.language().label()),
            Style::default().fg(HEADER_TEXT),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let code = session.code();
    let line_count = code.split('\n').count();
    let gutter = line_count.to_string().len() + 1;
    let text_width = (inner.width as usize).saturating_sub(gutter + 1);

    let tab_width = app.tab_width();
    let (row, col) = app.editor().position(code, tab_width);
    let first_row = scroll_offset(row, inner.height as usize);
    let first_col = scroll_offset(col, text_width);

    let lines: Vec<Line> = if code.is_empty() {
        vec![Line::from(vec![
            Span::styled(
                format!("{:>width$} ", 1, width = gutter),
                Style::default().fg(LINE_NUMBER),
            ),
            Span::styled(
                PLACEHOLDER_TEXT,
                Style::default().fg(PLACEHOLDER).add_modifier(Modifier::ITALIC),
            ),
        ])]
    } else {
        code.split('\n')
            .enumerate()
            .skip(first_row)
            .take(inner.height as usize)
            .map(|(idx, text)| {
                let visible = display_slice(text, first_col, text_width, tab_width);
                Line::from(vec![
                    Span::styled(
                        format!("{:>width$} ", idx + 1, width = gutter),
                        Style::default().fg(LINE_NUMBER),
                    ),
                    Span::styled(visible, Style::default().fg(HEADER_TEXT)),
                ])
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines), inner);

    if !app.panel().is_visible() {
        let x = inner.x as usize + gutter + 1 + (col - first_col);
        let y = inner.y as usize + (row - first_row);
        let x = x.min((inner.x + inner.width).saturating_sub(1) as usize) as u16;
        let y = y.min((inner.y + inner.height).saturating_sub(1) as usize) as u16;
        frame.set_cursor_position(Position::new(x, y));
    }
}
