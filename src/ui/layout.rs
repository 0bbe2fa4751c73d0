use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Area covered by the explanation panel: the body minus a one-cell margin
/// on each side, or the whole body when it is too small for a margin.
pub fn panel_rect(body: Rect) -> Rect {
    if body.width < 10 || body.height < 5 {
        return body;
    }
    Rect {
        x: body.x + 1,
        y: body.y,
        width: body.width - 2,
        height: body.height,
    }
}

/// First visible index so that `cursor` stays inside a window of `visible`.
pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
    if visible == 0 {
        return cursor;
    }
    cursor.saturating_sub(visible - 1)
}
