//! Cursor handling for the code text box.
//!
//! The text itself lives in the session; the editor only tracks where the
//! cursor is and applies edits to a borrowed `String`.

use unicode_width::UnicodeWidthChar;

/// Cursor position as a byte offset into the code, always on a char boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Editor {
    cursor: usize,
}

impl Editor {
    /// Editor with the cursor at the end of `code`.
    pub fn at_end(code: &str) -> Self {
        Self { cursor: code.len() }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Zero-based (row, column) of the cursor, column counted in terminal
    /// cells with tabs `tab_width` wide.
    pub fn position(&self, code: &str, tab_width: u8) -> (usize, usize) {
        let before = &code[..self.cursor];
        let row = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let col = before[line_start..]
            .chars()
            .map(|ch| char_width(ch, tab_width))
            .sum();
        (row, col)
    }

    pub fn insert_char(&mut self, code: &mut String, ch: char) {
        code.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Insert pasted text, normalizing CRLF and lone CR to LF.
    pub fn insert_str(&mut self, code: &mut String, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        code.insert_str(self.cursor, &normalized);
        self.cursor += normalized.len();
    }

    pub fn insert_tab(&mut self, code: &mut String, width: u8) {
        let spaces = " ".repeat(usize::from(width));
        self.insert_str(code, &spaces);
    }

    pub fn backspace(&mut self, code: &mut String) -> bool {
        let Some((idx, _)) = code[..self.cursor].char_indices().next_back() else {
            return false;
        };
        code.remove(idx);
        self.cursor = idx;
        true
    }

    pub fn delete(&mut self, code: &mut String) -> bool {
        if self.cursor >= code.len() {
            return false;
        }
        code.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self, code: &str) {
        if let Some((idx, _)) = code[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self, code: &str) {
        if let Some(ch) = code[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_home(&mut self, code: &str) {
        self.cursor = line_start(code, self.cursor);
    }

    pub fn move_end(&mut self, code: &str) {
        self.cursor = line_end(code, self.cursor);
    }

    pub fn move_up(&mut self, code: &str) {
        let start = line_start(code, self.cursor);
        if start == 0 {
            self.cursor = 0;
            return;
        }
        let col = code[start..self.cursor].chars().count();
        let prev_start = line_start(code, start - 1);
        self.cursor = offset_at_col(code, prev_start, start - 1, col);
    }

    pub fn move_down(&mut self, code: &str) {
        let end = line_end(code, self.cursor);
        if end == code.len() {
            self.cursor = end;
            return;
        }
        let col = code[line_start(code, self.cursor)..self.cursor].chars().count();
        let next_start = end + 1;
        let next_end = line_end(code, next_start);
        self.cursor = offset_at_col(code, next_start, next_end, col);
    }
}

/// Terminal cells `ch` occupies. Tabs take `tab_width`; other control
/// characters take none.
pub fn char_width(ch: char, tab_width: u8) -> usize {
    match ch {
        '\t' => usize::from(tab_width),
        ch if ch.is_control() => 0,
        ch => ch.width().unwrap_or(0),
    }
}

/// The part of `line` covering cells `[start, start + width)`, with tabs
/// expanded to spaces. A wide char cut by the left edge leaves blanks; one
/// cut by the right edge is dropped.
pub fn display_slice(line: &str, start: usize, width: usize, tab_width: u8) -> String {
    let end = start + width;
    let mut out = String::new();
    let mut cell = 0;
    for ch in line.chars() {
        let next = cell + char_width(ch, tab_width);
        if next > end {
            break;
        }
        if cell >= start {
            match ch {
                '\t' => out.push_str(&" ".repeat(next - cell)),
                ch if ch.is_control() => {}
                ch => out.push(ch),
            }
        } else if next > start {
            out.push_str(&" ".repeat(next - start));
        }
        cell = next;
    }
    out
}

fn line_start(code: &str, at: usize) -> usize {
    code[..at].rfind('\n').map_or(0, |i| i + 1)
}

fn line_end(code: &str, at: usize) -> usize {
    code[at..].find('\n').map_or(code.len(), |i| at + i)
}

/// Byte offset of char column `col` in the line `[start, end)`, clamped to
/// the line end.
fn offset_at_col(code: &str, start: usize, end: usize, col: usize) -> usize {
    code[start..end]
        .char_indices()
        .nth(col)
        .map_or(end, |(i, _)| start + i)
}
