use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x93, 0x33, 0xea);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PANEL_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const PANEL_TEXT: Color = Color::Rgb(0xd1, 0xd5, 0xdb);
pub const LINE_NUMBER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_BUSY: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xf8, 0x71, 0x71);
