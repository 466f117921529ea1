use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x84, 0xcc, 0x16);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const DIM_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const ERROR_TEXT: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);
