use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xff, 0x4d, 0x67);
pub const HEADER_BAR: Color = Color::Rgb(0xb0, 0xed, 0x08);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PRICE: Color = Color::Rgb(0x25, 0x63, 0xeb);
pub const DETAIL_PRICE: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const RATING: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const IN_STOCK: Color = Color::Rgb(0x16, 0xa3, 0x4a);
pub const OUT_OF_STOCK: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SELECTED: Color = Color::Rgb(0x26, 0x26, 0x26);
