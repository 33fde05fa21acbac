use ratatui::style::Color;

pub const PORTAL_GREEN: Color = Color::Rgb(0x97, 0xce, 0x4c);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const STATUS_ALIVE: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_DEAD: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_UNKNOWN: Color = Color::Rgb(0xa3, 0xa3, 0xa3);
pub const ERROR_BORDER: Color = Color::Rgb(0xef, 0x44, 0x44);

pub fn status_color(status: &str) -> Color {
    if status.eq_ignore_ascii_case("alive") {
        STATUS_ALIVE
    } else if status.eq_ignore_ascii_case("dead") {
        STATUS_DEAD
    } else {
        STATUS_UNKNOWN
    }
}
