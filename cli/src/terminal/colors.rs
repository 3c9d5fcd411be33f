use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const LATITUDE: Color = Color::TrueColor { r: 120, g: 190, b: 255 };
pub const LONGITUDE: Color = Color::TrueColor { r: 180, g: 150, b: 255 };
pub const CONTENT: Color = Color::BrightWhite;
