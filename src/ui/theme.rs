use ratatui::style::Color;

use crate::app::FilterField;

pub const BORDER: Color = Color::Cyan;
pub const HINT: Color = Color::DarkGray;
pub const ERROR: Color = Color::Red;
pub const NOTICE: Color = Color::Yellow;
pub const METRIC: Color = Color::Green;
pub const KEY: Color = Color::Rgb(0x00, 0x52, 0xCC);

pub fn filter_title(field: FilterField) -> &'static str {
    match field {
        FilterField::Industry => " Industry ",
        FilterField::Component => " Component ",
        FilterField::Status => " Status ",
    }
}
