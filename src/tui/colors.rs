//! Conversions from palette colors to terminal colors

use ratatui::style::Color as TermColor;

use crate::color::Color;

/// Terminal color for a palette color
pub fn to_term(color: Color) -> TermColor {
    let (r, g, b) = color.rgb();
    TermColor::Rgb(r, g, b)
}
