//! Color theme for the swatch interface chrome
//!
//! The theme only styles borders, labels and toasts; the swatch itself is
//! always painted with the session's color.
//!
//! # Preset Themes
//!
//! - `default`: True Color theme
//! - `classic`: 16-color theme for limited terminals

use ratatui::style::Color;
use serde::Deserialize;
use std::str::FromStr;

/// All color definitions for the UI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // UI elements
    pub header: Color,
    pub accent: Color,
    pub border: Color,
    pub key: Color,
    pub description: Color,
    pub selection_bg: Color,
    pub bar_bg: Color,

    // Semantic colors
    pub text: Color,
    pub text_muted: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl ThemeColors {
    /// Classic theme - 16-color scheme
    pub fn classic() -> Self {
        Self {
            header: Color::Cyan,
            accent: Color::Yellow,
            border: Color::DarkGray,
            key: Color::Yellow,
            description: Color::DarkGray,
            selection_bg: Color::DarkGray,
            bar_bg: Color::Black,

            text: Color::White,
            text_muted: Color::DarkGray,
            success: Color::Green,
            error: Color::Red,
        }
    }

    /// Default theme - True Color scheme
    pub fn default_theme() -> Self {
        Self {
            header: Color::Rgb(6, 182, 212),        // Cyan 400 (#06B6D4)
            accent: Color::Rgb(251, 191, 36),       // Amber 400 (#FBBF24)
            border: Color::Rgb(107, 114, 128),      // Gray 500 (#6B7280)
            key: Color::Rgb(245, 158, 11),          // Amber 500 (#F59E0B)
            description: Color::Rgb(156, 163, 175), // Gray 400 (#9CA3AF)
            selection_bg: Color::Rgb(55, 65, 81),   // Gray 700 (#374151)
            bar_bg: Color::Rgb(31, 41, 55),         // Gray 800 (#1F2937)

            text: Color::Rgb(243, 244, 246), // Gray 100 (#F3F4F6)
            text_muted: Color::Rgb(156, 163, 175), // Gray 400 (#9CA3AF)
            success: Color::Rgb(34, 197, 94), // Green 500 (#22C55E)
            error: Color::Rgb(239, 68, 68),  // Red 500 (#EF4444)
        }
    }

    /// Create ThemeColors from a preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }
}

/// Theme configuration for deserialization
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThemeColorsConfig {
    pub header: Option<String>,
    pub accent: Option<String>,
    pub border: Option<String>,
    pub key: Option<String>,
    pub description: Option<String>,
    pub selection_bg: Option<String>,
    pub bar_bg: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl ThemeColorsConfig {
    /// Apply color overrides to a ThemeColors instance
    pub fn apply_to(&self, base: &mut ThemeColors) {
        override_color(&mut base.header, &self.header);
        override_color(&mut base.accent, &self.accent);
        override_color(&mut base.border, &self.border);
        override_color(&mut base.key, &self.key);
        override_color(&mut base.description, &self.description);
        override_color(&mut base.selection_bg, &self.selection_bg);
        override_color(&mut base.bar_bg, &self.bar_bg);
        override_color(&mut base.text, &self.text);
        override_color(&mut base.text_muted, &self.text_muted);
        override_color(&mut base.success, &self.success);
        override_color(&mut base.error, &self.error);
    }
}

/// Replace `slot` when `value` parses; invalid values are ignored
fn override_color(slot: &mut Color, value: &Option<String>) {
    if let Some(color) = value.as_deref().and_then(parse_theme_color) {
        *slot = color;
    }
}

/// Complete theme containing colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default_theme(),
        }
    }
}

impl Theme {
    /// Create a theme from config settings
    pub fn from_config(
        theme_name: Option<&str>,
        colors_config: Option<&ThemeColorsConfig>,
    ) -> Self {
        let preset_name = theme_name.unwrap_or("default");
        let mut colors =
            ThemeColors::from_preset(preset_name).unwrap_or_else(ThemeColors::default_theme);

        if let Some(config) = colors_config {
            config.apply_to(&mut colors);
        }

        Self {
            name: preset_name.to_string(),
            colors,
        }
    }
}

/// Parse a theme color string into a ratatui Color
///
/// Supports:
/// - 256-color index: "0" to "255"
/// - Terminal named colors: "darkgray", "lightblue", "reset", etc.
/// - Anything the palette parser accepts: "#RRGGBB", "#RGB", CSS names
pub fn parse_theme_color(s: &str) -> Option<Color> {
    let s = s.trim();

    if let Ok(index) = u8::from_str(s) {
        return Some(Color::Indexed(index));
    }

    if let Some(color) = parse_terminal_color(s) {
        return Some(color);
    }

    crate::color::parse_color(s).ok().map(|c| {
        let (r, g, b) = c.rgb();
        Color::Rgb(r, g, b)
    })
}

/// Terminal palette names that have no fixed RGB value
fn parse_terminal_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "lightred" | "light_red" => Some(Color::LightRed),
        "lightgreen" | "light_green" => Some(Color::LightGreen),
        "lightyellow" | "light_yellow" => Some(Color::LightYellow),
        "lightblue" | "light_blue" => Some(Color::LightBlue),
        "lightmagenta" | "light_magenta" => Some(Color::LightMagenta),
        "lightcyan" | "light_cyan" => Some(Color::LightCyan),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}
