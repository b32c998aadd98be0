//! Color math for swatch
//!
//! Hex/RGB conversion, named color parsing, random colors, contrast text
//! selection and gradient composition. Everything here is pure.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// Luminance above which dark text is used
const CONTRAST_THRESHOLD: f64 = 128.0;

/// Number of distinct 24-bit colors
const COLOR_SPACE: u32 = 0x100_0000;

/// A 24-bit RGB color, displayed as `#rrggbb`
///
/// Equality is by channel value, so `#FF0000` and `#ff0000` are the same color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const OLIVE: Color = Color::new(0x80, 0x80, 0x00);
    pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from the low 24 bits of `value`
    pub const fn from_u24(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }

    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Lowercase `#rrggbb` form
    pub fn hex(&self) -> String {
        self.to_string()
    }

    /// Perceptual luminance on the 0-255 scale
    pub fn luminance(&self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    /// Apply a brightness filter (percent, 100 = unchanged)
    ///
    /// Presentation only: callers render the result, they never store it.
    pub fn with_brightness(&self, percent: u16) -> Color {
        let scale = |c: u8| -> u8 {
            let scaled = (u32::from(c) * u32::from(percent) + 50) / 100;
            scaled.min(255) as u8
        };
        Color::new(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Linear interpolation towards `other`, `t` clamped to 0.0..=1.0
    pub fn mix(&self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Color::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::OLIVE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }
}

/// Encode integer channels as a color
///
/// Each channel must lie in 0..=255.
pub fn to_hex(r: i64, g: i64, b: i64) -> Result<Color> {
    Ok(Color::new(
        channel("red", r)?,
        channel("green", g)?,
        channel("blue", b)?,
    ))
}

fn channel(name: &'static str, value: i64) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidChannel {
        channel: name,
        value,
    })
}

/// Draw a uniformly random color
pub fn random_color() -> Color {
    random_color_with(&mut rand::rng())
}

/// Draw a uniformly random color from the given generator
pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::from_u24(rng.random_range(0..COLOR_SPACE))
}

/// Text color that stays legible on a background
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextContrast {
    /// Dark text, for light backgrounds
    Dark,
    /// Light text, for dark backgrounds
    Light,
}

impl TextContrast {
    pub fn color(&self) -> Color {
        match self {
            TextContrast::Dark => Color::BLACK,
            TextContrast::Light => Color::WHITE,
        }
    }
}

/// Pick dark or light text for the given background
pub fn contrast_text_color(background: Color) -> TextContrast {
    if background.luminance() > CONTRAST_THRESHOLD {
        TextContrast::Dark
    } else {
        TextContrast::Light
    }
}

/// Wrap an angle in degrees into 0..360
pub fn wrap_angle(degrees: i32) -> u16 {
    degrees.rem_euclid(360) as u16
}

/// Two-stop linear gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub angle: u16,
    pub primary: Color,
    pub secondary: Color,
}

impl GradientSpec {
    /// Color at position `t` along the gradient axis (0.0 = primary)
    pub fn color_at(&self, t: f32) -> Color {
        self.primary.mix(self.secondary, t)
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "linear-gradient({}deg, {}, {})",
            self.angle, self.primary, self.secondary
        )
    }
}

/// Compose a linear gradient; the angle wraps rather than clamps
pub fn compose_gradient(angle: i32, primary: Color, secondary: Color) -> GradientSpec {
    GradientSpec {
        angle: wrap_angle(angle),
        primary,
        secondary,
    }
}

/// Parse a color string into a normalized color
///
/// Supports:
/// - Hex colors: "#RRGGBB", "#RGB" or bare "RRGGBB"
/// - Named colors: "olive", "red", "pink", etc.
pub fn parse_color(s: &str) -> Result<Color> {
    let s = s.trim();

    if let Some(color) = parse_named_color(s) {
        return Ok(color);
    }

    parse_hex_color(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        // #RGB -> #RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Color::new(r, g, b))
        }
        6 => u32::from_str_radix(hex, 16).ok().map(Color::from_u24),
        _ => None,
    }
}

/// Parse a CSS named color
fn parse_named_color(s: &str) -> Option<Color> {
    let value = match s.to_lowercase().as_str() {
        "olive" => 0x808000,
        "red" => 0xff0000,
        "green" => 0x008000,
        "blue" => 0x0000ff,
        "pink" => 0xffc0cb,
        "white" => 0xffffff,
        "black" => 0x000000,
        "gray" | "grey" => 0x808080,
        "silver" => 0xc0c0c0,
        "maroon" => 0x800000,
        "purple" => 0x800080,
        "fuchsia" | "magenta" => 0xff00ff,
        "lime" => 0x00ff00,
        "yellow" => 0xffff00,
        "navy" => 0x000080,
        "teal" => 0x008080,
        "aqua" | "cyan" => 0x00ffff,
        "orange" => 0xffa500,
        _ => return None,
    };
    Some(Color::from_u24(value))
}
