//! Color tokens for style specifications.
//!
//! A color in a spec string is either one of the eight basic terminal color
//! names, or anything [`parse_rgb`] can resolve to a true-color triple: CSS
//! color names and `#rgb` / `#rrggbb` hex codes.

use std::fmt;

use crate::css::CSS_COLORS;
use crate::error::ColorParseError;

/// The eight basic terminal colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    /// Known color names, in SGR order (`30` through `37`).
    pub const ALL: [NamedColor; 8] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
    ];

    /// Look up a basic color by its exact (lowercase) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }
}

impl fmt::Display for NamedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved color token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Basic terminal color.
    Named(NamedColor),
    /// True color, from a hex code or a CSS color name.
    Rgb(u8, u8, u8),
    /// 256-color palette index. Never produced by spec parsing.
    Indexed(u8),
}

impl Color {
    /// Parse a single color token.
    ///
    /// # Examples
    ///
    /// ```
    /// use styling::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("Red"), Some(Color::Named(NamedColor::Red)));
    /// assert_eq!(Color::parse("#ff8000"), Some(Color::Rgb(255, 128, 0)));
    /// assert_eq!(Color::parse("bold"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        resolve_color(&token.trim().to_lowercase())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => fmt::Display::fmt(named, f),
            Color::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(index) => write!(f, "{}", index),
        }
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::Rgb(r, g, b)
    }
}

/// Resolve a normalized (lowercase, trimmed) token to a color.
///
/// Basic names win over the CSS table, so `"red"` is the terminal's red and
/// not `#ff0000`. Resolver failures mean "not a color" and are not errors.
pub fn resolve_color(token: &str) -> Option<Color> {
    if let Some(named) = NamedColor::from_name(token) {
        return Some(Color::Named(named));
    }
    match parse_rgb(token) {
        Ok((r, g, b)) => Some(Color::Rgb(r, g, b)),
        Err(err) => {
            log::trace!("token {:?} is not a color: {}", token, err);
            None
        }
    }
}

/// Resolve a CSS color name or hex code to an RGB triple.
///
/// Whitespace is ignored and matching is case-insensitive.
pub fn parse_rgb(input: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let spec: String = input
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if let Some(rgb) = CSS_COLORS.get(spec.as_str()) {
        return Ok(*rgb);
    }

    match spec.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => Err(ColorParseError::UnknownName(input.to_string())),
    }
}

/// Parse a hex color (without the `#` prefix).
fn parse_hex(hex: &str) -> Result<(u8, u8, u8), ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(format!("#{}", hex));
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |digits: &str| u8::from_str_radix(digits, 16).map_err(|_| invalid());
    match hex.len() {
        // #rgb -> #rrggbb
        3 => Ok((
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        6 => Ok((
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => Err(invalid()),
    }
}
