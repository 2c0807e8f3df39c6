//! Style specification parsing.
//!
//! A spec string is a list of tokens separated by `|`, `+` or `,`:
//!
//! - the first color named is the foreground, the second the background;
//! - modifier names (`bold`, `underline`, ...) may appear anywhere;
//! - anything else is an error, as is a third color.
//!
//! Several spec strings can be combined with [`styledef`]. They are merged
//! left to right and a later string only overrides the keys it actually sets.
//! Keyword [`Overrides`] are applied last and always win.

use std::str::FromStr;

use crate::color::{resolve_color, Color};
use crate::error::{Result, StyleError};
use crate::modifier::{Modifier, Modifiers};

/// A parsed style: foreground, background and modifiers.
///
/// Keys that were never given a value are `None`; an empty modifier list is
/// never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct StyleDef {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Display modifiers, in the order they were named.
    pub style: Option<Modifiers>,
}

impl StyleDef {
    /// Create an empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no key is set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.style.is_none()
    }

    /// Parse a single spec string.
    ///
    /// # Examples
    ///
    /// ```
    /// use styling::{Color, Modifier, NamedColor, StyleDef};
    ///
    /// let def = StyleDef::parse("white,blue+bold").unwrap();
    /// assert_eq!(def.fg, Some(Color::Named(NamedColor::White)));
    /// assert_eq!(def.bg, Some(Color::Named(NamedColor::Blue)));
    /// assert!(def.style.unwrap().contains(Modifier::Bold));
    /// ```
    pub fn parse(spec: &str) -> Result<Self> {
        parse_spec(spec)
    }

    /// Merge `other` on top of `self`, taking only the keys `other` sets.
    pub fn merge_present(&mut self, other: StyleDef) {
        if other.fg.is_some() {
            self.fg = other.fg;
        }
        if other.bg.is_some() {
            self.bg = other.bg;
        }
        if other.style.as_ref().is_some_and(|s| !s.is_empty()) {
            self.style = other.style;
        }
    }

    /// Apply keyword overrides, unconditionally.
    pub fn apply_overrides(&mut self, overrides: &Overrides) {
        if let Some(fg) = &overrides.fg {
            self.fg = fg.clone().into_option();
        }
        if let Some(bg) = &overrides.bg {
            self.bg = bg.clone().into_option();
        }
        if let Some(style) = &overrides.style {
            self.style = style.clone().into_option().filter(|s| !s.is_empty());
        }
    }
}

impl FromStr for StyleDef {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        parse_spec(s)
    }
}

/// An explicit keyword value: set the key, or remove it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Override<T> {
    Set(T),
    Clear,
}

impl<T> Override<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Override::Set(value) => Some(value),
            Override::Clear => None,
        }
    }
}

/// Keyword overrides applied after all spec strings.
///
/// # Example
///
/// ```
/// use styling::{styledef, Color, NamedColor, Overrides};
///
/// let overrides = Overrides::new().fg(NamedColor::Green).clear_bg();
/// let def = styledef(&["red,blue"], &overrides).unwrap();
/// assert_eq!(def.fg, Some(Color::Named(NamedColor::Green)));
/// assert_eq!(def.bg, None);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    fg: Option<Override<Color>>,
    bg: Option<Override<Color>>,
    style: Option<Override<Modifiers>>,
}

impl Overrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: impl Into<Color>) -> Self {
        self.fg = Some(Override::Set(color.into()));
        self
    }

    pub fn bg(mut self, color: impl Into<Color>) -> Self {
        self.bg = Some(Override::Set(color.into()));
        self
    }

    pub fn style(mut self, modifiers: impl Into<Modifiers>) -> Self {
        self.style = Some(Override::Set(modifiers.into()));
        self
    }

    pub fn clear_fg(mut self) -> Self {
        self.fg = Some(Override::Clear);
        self
    }

    pub fn clear_bg(mut self) -> Self {
        self.bg = Some(Override::Clear);
        self
    }

    pub fn clear_style(mut self) -> Self {
        self.style = Some(Override::Clear);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.style.is_none()
    }
}

/// Parse and merge any number of spec strings, then apply `overrides`.
///
/// Specs are processed left to right. Within each spec the first color is
/// the foreground and the second the background; across specs, a later
/// non-empty key replaces an earlier one.
///
/// # Errors
///
/// [`StyleError::TooManyColors`] if one spec names a third color, and
/// [`StyleError::InvalidToken`] for a token that is neither a color nor a
/// modifier. Parsing stops at the first error.
pub fn styledef(specs: &[&str], overrides: &Overrides) -> Result<StyleDef> {
    let mut def = StyleDef::new();
    for spec in specs {
        def.merge_present(parse_spec(spec)?);
    }
    def.apply_overrides(overrides);
    log::debug!("styledef {:?} -> {:?}", specs, def);
    Ok(def)
}

fn parse_spec(spec: &str) -> Result<StyleDef> {
    let normalized = spec.replace(['+', ','], "|").to_lowercase();

    let mut fg = None;
    let mut bg = None;
    let mut modifiers = Modifiers::new();

    for token in normalized.split('|').map(str::trim) {
        if let Some(color) = resolve_color(token) {
            log::trace!("token {:?} -> color {:?}", token, color);
            if fg.is_none() {
                fg = Some(color);
            } else if bg.is_none() {
                bg = Some(color);
            } else {
                return Err(StyleError::TooManyColors {
                    token: token.to_string(),
                    spec: normalized.clone(),
                });
            }
        } else if let Some(modifier) = Modifier::from_name(token) {
            log::trace!("token {:?} -> modifier", token);
            modifiers.push(modifier);
        } else {
            return Err(StyleError::InvalidToken(token.to_string()));
        }
    }

    Ok(StyleDef {
        fg,
        bg,
        style: (!modifiers.is_empty()).then_some(modifiers),
    })
}
