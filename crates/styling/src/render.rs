//! Rendering a parsed style onto text.
//!
//! The parser never builds escape sequences itself. Everything that turns a
//! [`StyleDef`] into terminal output goes through the [`Render`] trait, with
//! [`AnsiRenderer`] as the default implementation on top of crossterm.

use crossterm::style::{Attribute, Color as TermColor, ContentStyle};

use crate::color::{Color, NamedColor};
use crate::modifier::{Modifier, Modifiers};
use crate::styledef::StyleDef;

/// Wraps text in whatever markup a style resolves to.
pub trait Render: Send + Sync {
    /// Render `text` with the given colors and modifiers.
    fn render(
        &self,
        text: &str,
        fg: Option<&Color>,
        bg: Option<&Color>,
        style: Option<&Modifiers>,
    ) -> String;

    /// Render `text` with every key of a parsed style.
    fn render_def(&self, text: &str, def: &StyleDef) -> String {
        self.render(text, def.fg.as_ref(), def.bg.as_ref(), def.style.as_ref())
    }
}

/// Emits ANSI SGR escape sequences.
///
/// Text with no colors and no modifiers is returned unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnsiRenderer;

impl Render for AnsiRenderer {
    fn render(
        &self,
        text: &str,
        fg: Option<&Color>,
        bg: Option<&Color>,
        style: Option<&Modifiers>,
    ) -> String {
        let mut content = ContentStyle::new();
        content.foreground_color = fg.map(to_term_color);
        content.background_color = bg.map(to_term_color);
        for modifier in style.into_iter().flat_map(|mods| mods.iter()) {
            content.attributes.set(to_attribute(modifier));
        }

        if content.foreground_color.is_none()
            && content.background_color.is_none()
            && content.attributes.is_empty()
        {
            return text.to_string();
        }
        content.apply(text).to_string()
    }
}

fn to_term_color(color: &Color) -> TermColor {
    match *color {
        Color::Named(named) => match named {
            NamedColor::Black => TermColor::Black,
            NamedColor::Red => TermColor::DarkRed,
            NamedColor::Green => TermColor::DarkGreen,
            NamedColor::Yellow => TermColor::DarkYellow,
            NamedColor::Blue => TermColor::DarkBlue,
            NamedColor::Magenta => TermColor::DarkMagenta,
            NamedColor::Cyan => TermColor::DarkCyan,
            NamedColor::White => TermColor::Grey,
        },
        Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
        Color::Indexed(index) => TermColor::AnsiValue(index),
    }
}

fn to_attribute(modifier: Modifier) -> Attribute {
    match modifier {
        Modifier::None => Attribute::Reset,
        Modifier::Bold => Attribute::Bold,
        Modifier::Faint => Attribute::Dim,
        Modifier::Italic => Attribute::Italic,
        Modifier::Underline => Attribute::Underlined,
        Modifier::Blink => Attribute::SlowBlink,
        Modifier::Blink2 => Attribute::RapidBlink,
        Modifier::Negative => Attribute::Reverse,
        Modifier::Concealed => Attribute::Hidden,
        Modifier::Crossed => Attribute::CrossedOut,
    }
}
