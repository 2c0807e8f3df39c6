//! Display modifiers (`bold`, `underline`, ...).

use std::fmt;

/// A display attribute independent of color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// Reset all attributes.
    None,
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    /// Rapid blink.
    Blink2,
    /// Reverse video.
    Negative,
    Concealed,
    /// Strikethrough.
    Crossed,
}

impl Modifier {
    /// Known modifier names, in SGR order (`0` through `9`).
    pub const ALL: [Modifier; 10] = [
        Modifier::None,
        Modifier::Bold,
        Modifier::Faint,
        Modifier::Italic,
        Modifier::Underline,
        Modifier::Blink,
        Modifier::Blink2,
        Modifier::Negative,
        Modifier::Concealed,
        Modifier::Crossed,
    ];

    /// Look up a modifier by its exact (lowercase) name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Modifier::None => "none",
            Modifier::Bold => "bold",
            Modifier::Faint => "faint",
            Modifier::Italic => "italic",
            Modifier::Underline => "underline",
            Modifier::Blink => "blink",
            Modifier::Blink2 => "blink2",
            Modifier::Negative => "negative",
            Modifier::Concealed => "concealed",
            Modifier::Crossed => "crossed",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered modifier list. Duplicates are kept.
///
/// Displays as the names joined with `|`, e.g. `bold|underline`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(Vec<Modifier>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, modifier: Modifier) {
        self.0.push(modifier);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, modifier) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("|")?;
            }
            fmt::Display::fmt(modifier, f)?;
        }
        Ok(())
    }
}

impl From<Modifier> for Modifiers {
    fn from(modifier: Modifier) -> Self {
        Modifiers(vec![modifier])
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Modifiers(iter.into_iter().collect())
    }
}
