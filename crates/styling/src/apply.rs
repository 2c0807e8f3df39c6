//! One-shot and deferred styling helpers.
//!
//! [`styled`] parses and renders in one call. [`autostyle`] parses once and
//! hands back a closure that can style any number of items.

use std::fmt::Display;

use crate::error::Result;
use crate::render::{AnsiRenderer, Render};
use crate::styledef::{styledef, Overrides, StyleDef};

/// Render any displayable item with an already-parsed style.
///
/// Non-string items are converted with their `Display` implementation.
pub fn color<T: Display + ?Sized>(item: &T, def: &StyleDef) -> String {
    color_with(&AnsiRenderer, item, def)
}

/// [`color`] with an explicit renderer.
pub fn color_with<R, T>(renderer: &R, item: &T, def: &StyleDef) -> String
where
    R: Render + ?Sized,
    T: Display + ?Sized,
{
    renderer.render_def(&item.to_string(), def)
}

/// Parse `specs` and render `item` in one step.
///
/// # Examples
///
/// ```
/// use styling::{styled, Overrides};
///
/// let out = styled("warning", &["yellow+bold"], &Overrides::new()).unwrap();
/// assert!(out.contains("warning"));
/// ```
pub fn styled<T: Display + ?Sized>(item: &T, specs: &[&str], overrides: &Overrides) -> Result<String> {
    styled_with(&AnsiRenderer, item, specs, overrides)
}

/// [`styled`] with an explicit renderer.
pub fn styled_with<R, T>(
    renderer: &R,
    item: &T,
    specs: &[&str],
    overrides: &Overrides,
) -> Result<String>
where
    R: Render + ?Sized,
    T: Display + ?Sized,
{
    let def = styledef(specs, overrides)?;
    Ok(color_with(renderer, item, &def))
}

/// Parse `specs` now and return a function that styles items later.
///
/// # Examples
///
/// ```
/// use styling::{autostyle, Overrides};
///
/// let emphasize = autostyle(&["red+bold"], &Overrides::new()).unwrap();
/// assert_eq!(emphasize(&"a"), emphasize(&"a"));
/// assert!(emphasize(&42).contains("42"));
/// ```
pub fn autostyle(
    specs: &[&str],
    overrides: &Overrides,
) -> Result<impl Fn(&dyn Display) -> String + Send + Sync + use<>> {
    autostyle_with(AnsiRenderer, specs, overrides)
}

/// [`autostyle`] with an explicit renderer, which the returned function owns.
pub fn autostyle_with<R>(
    renderer: R,
    specs: &[&str],
    overrides: &Overrides,
) -> Result<impl Fn(&dyn Display) -> String + Send + Sync + use<R>>
where
    R: Render + 'static,
{
    let def = styledef(specs, overrides)?;
    Ok(move |item: &dyn Display| color_with(&renderer, item, &def))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StyleError;

    #[test]
    fn styled_matches_color_of_parsed_def() {
        let def = StyleDef::parse("green,black+underline").unwrap();
        let direct = color("text", &def);
        let one_shot = styled("text", &["green,black+underline"], &Overrides::new()).unwrap();
        assert_eq!(direct, one_shot);
    }

    #[test]
    fn non_string_items_are_displayed() {
        let out = styled(&3.5, &["bold"], &Overrides::new()).unwrap();
        assert!(out.contains("3.5"));
    }

    #[test]
    fn empty_style_passes_item_through() {
        assert_eq!(styled(&7, &[], &Overrides::new()).unwrap(), "7");
    }

    #[test]
    fn parse_errors_propagate() {
        let err = styled("x", &["red", "bogus"], &Overrides::new()).unwrap_err();
        assert_eq!(err, StyleError::InvalidToken("bogus".into()));
        assert!(autostyle(&["red,green,blue"], &Overrides::new()).is_err());
    }

    #[test]
    fn autostyle_is_deterministic() {
        let f = autostyle(&["#ff8000", "italic"], &Overrides::new()).unwrap();
        let first = f(&"item");
        let second = f(&"item");
        assert_eq!(first, second);
        assert_ne!(f(&"other"), first);
    }
}
