//! Terminal text styling from short style specifications.
//!
//! This crate turns human-readable specs like `"red+bold"` or `"white,blue"`
//! into a [`StyleDef`] and renders text with it as ANSI escape sequences.
//!
//! # Spec syntax
//!
//! - Tokens are separated by `|`, `+` or `,` and are case-insensitive.
//! - The first color is the foreground, the second the background. A third
//!   color is an error.
//! - Colors are the eight basic names (`red`, `blue`, ...), CSS color names
//!   (`orange`, `slategray`, ...) and hex codes (`#f80`, `#ff8800`).
//! - Modifiers are `none`, `bold`, `faint`, `italic`, `underline`, `blink`,
//!   `blink2`, `negative`, `concealed` and `crossed`.
//!
//! # Usage
//!
//! ```
//! use styling::{autostyle, styled, styledef, Color, NamedColor, Overrides, Style};
//!
//! // Parse only
//! let def = styledef(&["white,blue", "bold"], &Overrides::new()).unwrap();
//! assert_eq!(def.bg, Some(Color::Named(NamedColor::Blue)));
//!
//! // Parse and render
//! let warning = styled("careful", &["yellow+bold"], &Overrides::new()).unwrap();
//!
//! // Parse once, render many times
//! let error = autostyle(&["red"], &Overrides::new()).unwrap();
//! let lines: Vec<String> = ["a", "b"].iter().map(|s| error(s)).collect();
//!
//! // Reusable, named style object
//! let list = Style::builder().name("list").join(|p| p.join(", ")).build().unwrap();
//! assert_eq!(list.apply_parts(["x", "y"]), "x, y");
//! ```

pub mod apply;
pub mod color;
mod css;
pub mod error;
pub mod modifier;
pub mod relative;
pub mod render;
pub mod style;
pub mod styledef;

// Re-export main types at crate root
pub use apply::{autostyle, autostyle_with, color, color_with, styled, styled_with};
pub use color::{parse_rgb, resolve_color, Color, NamedColor};
pub use error::{ColorParseError, Result, StyleError};
pub use modifier::{Modifier, Modifiers};
pub use relative::Relative;
pub use render::{AnsiRenderer, Render};
pub use style::{Joiner, Style, StyleBuilder};
pub use styledef::{styledef, Override, Overrides, StyleDef};
