//! Styled terminal output.
//!
//! The styling engine lives in the [`styling`] crate; this crate re-exports
//! it so callers can write `say::styled(...)` or reach the full module tree
//! through `say::styling`.
//!
//! ```
//! use say::{styled, Overrides};
//!
//! let out = styled("done", &["green+bold"], &Overrides::new()).unwrap();
//! assert!(out.contains("done"));
//! ```

pub use styling;

pub use styling::{
    autostyle, color, styled, styledef, AnsiRenderer, Color, Modifier, Modifiers, NamedColor,
    Override, Overrides, Relative, Render, Result, Style, StyleBuilder, StyleDef, StyleError,
};
