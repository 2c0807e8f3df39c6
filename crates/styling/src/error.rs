//! Error types for style parsing.

use thiserror::Error;

/// Errors that can occur when parsing a style specification.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A single spec string named more than a foreground and a background color.
    #[error("only fg and bg colors allowed: {token:?} is a third color in {spec:?}")]
    TooManyColors {
        /// The offending (third) color token.
        token: String,
        /// The normalized spec string it appeared in.
        spec: String,
    },

    /// Token is neither a known color nor a known style modifier.
    #[error("invalid style token: {0:?}")]
    InvalidToken(String),
}

/// Errors that can occur when resolving a color specification to RGB.
///
/// The spec parser never surfaces these: a token that fails to resolve is
/// simply not a color.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Not a CSS color name and not a hex code.
    #[error("could not parse color {0:?}")]
    UnknownName(String),

    /// Looked like a hex code but was malformed.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Result alias for style parsing.
pub type Result<T> = std::result::Result<T, StyleError>;
