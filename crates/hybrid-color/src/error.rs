//! Error types.
//!
//! Only two things can go wrong in this crate, and only one of them ever
//! reaches the caller of the color operations:
//!
//! - [`DecompositionError`]: a color value cannot be reduced to RGBA
//!   channels. Brightness adjustment and blending recover from it locally by
//!   returning the input unchanged, so it is only visible through
//!   [`NativeColor::to_color`](crate::NativeColor::to_color).
//! - [`ParseColorError`]: a hex *string* is malformed. Integer hex
//!   construction is total and never fails.

use thiserror::Error;

/// A color could not be decomposed into red, green, blue and alpha channels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompositionError {
    /// The value is a light/dark pair that has not been resolved against an
    /// [`AppearanceMode`](crate::AppearanceMode) yet.
    #[error("dynamic color must be resolved before it can be decomposed")]
    Unresolved,

    /// A host color representation that has no RGB form (patterns, named
    /// catalog colors, and the like).
    #[error("{kind} colors cannot be decomposed into RGBA channels")]
    Unsupported {
        /// Short description of the host color kind.
        kind: String,
    },
}

/// Error returned when parsing a hex color string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// The input was empty (or only `#`).
    #[error("empty color string")]
    Empty,

    /// The number of hex digits is not 3, 6 or 8.
    #[error("invalid hex color '{input}': expected 3, 6 or 8 digits, got {len}")]
    InvalidLength {
        /// The offending input, as given.
        input: String,
        /// Number of digits after stripping the `#` prefix.
        len: usize,
    },

    /// A character is not a hexadecimal digit.
    #[error("invalid hex color '{input}': '{digit}' is not a hex digit")]
    InvalidDigit {
        /// The offending input, as given.
        input: String,
        /// The first character that failed to parse.
        digit: char,
    },
}
