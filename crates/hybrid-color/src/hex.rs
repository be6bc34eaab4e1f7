//! Hex construction.
//!
//! Two forms are supported:
//!
//! - A 24-bit integer (`0xff6b35`) plus a separately supplied alpha, via
//!   [`from_hex`] / [`Color::from_hex`]. This is total: masking guarantees
//!   every channel lands in `0..=255`.
//! - A string (`"#ff6b35"`, `"#fff"`, `"#ff6b3580"`, with or without the
//!   `#`), via [`str::parse`]. Malformed strings yield a [`ParseColorError`].
//!
//! ```rust
//! use hybrid_color::Color;
//!
//! let a = Color::from_hex(0xff6b35, 1.0);
//! let b: Color = "#ff6b35".parse().unwrap();
//! assert_eq!(a, b);
//! ```

use std::str::FromStr;

use crate::color::Color;
use crate::error::ParseColorError;

/// Creates a color from a 24-bit `0xRRGGBB` integer and an alpha.
///
/// Bits above the low 24 are ignored. Alpha is clamped to `[0, 1]`.
pub fn from_hex(hex: u32, alpha: f64) -> Color {
    Color::rgb8(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
        alpha,
    )
}

impl Color {
    /// Creates a color from a 24-bit `0xRRGGBB` integer and an alpha.
    ///
    /// ```rust
    /// use hybrid_color::Color;
    ///
    /// let red = Color::from_hex(0xFF0000, 1.0);
    /// assert_eq!(red.channels(), [1.0, 0.0, 0.0, 1.0]);
    /// ```
    pub fn from_hex(hex: u32, alpha: f64) -> Self {
        from_hex(hex, alpha)
    }

    /// Opaque shorthand for [`Color::from_hex`].
    pub fn hex(hex: u32) -> Self {
        from_hex(hex, 1.0)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() {
            return Err(ParseColorError::Empty);
        }

        if let Some(digit) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit {
                input: s.to_string(),
                digit,
            });
        }

        // Digits are ASCII from here on, so byte slicing is safe.
        let byte = |range: std::ops::Range<usize>| -> u8 {
            u8::from_str_radix(&digits[range], 16).unwrap_or_default()
        };

        match digits.len() {
            // #rgb -> #rrggbb
            3 => Ok(Color::rgb8(
                byte(0..1) * 17,
                byte(1..2) * 17,
                byte(2..3) * 17,
                1.0,
            )),
            6 => Ok(Color::rgb8(byte(0..2), byte(2..4), byte(4..6), 1.0)),
            8 => Ok(Color::rgb8(
                byte(0..2),
                byte(2..4),
                byte(4..6),
                f64::from(byte(6..8)) / 255.0,
            )),
            len => Err(ParseColorError::InvalidLength {
                input: s.to_string(),
                len,
            }),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_primaries() {
        assert_eq!(from_hex(0xFF0000, 1.0).channels(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(from_hex(0x00FF00, 1.0).channels(), [0.0, 1.0, 0.0, 1.0]);
        assert_eq!(from_hex(0x0000FF, 1.0).channels(), [0.0, 0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_from_hex_black_and_white() {
        assert_eq!(from_hex(0x000000, 1.0), Color::BLACK);
        assert_eq!(Color::hex(0xFFFFFF), Color::WHITE);
    }

    #[test]
    fn test_from_hex_keeps_alpha() {
        let c = from_hex(0x336699, 0.4);
        assert_eq!(c.alpha(), 0.4);
        assert_eq!(c.to_rgb8(), (0x33, 0x66, 0x99));
    }

    #[test]
    fn test_from_hex_clamps_alpha() {
        assert_eq!(from_hex(0x123456, 1.7).alpha(), 1.0);
        assert_eq!(from_hex(0x123456, -1.0).alpha(), 0.0);
    }

    #[test]
    fn test_from_hex_ignores_high_bits() {
        assert_eq!(from_hex(0xAB_FF0000, 1.0), from_hex(0xFF0000, 1.0));
    }

    #[test]
    fn test_parse_six_digits() {
        let c: Color = "#ff6b35".parse().unwrap();
        assert_eq!(c.to_rgb8(), (255, 107, 53));
        let bare: Color = "ff6b35".parse().unwrap();
        assert_eq!(bare, c);
    }

    #[test]
    fn test_parse_three_digits() {
        let c: Color = "#fff".parse().unwrap();
        assert_eq!(c, Color::WHITE);
        let c: Color = "#f00".parse().unwrap();
        assert_eq!(c, Color::hex(0xFF0000));
    }

    #[test]
    fn test_parse_eight_digits_carries_alpha() {
        let c: Color = "#00000000".parse().unwrap();
        assert_eq!(c, Color::CLEAR);
        let c: Color = "#ff000080".parse().unwrap();
        assert!((c.alpha() - 128.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        let c: Color = "  #FF6B35 ".parse().unwrap();
        assert_eq!(c.to_rgb8(), (255, 107, 53));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Color>(), Err(ParseColorError::Empty));
        assert_eq!("#".parse::<Color>(), Err(ParseColorError::Empty));
        assert!(matches!(
            "#ff".parse::<Color>(),
            Err(ParseColorError::InvalidLength { len: 2, .. })
        ));
        assert!(matches!(
            "#ff6b3g".parse::<Color>(),
            Err(ParseColorError::InvalidDigit { digit: 'g', .. })
        ));
        assert!(matches!(
            "#ffé".parse::<Color>(),
            Err(ParseColorError::InvalidDigit { digit: 'é', .. })
        ));
    }

    #[test]
    fn test_hex_string_roundtrip() {
        let c = Color::hex(0x1c1c1e);
        assert_eq!(c.to_hex_string().parse::<Color>().unwrap(), c);
    }
}
