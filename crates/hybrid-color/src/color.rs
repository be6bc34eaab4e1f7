//! The [`Color`] value type.
//!
//! A `Color` is four normalized channels (red, green, blue, alpha), each
//! kept in `[0, 1]`. Every constructor clamps its inputs, so no operation in
//! this crate can observe an out-of-range channel. Values are `Copy` and
//! immutable; operations like [`lighter`](Color::lighter) or
//! [`blend`](Color::blend) return new colors.
//!
//! # Example
//!
//! ```rust
//! use hybrid_color::Color;
//!
//! let orange = Color::rgb(1.0, 0.42, 0.21);
//! assert_eq!(orange.alpha(), 1.0);
//!
//! // Out-of-range input is clamped, never rejected
//! let clamped = Color::rgba(1.5, -0.2, 0.5, 2.0);
//! assert_eq!(clamped.red(), 1.0);
//! assert_eq!(clamped.green(), 0.0);
//! assert_eq!(clamped.alpha(), 1.0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGBA color with channels normalized to `[0, 1]`.
///
/// Serializes as a hex string (`"#rrggbb"`, or `"#rrggbbaa"` when not
/// opaque), which quantizes each channel to 8 bits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
}

/// Clamps a channel value into `[0, 1]`. NaN maps to `0.0`.
pub(crate) fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::from_raw(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::from_raw(1.0, 1.0, 1.0, 1.0);

    /// Fully transparent black.
    pub const CLEAR: Self = Self::from_raw(0.0, 0.0, 0.0, 0.0);

    /// A gray with a white level of 1/3.
    pub const DARK_GRAY: Self = Self::from_raw(1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0, 1.0);

    /// A gray with a white level of 2/3.
    pub const LIGHT_GRAY: Self = Self::from_raw(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0, 1.0);

    /// Builds a color from channels the caller guarantees are in range.
    ///
    /// Used for the constant tables, where clamping is not available in a
    /// `const` context.
    pub(crate) const fn from_raw(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from red, green and blue channels.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from red, green, blue and alpha channels.
    ///
    /// Each channel is clamped to `[0, 1]`; NaN becomes `0.0`.
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self {
            r: clamp_unit(r),
            g: clamp_unit(g),
            b: clamp_unit(b),
            a: clamp_unit(a),
        }
    }

    /// Creates a gray from a white level and an alpha.
    pub fn white(level: f64, alpha: f64) -> Self {
        Self::rgba(level, level, level, alpha)
    }

    /// Creates a color from 8-bit red, green and blue components plus a
    /// normalized alpha.
    ///
    /// ```rust
    /// use hybrid_color::Color;
    ///
    /// let c = Color::rgb8(255, 0, 51, 1.0);
    /// assert_eq!(c.red(), 1.0);
    /// assert_eq!(c.blue(), 0.2);
    /// ```
    pub fn rgb8(r: u8, g: u8, b: u8, alpha: f64) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            alpha,
        )
    }

    /// Returns a copy with the given alpha, clamped to `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            a: clamp_unit(alpha),
            ..self
        }
    }

    /// Red channel, `[0, 1]`.
    pub fn red(&self) -> f64 {
        self.r
    }

    /// Green channel, `[0, 1]`.
    pub fn green(&self) -> f64 {
        self.g
    }

    /// Blue channel, `[0, 1]`.
    pub fn blue(&self) -> f64 {
        self.b
    }

    /// Alpha channel, `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.a
    }

    /// All four channels as `[r, g, b, a]`.
    pub fn channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a color from `[r, g, b, a]`, clamping each channel.
    pub fn from_channels(channels: [f64; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self::rgba(r, g, b, a)
    }

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Quantizes the RGB channels to 8 bits each.
    pub fn to_rgb8(&self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Formats as `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
    pub fn to_hex_string(&self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, to_u8(self.a))
        }
    }
}

fn to_u8(channel: f64) -> u8 {
    (channel * 255.0).round() as u8
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::rgb8(r, g, b, 1.0)
    }
}
