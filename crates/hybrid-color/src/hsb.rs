//! Hue/saturation/brightness decomposition and brightness adjustment.
//!
//! Lightening and darkening scale only the brightness (HSB "value") of a
//! color and keep hue, saturation and alpha:
//!
//! ```text
//! (r, g, b, a) -> (h, s, v, a) -> (h, s, clamp(v * factor), a) -> (r', g', b', a)
//! ```
//!
//! [`lighter`] uses `factor = 1 + amount`, [`darker`] uses
//! `factor = 1 - amount`. Brightness saturates at 1.0 and floors at 0.0, so
//! repeated lightening ends at the brightest color of that hue, not at a
//! wrapped-around value.
//!
//! Adjustment is best-effort. If the input cannot be decomposed (see
//! [`NativeColor`]), it is returned unchanged.

use crate::color::{clamp_unit, Color};
use crate::native::NativeColor;

/// Amount used by [`Color::lighter`] and [`Color::darker`] when the caller
/// has no preference.
pub const DEFAULT_AMOUNT: f64 = 0.25;

/// A color in hue/saturation/brightness form, all components in `[0, 1]`.
///
/// `hue` is a fraction of a full turn (0.0 = red, 1/3 = green, 2/3 = blue).
/// For grays the hue is meaningless and reported as `0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsba {
    hue: f64,
    saturation: f64,
    brightness: f64,
    alpha: f64,
}

/// Wraps a hue into `[0, 1)`. Non-finite hues map to `0.0`.
fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let hue = hue.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negatives
    if hue >= 1.0 {
        0.0
    } else {
        hue
    }
}

impl Hsba {
    /// Creates an HSB color. Hue wraps around; the rest are clamped.
    pub fn new(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
            alpha: clamp_unit(alpha),
        }
    }

    /// Hue as a fraction of a turn, `[0, 1)`.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Saturation, `[0, 1]`.
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Brightness (HSB value), `[0, 1]`.
    pub fn brightness(&self) -> f64 {
        self.brightness
    }

    /// Alpha, `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Returns a copy with the given brightness, clamped to `[0, 1]`.
    pub fn with_brightness(self, brightness: f64) -> Self {
        Self {
            brightness: clamp_unit(brightness),
            ..self
        }
    }

    /// Decomposes an RGBA color.
    pub fn from_color(color: Color) -> Self {
        let [r, g, b, a] = color.channels();
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max <= 0.0 { 0.0 } else { delta / max };

        let sixths = if delta <= 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Self::new(sixths / 6.0, saturation, max, a)
    }

    /// Rebuilds the RGBA color.
    pub fn to_color(self) -> Color {
        let Hsba {
            hue,
            saturation,
            brightness,
            alpha,
        } = self;
        let s = clamp_unit(saturation);
        let v = clamp_unit(brightness);

        let sixths = wrap_hue(hue) * 6.0;
        let sector = sixths.floor();
        let f = sixths - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - f * s);
        let t = v * (1.0 - (1.0 - f) * s);

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Color::rgba(r, g, b, alpha)
    }
}

impl From<Color> for Hsba {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}

impl From<Hsba> for Color {
    fn from(hsba: Hsba) -> Self {
        hsba.to_color()
    }
}

/// Scales the brightness of `color` by `factor`.
///
/// The new brightness is clamped to `[0, 1]`; a negative or NaN factor acts
/// like `0.0`. A factor of exactly `1.0` returns the input untouched. When
/// the color cannot be decomposed the input is returned unchanged.
pub fn adjust_brightness<C: NativeColor>(color: C, factor: f64) -> C {
    let rgba = match color.to_color() {
        Ok(rgba) => rgba,
        Err(err) => {
            log::debug!("brightness adjustment skipped: {}", err);
            return color;
        }
    };

    if factor == 1.0 {
        return color;
    }

    let factor = if factor.is_nan() { 0.0 } else { factor.max(0.0) };
    let hsba = Hsba::from_color(rgba);
    let adjusted = hsba.with_brightness(hsba.brightness * factor);
    C::from_color(adjusted.to_color())
}

/// Lightens by `amount` (`[0, 1]`, clamped): brightness is multiplied by
/// `1 + amount`.
pub fn lighter<C: NativeColor>(color: C, amount: f64) -> C {
    adjust_brightness(color, 1.0 + clamp_unit(amount))
}

/// Darkens by `amount` (`[0, 1]`, clamped): brightness is multiplied by
/// `1 - amount`.
pub fn darker<C: NativeColor>(color: C, amount: f64) -> C {
    adjust_brightness(color, 1.0 - clamp_unit(amount))
}

impl Color {
    /// Decomposes into hue, saturation, brightness and alpha.
    pub fn to_hsba(self) -> Hsba {
        Hsba::from_color(self)
    }

    /// Builds a color from HSB components; see [`Hsba::new`].
    pub fn hsba(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        Hsba::new(hue, saturation, brightness, alpha).to_color()
    }

    /// HSB brightness, the largest of the three color channels.
    pub fn brightness(&self) -> f64 {
        self.red().max(self.green()).max(self.blue())
    }

    /// Scales brightness by `factor`; see [`adjust_brightness`].
    pub fn adjust_brightness(self, factor: f64) -> Self {
        adjust_brightness(self, factor)
    }

    /// Lightens by `amount`, `[0, 1]`.
    ///
    /// ```rust
    /// use hybrid_color::Color;
    ///
    /// let base = Color::rgb(0.4, 0.2, 0.2);
    /// let light = base.lighter(0.5);
    /// assert!((light.red() - 0.6).abs() < 1e-9);
    /// assert_eq!(light.alpha(), base.alpha());
    /// ```
    pub fn lighter(self, amount: f64) -> Self {
        lighter(self, amount)
    }

    /// Darkens by `amount`, `[0, 1]`.
    pub fn darker(self, amount: f64) -> Self {
        darker(self, amount)
    }

    /// Lightens by [`DEFAULT_AMOUNT`].
    pub fn lightened(self) -> Self {
        lighter(self, DEFAULT_AMOUNT)
    }

    /// Darkens by [`DEFAULT_AMOUNT`].
    pub fn darkened(self) -> Self {
        darker(self, DEFAULT_AMOUNT)
    }
}
