//! Linear interpolation between two colors.

use crate::color::{clamp_unit, Color};
use crate::native::NativeColor;

/// Interpolates every channel of `base` toward `other` by `fraction`.
///
/// `result = base + (other - base) * fraction`, per channel, alpha included.
/// `fraction` is clamped to `[0, 1]` (NaN counts as `0.0`), so the result
/// never extrapolates past either endpoint. If either color cannot be
/// decomposed, `base` is returned unchanged.
pub fn blend<C: NativeColor>(base: C, other: &C, fraction: f64) -> C {
    let (from, to) = match (base.to_color(), other.to_color()) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(err), _) | (_, Err(err)) => {
            log::debug!("blend skipped: {}", err);
            return base;
        }
    };

    let t = clamp_unit(fraction);
    let from_channels = from.channels();
    let to_channels = to.channels();
    let mut mixed = [0.0; 4];
    for (i, channel) in mixed.iter_mut().enumerate() {
        // Same line as `from + (to - from) * t`, but exact at both endpoints.
        *channel = from_channels[i] * (1.0 - t) + to_channels[i] * t;
    }

    C::from_color(Color::from_channels(mixed))
}

impl Color {
    /// Mixes `fraction` of `other` into this color; see [`blend`].
    ///
    /// ```rust
    /// use hybrid_color::Color;
    ///
    /// let mid = Color::BLACK.blend(Color::WHITE, 0.5);
    /// assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
    /// ```
    pub fn blend(self, other: Color, fraction: f64) -> Self {
        blend(self, &other, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecompositionError;

    #[derive(Debug, Clone, PartialEq)]
    enum HostFill {
        Solid(Color),
        Pattern,
    }

    impl NativeColor for HostFill {
        fn to_color(&self) -> Result<Color, DecompositionError> {
            match self {
                HostFill::Solid(color) => Ok(*color),
                HostFill::Pattern => Err(DecompositionError::Unsupported {
                    kind: "pattern".into(),
                }),
            }
        }

        fn from_color(color: Color) -> Self {
            HostFill::Solid(color)
        }
    }

    #[test]
    fn test_blend_endpoints() {
        let a = Color::rgba(0.1, 0.2, 0.3, 0.4);
        let b = Color::rgba(0.9, 0.7, 0.5, 1.0);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn test_blend_midpoint_is_mean() {
        let a = Color::rgba(0.0, 0.2, 1.0, 0.0);
        let b = Color::rgba(1.0, 0.6, 0.0, 1.0);
        let mid = a.blend(b, 0.5);
        let expected = [0.5, 0.4, 0.5, 0.5];
        for (got, want) in mid.channels().iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-12);
        }
    }

    #[test]
    fn test_blend_interpolates_alpha() {
        let a = Color::WHITE.with_alpha(0.0);
        let b = Color::WHITE;
        assert!((a.blend(b, 0.25).alpha() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_blend_clamps_fraction() {
        let a = Color::rgb(0.2, 0.2, 0.2);
        let b = Color::rgb(0.8, 0.8, 0.8);
        assert_eq!(a.blend(b, -1.0), a);
        assert_eq!(a.blend(b, 2.0), b);
        assert_eq!(a.blend(b, f64::NAN), a);
    }

    #[test]
    fn test_blend_with_undecomposable_other_returns_base() {
        let base = HostFill::Solid(Color::rgb(0.2, 0.4, 0.6));
        assert_eq!(blend(base.clone(), &HostFill::Pattern, 0.5), base);
        assert_eq!(blend(base.clone(), &HostFill::Pattern, 1.0), base);
    }

    #[test]
    fn test_blend_with_undecomposable_base_returns_base() {
        let other = HostFill::Solid(Color::WHITE);
        assert_eq!(blend(HostFill::Pattern, &other, 0.5), HostFill::Pattern);
    }

    #[test]
    fn test_blend_through_host_adapter() {
        let base = HostFill::Solid(Color::BLACK);
        let other = HostFill::Solid(Color::WHITE);
        assert_eq!(
            blend(base, &other, 0.5),
            HostFill::Solid(Color::rgb(0.5, 0.5, 0.5))
        );
    }
}
