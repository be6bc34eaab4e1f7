//! Light/dark color pairs.
//!
//! A [`DynamicColor`] holds one color per [`AppearanceMode`] and resolves to
//! one of them when asked. Resolution is a pure function of the mode; the
//! host is responsible for resolving again whenever its appearance changes.
//!
//! ```rust
//! use hybrid_color::{AppearanceMode, Color, DynamicColor};
//!
//! let text = DynamicColor::new(Color::BLACK, Color::WHITE);
//! assert_eq!(text.resolve(AppearanceMode::Light), Color::BLACK);
//! assert_eq!(text.resolve(AppearanceMode::Dark), Color::WHITE);
//! ```
//!
//! # Adjusting dynamic colors
//!
//! An unresolved pair has no single set of channels, so
//! [`lighter`](crate::lighter), [`darker`](crate::darker) and
//! [`blend`](crate::blend) hand it back unchanged. Adjust the variants
//! instead, either before pairing them or with [`DynamicColor::map`]:
//!
//! ```rust
//! use hybrid_color::{AppearanceMode, Color, DynamicColor};
//!
//! let accent = DynamicColor::new(Color::hex(0x007aff), Color::hex(0x0a84ff));
//! let pressed = accent.map(|c| c.darker(0.2));
//! assert!(pressed.resolve(AppearanceMode::Dark).brightness()
//!     < accent.resolve(AppearanceMode::Dark).brightness());
//! ```

use serde::{Deserialize, Serialize};

use crate::appearance::{detect_appearance, AppearanceMode};
use crate::color::Color;
use crate::error::DecompositionError;
use crate::native::NativeColor;
use crate::platform::Platform;

/// Returns `dark` in [`AppearanceMode::Dark`], `light` otherwise.
pub fn resolve(light: Color, dark: Color, mode: AppearanceMode) -> Color {
    match mode {
        AppearanceMode::Dark => dark,
        AppearanceMode::Light => light,
    }
}

/// A color defined per appearance mode and resolved at use time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DynamicColor {
    /// Variant used in light mode.
    pub light: Color,
    /// Variant used in dark mode.
    pub dark: Color,
}

impl DynamicColor {
    /// White in light mode, black in dark mode. Suited to backgrounds.
    pub const BLACK_OR_WHITE: Self = Self::new(Color::WHITE, Color::BLACK);

    /// Black in light mode, white in dark mode. Suited to foreground text.
    pub const WHITE_OR_BLACK: Self = Self::new(Color::BLACK, Color::WHITE);

    /// Pairs a light-mode and a dark-mode color.
    pub const fn new(light: Color, dark: Color) -> Self {
        Self { light, dark }
    }

    /// The same color in both modes.
    pub const fn uniform(color: Color) -> Self {
        Self::new(color, color)
    }

    /// Picks the variant for `mode`.
    pub fn resolve(&self, mode: AppearanceMode) -> Color {
        resolve(self.light, self.dark, mode)
    }

    /// Resolves against [`detect_appearance`].
    pub fn resolve_current(&self) -> Color {
        self.resolve(detect_appearance())
    }

    /// Applies `f` to both variants.
    pub fn map<F>(self, mut f: F) -> Self
    where
        F: FnMut(Color) -> Color,
    {
        Self::new(f(self.light), f(self.dark))
    }

    /// Whether both variants are the same color.
    pub fn is_uniform(&self) -> bool {
        self.light == self.dark
    }
}

impl From<Color> for DynamicColor {
    fn from(color: Color) -> Self {
        Self::uniform(color)
    }
}

impl From<(Color, Color)> for DynamicColor {
    fn from((light, dark): (Color, Color)) -> Self {
        Self::new(light, dark)
    }
}

impl NativeColor for DynamicColor {
    fn to_color(&self) -> Result<Color, DecompositionError> {
        Err(DecompositionError::Unresolved)
    }

    fn from_color(color: Color) -> Self {
        Self::uniform(color)
    }
}

// Background hierarchy. Primary is the overall view, secondary groups
// content within it, tertiary groups content within secondary elements.

const IOS_BACKGROUND: DynamicColor = DynamicColor::BLACK_OR_WHITE;
const IOS_SECONDARY_BACKGROUND: DynamicColor = DynamicColor::new(
    Color::from_raw(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0, 1.0),
    Color::from_raw(28.0 / 255.0, 28.0 / 255.0, 30.0 / 255.0, 1.0),
);
const IOS_TERTIARY_BACKGROUND: DynamicColor = DynamicColor::new(
    Color::WHITE,
    Color::from_raw(44.0 / 255.0, 44.0 / 255.0, 46.0 / 255.0, 1.0),
);

// macOS: window, under-page and control backgrounds.
const MACOS_BACKGROUND: DynamicColor = DynamicColor::new(
    Color::from_raw(236.0 / 255.0, 236.0 / 255.0, 236.0 / 255.0, 1.0),
    Color::from_raw(50.0 / 255.0, 50.0 / 255.0, 50.0 / 255.0, 1.0),
);
const MACOS_SECONDARY_BACKGROUND: DynamicColor = DynamicColor::new(
    Color::from_raw(227.0 / 255.0, 227.0 / 255.0, 227.0 / 255.0, 1.0),
    Color::from_raw(40.0 / 255.0, 40.0 / 255.0, 40.0 / 255.0, 1.0),
);
const MACOS_TERTIARY_BACKGROUND: DynamicColor = DynamicColor::new(
    Color::WHITE,
    Color::from_raw(30.0 / 255.0, 30.0 / 255.0, 30.0 / 255.0, 1.0),
);

/// Background for the overall view.
pub fn background(platform: Platform) -> DynamicColor {
    match platform {
        Platform::Ios => IOS_BACKGROUND,
        Platform::MacOs => MACOS_BACKGROUND,
    }
}

/// Background for content grouped within the overall view.
pub fn secondary_background(platform: Platform) -> DynamicColor {
    match platform {
        Platform::Ios => IOS_SECONDARY_BACKGROUND,
        Platform::MacOs => MACOS_SECONDARY_BACKGROUND,
    }
}

/// Background for content grouped within secondary elements.
pub fn tertiary_background(platform: Platform) -> DynamicColor {
    match platform {
        Platform::Ios => IOS_TERTIARY_BACKGROUND,
        Platform::MacOs => MACOS_TERTIARY_BACKGROUND,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{blend, darker, lighter};
    use serial_test::serial;

    #[test]
    fn test_resolve_picks_variant() {
        let light = Color::hex(0xff0000);
        let dark = Color::hex(0x0000ff);
        assert_eq!(resolve(light, dark, AppearanceMode::Light), light);
        assert_eq!(resolve(light, dark, AppearanceMode::Dark), dark);
    }

    #[test]
    fn test_black_or_white_pairs() {
        let bw = DynamicColor::BLACK_OR_WHITE;
        assert_eq!(bw.resolve(AppearanceMode::Light), Color::WHITE);
        assert_eq!(bw.resolve(AppearanceMode::Dark), Color::BLACK);

        let wb = DynamicColor::WHITE_OR_BLACK;
        assert_eq!(wb.resolve(AppearanceMode::Light), Color::BLACK);
        assert_eq!(wb.resolve(AppearanceMode::Dark), Color::WHITE);
    }

    #[test]
    fn test_uniform() {
        let gray = DynamicColor::uniform(Color::DARK_GRAY);
        assert!(gray.is_uniform());
        assert_eq!(gray.resolve(AppearanceMode::Dark), Color::DARK_GRAY);
        assert_eq!(DynamicColor::from(Color::DARK_GRAY), gray);
    }

    #[test]
    fn test_map_applies_to_both_variants() {
        let pair = DynamicColor::new(Color::rgb(0.5, 0.5, 0.5), Color::rgb(0.2, 0.2, 0.2));
        let lighter_pair = pair.map(|c| c.lighter(0.5));
        assert!(lighter_pair.light.brightness() > pair.light.brightness());
        assert!(lighter_pair.dark.brightness() > pair.dark.brightness());
    }

    #[test]
    fn test_adjusting_unresolved_pair_is_a_no_op() {
        let pair = DynamicColor::new(Color::hex(0x336699), Color::hex(0x99ccff));
        assert_eq!(pair.to_color(), Err(DecompositionError::Unresolved));
        assert_eq!(lighter(pair, 0.5), pair);
        assert_eq!(darker(pair, 0.5), pair);
        assert_eq!(blend(pair, &DynamicColor::BLACK_OR_WHITE, 0.5), pair);
    }

    #[test]
    fn test_background_triads() {
        for platform in Platform::ALL {
            for bg in [
                background(platform),
                secondary_background(platform),
                tertiary_background(platform),
            ] {
                assert!(bg.light.is_opaque() && bg.dark.is_opaque());
                assert!(bg.light.brightness() > bg.dark.brightness());
            }
        }
        assert_eq!(background(Platform::Ios), DynamicColor::BLACK_OR_WHITE);
        assert_eq!(
            secondary_background(Platform::Ios).dark,
            Color::hex(0x1c1c1e)
        );
    }

    #[test]
    #[serial]
    fn test_resolve_current_uses_detector() {
        let pair = DynamicColor::WHITE_OR_BLACK;
        crate::set_appearance_detector(|| AppearanceMode::Dark);
        assert_eq!(pair.resolve_current(), Color::WHITE);
        crate::set_appearance_detector(|| AppearanceMode::Light);
        assert_eq!(pair.resolve_current(), Color::BLACK);
        crate::reset_appearance_detector();
    }
}
