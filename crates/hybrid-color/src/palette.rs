//! System gray palettes.
//!
//! Six levels of gray per platform family, each with a light and a dark
//! variant. Level 1 ([`SystemGray::Gray`]) is the same in both modes; levels
//! 2 through 6 get progressively lighter in light mode and progressively
//! darker in dark mode, so higher levels sit closer to the background.
//!
//! | Level | macOS light        | macOS dark         | iOS light | iOS dark |
//! |-------|--------------------|--------------------|-----------|----------|
//! | 1     | (0.56, 0.56, 0.58) | (0.56, 0.56, 0.58) | `#8e8e93` | `#8e8e93`|
//! | 2     | (0.68, 0.68, 0.70) | (0.39, 0.39, 0.40) | `#aeaeb2` | `#636366`|
//! | 3     | (0.78, 0.78, 0.80) | (0.28, 0.28, 0.29) | `#c7c7cc` | `#48484a`|
//! | 4     | (0.82, 0.82, 0.84) | (0.23, 0.23, 0.24) | `#d1d1d6` | `#3a3a3c`|
//! | 5     | (0.90, 0.90, 0.92) | (0.17, 0.17, 0.18) | `#e5e5ea` | `#2c2c2e`|
//! | 6     | (0.95, 0.95, 0.97) | (0.11, 0.11, 0.12) | `#f2f2f7` | `#1c1c1e`|
//!
//! ```rust
//! use hybrid_color::{AppearanceMode, Color, Platform, SystemGray};
//!
//! let fill = SystemGray::Gray6.dynamic(Platform::Ios);
//! assert_eq!(fill.resolve(AppearanceMode::Dark), Color::hex(0x1c1c1e));
//! ```

use serde::{Deserialize, Serialize};

use crate::appearance::AppearanceMode;
use crate::color::Color;
use crate::dynamic::DynamicColor;
use crate::platform::Platform;

/// A level in the system gray palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemGray {
    /// Level 1, identical in light and dark mode.
    Gray,
    /// Level 2.
    Gray2,
    /// Level 3.
    Gray3,
    /// Level 4.
    Gray4,
    /// Level 5.
    Gray5,
    /// Level 6, closest to the background.
    Gray6,
}

impl SystemGray {
    /// All levels, in order.
    pub const ALL: [SystemGray; 6] = [
        SystemGray::Gray,
        SystemGray::Gray2,
        SystemGray::Gray3,
        SystemGray::Gray4,
        SystemGray::Gray5,
        SystemGray::Gray6,
    ];

    /// Level for a 1-based index; `None` outside `1..=6`.
    pub fn from_index(index: u8) -> Option<Self> {
        let slot = usize::from(index).checked_sub(1)?;
        Self::ALL.get(slot).copied()
    }

    /// 1-based index of this level.
    pub fn index(self) -> u8 {
        self as u8 + 1
    }

    /// The light/dark pair for this level on `platform`.
    pub fn dynamic(self, platform: Platform) -> DynamicColor {
        let table = match platform {
            Platform::Ios => &IOS_GRAYS,
            Platform::MacOs => &MACOS_GRAYS,
        };
        table[self as usize]
    }

    /// The concrete color for this level on `platform` in `mode`.
    pub fn color(self, platform: Platform, mode: AppearanceMode) -> Color {
        self.dynamic(platform).resolve(mode)
    }
}

/// Looks up a system gray by platform, level and appearance.
pub fn system_gray(platform: Platform, shade: SystemGray, mode: AppearanceMode) -> Color {
    shade.color(platform, mode)
}

const fn gray(r: f64, g: f64, b: f64) -> Color {
    Color::from_raw(r, g, b, 1.0)
}

const fn pair(light: Color, dark: Color) -> DynamicColor {
    DynamicColor::new(light, dark)
}

const MACOS_GRAY: Color = gray(0.56, 0.56, 0.58);

const MACOS_GRAYS: [DynamicColor; 6] = [
    pair(MACOS_GRAY, MACOS_GRAY),
    pair(gray(0.68, 0.68, 0.7), gray(0.39, 0.39, 0.4)),
    pair(gray(0.78, 0.78, 0.8), gray(0.28, 0.28, 0.29)),
    pair(gray(0.82, 0.82, 0.84), gray(0.23, 0.23, 0.24)),
    pair(gray(0.9, 0.9, 0.92), gray(0.17, 0.17, 0.18)),
    pair(gray(0.95, 0.95, 0.97), gray(0.11, 0.11, 0.12)),
];

const IOS_GRAY: Color = gray(142.0 / 255.0, 142.0 / 255.0, 147.0 / 255.0);

const IOS_GRAYS: [DynamicColor; 6] = [
    pair(IOS_GRAY, IOS_GRAY),
    pair(
        gray(174.0 / 255.0, 174.0 / 255.0, 178.0 / 255.0),
        gray(99.0 / 255.0, 99.0 / 255.0, 102.0 / 255.0),
    ),
    pair(
        gray(199.0 / 255.0, 199.0 / 255.0, 204.0 / 255.0),
        gray(72.0 / 255.0, 72.0 / 255.0, 74.0 / 255.0),
    ),
    pair(
        gray(209.0 / 255.0, 209.0 / 255.0, 214.0 / 255.0),
        gray(58.0 / 255.0, 58.0 / 255.0, 60.0 / 255.0),
    ),
    pair(
        gray(229.0 / 255.0, 229.0 / 255.0, 234.0 / 255.0),
        gray(44.0 / 255.0, 44.0 / 255.0, 46.0 / 255.0),
    ),
    pair(
        gray(242.0 / 255.0, 242.0 / 255.0, 247.0 / 255.0),
        gray(28.0 / 255.0, 28.0 / 255.0, 30.0 / 255.0),
    ),
];
