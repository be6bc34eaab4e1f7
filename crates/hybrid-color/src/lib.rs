//! # Hybrid Color - adaptive colors for light and dark interfaces
//!
//! `hybrid-color` is a small set of conveniences around a UI color value:
//!
//! - [`DynamicColor`]: a light/dark pair resolved against an [`AppearanceMode`]
//! - [`SystemGray`]: per-platform system gray palettes, six levels each
//! - [`Color::from_hex`]: construction from `0xRRGGBB` integers (and strings)
//! - [`lighter`] / [`darker`]: brightness adjustment in HSB space
//! - [`blend`]: linear interpolation between two colors
//!
//! Every operation is a pure function over immutable values. The crate never
//! tracks the current appearance; the host passes it in when resolving.
//!
//! ## Quick Start
//!
//! ```rust
//! use hybrid_color::{AppearanceMode, Color, DynamicColor, Platform, SystemGray};
//!
//! let brand = Color::from_hex(0x007aff, 1.0);
//!
//! // Lighten and darken by scaling HSB brightness
//! let hover = brand.lighter(0.1);
//! let pressed = brand.darker(0.2);
//! assert!(pressed.brightness() < brand.brightness());
//!
//! // A pair that follows the interface style
//! let separator = DynamicColor::new(brand.blend(Color::WHITE, 0.8), pressed);
//! let on_dark = separator.resolve(AppearanceMode::Dark);
//! assert_eq!(on_dark, pressed);
//!
//! // Platform gray palette
//! let fill = SystemGray::Gray5.color(Platform::MacOs, AppearanceMode::Light);
//! assert!(fill.is_opaque());
//! # let _ = hover;
//! ```
//!
//! ## Host Color Types
//!
//! Brightness adjustment and blending accept any type implementing
//! [`NativeColor`]. A conversion that fails (for example an unresolved
//! [`DynamicColor`]) is not an error: the input comes back unchanged.
//!
//! ## Appearance Detection
//!
//! Hosts that have no appearance signal of their own can use
//! [`detect_appearance`], which honors the `HYBRID_COLOR_APPEARANCE`
//! environment variable and otherwise asks the OS. Tests can swap the
//! detector with [`set_appearance_detector`].
//!
//! ## Logging
//!
//! Recoverable fallbacks are reported through the [`log`] facade at `debug`
//! level. The crate never installs a logger.

mod appearance;
mod blend;
mod color;
mod dynamic;
mod error;
mod hex;
mod hsb;
mod native;
mod palette;
mod platform;

pub use appearance::{
    detect_appearance, reset_appearance_detector, set_appearance_detector, AppearanceMode,
    APPEARANCE_ENV_VAR,
};
pub use blend::blend;
pub use color::Color;
pub use dynamic::{
    background, resolve, secondary_background, tertiary_background, DynamicColor,
};
pub use error::{DecompositionError, ParseColorError};
pub use hex::from_hex;
pub use hsb::{adjust_brightness, darker, lighter, Hsba, DEFAULT_AMOUNT};
pub use native::NativeColor;
pub use palette::{system_gray, SystemGray};
pub use platform::Platform;
