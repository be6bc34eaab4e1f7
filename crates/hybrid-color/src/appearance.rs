//! Appearance modes and optional appearance detection.
//!
//! Color resolution in this crate never looks up the appearance on its own:
//! callers pass an [`AppearanceMode`] to
//! [`DynamicColor::resolve`](crate::DynamicColor::resolve). Host toolkits
//! already know their appearance and should pass it straight through.
//!
//! For hosts without such a signal (terminal programs, tests),
//! [`detect_appearance`] offers a replaceable detector:
//!
//! 1. `HYBRID_COLOR_APPEARANCE=dark|light` in the environment wins.
//! 2. Otherwise the OS preference is queried through `dark-light`.
//! 3. If the OS gives no answer, [`AppearanceMode::Light`] is used.
//!
//! Override it for testing with [`set_appearance_detector`]:
//!
//! ```rust
//! use hybrid_color::{detect_appearance, set_appearance_detector, AppearanceMode};
//!
//! set_appearance_detector(|| AppearanceMode::Dark);
//! assert_eq!(detect_appearance(), AppearanceMode::Dark);
//! # hybrid_color::reset_appearance_detector();
//! ```

use std::sync::Mutex;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Environment variable consulted by the default detector.
pub const APPEARANCE_ENV_VAR: &str = "HYBRID_COLOR_APPEARANCE";

/// The light/dark appearance a dynamic color is resolved against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    /// Light appearance (light backgrounds, dark text).
    #[default]
    Light,
    /// Dark appearance (dark backgrounds, light text).
    Dark,
}

impl AppearanceMode {
    /// Whether this is [`AppearanceMode::Dark`].
    pub fn is_dark(self) -> bool {
        self == AppearanceMode::Dark
    }

    /// Parses `"light"` or `"dark"`, ignoring case and surrounding space.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        if name.eq_ignore_ascii_case("dark") {
            Some(AppearanceMode::Dark)
        } else if name.eq_ignore_ascii_case("light") {
            Some(AppearanceMode::Light)
        } else {
            None
        }
    }
}

type AppearanceDetector = fn() -> AppearanceMode;

static APPEARANCE_DETECTOR: Lazy<Mutex<AppearanceDetector>> =
    Lazy::new(|| Mutex::new(default_appearance_detector));

/// Replaces the detector used by [`detect_appearance`].
pub fn set_appearance_detector(detector: AppearanceDetector) {
    log::trace!("appearance detector overridden");
    let mut guard = APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = detector;
}

/// Restores the default detector (environment, then OS, then Light).
pub fn reset_appearance_detector() {
    set_appearance_detector(default_appearance_detector);
}

/// Returns the current appearance according to the configured detector.
pub fn detect_appearance() -> AppearanceMode {
    let detector = *APPEARANCE_DETECTOR
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    detector()
}

fn default_appearance_detector() -> AppearanceMode {
    env_appearance().unwrap_or_else(os_appearance)
}

/// Reads [`APPEARANCE_ENV_VAR`]. Unset or unrecognized values yield `None`.
fn env_appearance() -> Option<AppearanceMode> {
    let value = std::env::var(APPEARANCE_ENV_VAR).ok()?;
    let mode = AppearanceMode::from_name(&value);
    if mode.is_none() {
        log::debug!(
            "ignoring {}={:?}: expected 'light' or 'dark'",
            APPEARANCE_ENV_VAR,
            value
        );
    }
    mode
}

fn os_appearance() -> AppearanceMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Dark) => AppearanceMode::Dark,
        Ok(_) => AppearanceMode::Light,
        Err(err) => {
            log::debug!("OS appearance detection failed, using light: {}", err);
            AppearanceMode::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_is_light() {
        assert_eq!(AppearanceMode::default(), AppearanceMode::Light);
        assert!(!AppearanceMode::Light.is_dark());
        assert!(AppearanceMode::Dark.is_dark());
    }

    #[test]
    fn test_from_name() {
        assert_eq!(AppearanceMode::from_name("dark"), Some(AppearanceMode::Dark));
        assert_eq!(AppearanceMode::from_name(" LIGHT "), Some(AppearanceMode::Light));
        assert_eq!(AppearanceMode::from_name("Dark"), Some(AppearanceMode::Dark));
        assert_eq!(AppearanceMode::from_name("sepia"), None);
    }

    #[test]
    #[serial]
    fn test_set_appearance_detector_override() {
        set_appearance_detector(|| AppearanceMode::Dark);
        assert_eq!(detect_appearance(), AppearanceMode::Dark);

        set_appearance_detector(|| AppearanceMode::Light);
        assert_eq!(detect_appearance(), AppearanceMode::Light);

        reset_appearance_detector();
    }

    #[test]
    #[serial]
    fn test_env_var_wins_over_os() {
        reset_appearance_detector();
        std::env::set_var(APPEARANCE_ENV_VAR, "dark");
        assert_eq!(detect_appearance(), AppearanceMode::Dark);

        std::env::set_var(APPEARANCE_ENV_VAR, "Light");
        assert_eq!(detect_appearance(), AppearanceMode::Light);
        std::env::remove_var(APPEARANCE_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_unrecognized_env_value_is_ignored() {
        std::env::set_var(APPEARANCE_ENV_VAR, "sepia");
        assert_eq!(env_appearance(), None);
        std::env::remove_var(APPEARANCE_ENV_VAR);
        assert_eq!(env_appearance(), None);
    }
}
