//! Platform families with their own system color conventions.

use serde::{Deserialize, Serialize};

/// The platform family whose system palette is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Apple's mobile conventions (UIKit system colors).
    Ios,
    /// Apple's desktop conventions (AppKit system colors).
    #[serde(rename = "macos")]
    MacOs,
}

impl Platform {
    /// Both families, in declaration order.
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::MacOs];

    /// The family matching the compilation target.
    #[cfg(target_os = "macos")]
    pub const fn current() -> Self {
        Platform::MacOs
    }

    /// The family matching the compilation target.
    ///
    /// Everything that is not macOS follows the mobile conventions.
    #[cfg(not(target_os = "macos"))]
    pub const fn current() -> Self {
        Platform::Ios
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}
