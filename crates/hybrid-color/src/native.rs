//! Adapter seam between host color representations and [`Color`].
//!
//! Brightness adjustment and blending are written once against
//! [`NativeColor`]. A host toolkit plugs its own color type in by saying how
//! to decompose it into RGBA channels and how to build it back. Types that
//! cannot always be decomposed (dynamic pairs, pattern fills) return a
//! [`DecompositionError`], and the operations hand the value back untouched.
//!
//! ```rust
//! use hybrid_color::{Color, DecompositionError, NativeColor};
//!
//! /// A host color that is either plain RGB or a named catalog entry.
//! #[derive(Debug, Clone, PartialEq)]
//! enum HostColor {
//!     Rgb(Color),
//!     Catalog(&'static str),
//! }
//!
//! impl NativeColor for HostColor {
//!     fn to_color(&self) -> Result<Color, DecompositionError> {
//!         match self {
//!             HostColor::Rgb(c) => Ok(*c),
//!             HostColor::Catalog(_) => Err(DecompositionError::Unsupported {
//!                 kind: "catalog".into(),
//!             }),
//!         }
//!     }
//!
//!     fn from_color(color: Color) -> Self {
//!         HostColor::Rgb(color)
//!     }
//! }
//!
//! let named = HostColor::Catalog("AccentColor");
//! assert_eq!(hybrid_color::darker(named.clone(), 0.5), named);
//! ```

use crate::color::Color;
use crate::error::DecompositionError;

/// A color representation that can be converted to and from [`Color`].
pub trait NativeColor: Sized {
    /// Decomposes into RGBA channels.
    fn to_color(&self) -> Result<Color, DecompositionError>;

    /// Builds the native representation from RGBA channels.
    fn from_color(color: Color) -> Self;
}

impl NativeColor for Color {
    fn to_color(&self) -> Result<Color, DecompositionError> {
        Ok(*self)
    }

    fn from_color(color: Color) -> Self {
        color
    }
}
