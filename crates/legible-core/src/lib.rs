//! # legible-core
//!
//! Core color types for WCAG contrast tuning.
//!
//! This crate provides the value types shared by every other legible crate:
//!
//! - [`Rgb`], [`Rgba`] - 8-bit sRGB, the only input the tuning core accepts
//! - [`Oklab`], [`Oklch`] - perceptual coordinates the search operates in
//! - [`Xyz`], [`Lab`] - CIE coordinates behind the CIEDE2000 metric
//! - [`Error`] - invalid color input (range, arity, syntax)
//!
//! ## Crate Structure
//!
//! This crate has no internal dependencies. Everything else builds on it:
//!
//! ```text
//! legible-core (this crate)
//!    ^
//!    |
//!    +-- legible-math (matrices)
//!    +-- legible-transfer (sRGB / WCAG linearization)
//!    +-- legible-color (conversions, CIEDE2000, contrast)
//!    +-- legible-parse (textual color input)
//!    +-- legible-tune (search and strategies)
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` - Serialize/deserialize all color types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod rgb;
pub mod space;

pub use error::{Error, Result};
pub use rgb::{Rgb, Rgba};
pub use space::{ACHROMATIC_CHROMA, Lab, Oklab, Oklch, Xyz};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use legible_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::rgb::{Rgb, Rgba};
    pub use crate::space::{Lab, Oklab, Oklch, Xyz};
}
