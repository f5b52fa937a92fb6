//! # legible-transfer
//!
//! Transfer functions between encoded sRGB and linear light.
//!
//! | Module | Use | Threshold |
//! |--------|-----|-----------|
//! | [`srgb`] | OKLab / CIELAB conversions, both directions | 0.04045 / 0.0031308 |
//! | [`wcag`] | Relative luminance for contrast ratios, decode only | 0.03928 |
//!
//! # Usage
//!
//! ```rust
//! use legible_transfer::{srgb, wcag};
//!
//! let linear = srgb::eotf(0.5);
//! let encoded = srgb::oetf(linear);
//! assert!((encoded - 0.5).abs() < 1e-12);
//!
//! let y = wcag::linearize_u8(255);
//! assert!((y - 1.0).abs() < 1e-12);
//! ```
//!
//! # Used By
//!
//! - `legible-color` - color space conversions and the contrast model

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod srgb;
pub mod wcag;

pub use srgb::{eotf as srgb_eotf, oetf as srgb_oetf};
pub use wcag::linearize as wcag_linearize;
