//! # legible-color
//!
//! Color science behind WCAG contrast tuning.
//!
//! - **Conversions** - sRGB <-> OKLab/OKLCH, sRGB -> XYZ -> CIELAB
//! - **Perceptual metric** - CIEDE2000
//! - **Contrast model** - WCAG relative luminance, contrast ratio, levels
//!
//! # Architecture
//!
//! ```text
//!                  legible-color
//!                        |
//!         +--------------+--------------+
//!         |                             |
//!  legible-transfer               legible-math
//!         |                             |
//!         +--------------+--------------+
//!                        |
//!                  legible-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use legible_color::prelude::*;
//! use legible_core::Rgb;
//!
//! let text = Rgb::new(119, 119, 119);
//! let bg = Rgb::WHITE;
//!
//! let ratio = contrast_ratio(text, bg);
//! assert_eq!(wcag_level(ratio, false), WcagLevel::Fail);
//!
//! let lch = rgb_to_oklch_safe(text).value();
//! let darker = oklch_to_rgb_safe(lch.with_lightness(lch.l() - 0.01)).value();
//! assert!(contrast_ratio(darker, bg) > ratio);
//! assert!(delta_e_2000(text, darker) < 2.0);
//! ```
//!
//! # Failure policy
//!
//! Checked conversions return [`ColorResult`]. The `_safe` variants return
//! [`Converted`], which tells exact results apart from achromatic fallbacks
//! without ever failing.
//!
//! # Dependencies
//!
//! - [`legible-core`] - Color value types
//! - [`legible-math`] - Mat3/Vec3
//! - [`legible-transfer`] - sRGB and WCAG curves
//! - [`tracing`] - Fallback diagnostics
//!
//! # Used By
//!
//! - `legible-tune` - Candidate search and strategies
//! - `legible` CLI - `check`, `delta-e`, `convert`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod contrast;
pub mod convert;
pub mod delta_e;
pub mod lab;
pub mod oklab;

pub use contrast::{
    AA_LARGE, AA_NORMAL, AAA_LARGE, AAA_NORMAL, WcagLevel, contrast_ratio, pair_level,
    relative_luminance, wcag_level,
};
pub use convert::{ColorConvert, Converted};
pub use delta_e::{ciede2000, delta_e_2000};
pub use error::{ColorError, ColorResult};
pub use lab::{D65_WHITE, rgb_to_lab, rgb_to_xyz, xyz_to_lab};
pub use oklab::{
    oklab_to_rgb, oklch_distance, oklch_to_rgb, oklch_to_rgb_safe, rgb_to_oklab, rgb_to_oklch,
    rgb_to_oklch_safe,
};

// Re-export sub-crates for convenience
pub use legible_math as math;
pub use legible_transfer as transfer;

/// Prelude with commonly used items
pub mod prelude {
    pub use crate::{
        ColorConvert, Converted, WcagLevel, contrast_ratio, delta_e_2000, oklch_to_rgb_safe,
        relative_luminance, rgb_to_lab, rgb_to_oklch_safe, wcag_level,
    };
}
