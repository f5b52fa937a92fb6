//! # legible-math
//!
//! Double-precision linear algebra for color conversions.
//!
//! - [`Mat3`] - 3x3 matrices for the RGB/LMS/OKLab/XYZ stages
//! - [`Vec3`] - 3D vectors carrying color triplets between stages
//!
//! # Design
//!
//! The types wrap [`glam`]'s `DMat3`/`DVec3` layout with color-oriented
//! helpers. Everything is `f64`: the contrast search compares values near
//! the WCAG thresholds and single precision is not enough there. All matrix
//! operations assume **row-major** storage and **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use legible_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [0.4122214708, 0.5363325363, 0.0514459929],
//!     [0.2119034982, 0.6806995451, 0.1073969566],
//!     [0.0883024619, 0.2817188376, 0.6299787005],
//! ]);
//! let lms = m * Vec3::ONE;
//! assert!((lms.x - 1.0).abs() < 1e-6);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - Matrix inverse/determinant and interop
//!
//! # Used By
//!
//! - `legible-color` - OKLab and CIELAB conversions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod mat3;
mod vec3;

pub use mat3::*;
pub use vec3::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{DMat3 as GlamDMat3, DVec3 as GlamDVec3};
}
