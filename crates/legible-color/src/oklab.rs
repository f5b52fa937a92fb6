//! sRGB <-> OKLab / OKLCH.
//!
//! ```text
//! sRGB --eotf--> linear --M1--> LMS --cbrt--> LMS' --M2--> OKLab --polar--> OKLCH
//! ```
//!
//! The reverse path cubes instead of taking roots, clamps linear RGB to
//! [0, 1] and rounds to 8 bits.
//!
//! Two flavours of each direction exist:
//!
//! - [`rgb_to_oklch`] / [`oklch_to_rgb`] return [`ColorResult`] and fail on
//!   invalid input or non-finite intermediate values.
//! - [`rgb_to_oklch_safe`] / [`oklch_to_rgb_safe`] never fail. On error they
//!   return a luma-weighted gray wrapped in [`Converted::Fallback`], so the
//!   search loop can keep going.
//!
//! # Reference
//!
//! Björn Ottosson, "A perceptual color space for image processing" (2020)

use crate::convert::Converted;
use crate::error::{ColorError, ColorResult};
use legible_core::{Error, Oklab, Oklch, Rgb};
use legible_math::{Mat3, Vec3};
use legible_transfer::srgb;
use tracing::warn;

/// Linear sRGB to LMS cone response.
pub const LINEAR_TO_LMS: Mat3 = Mat3::from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Non-linear LMS' to OKLab.
pub const LMS_TO_OKLAB: Mat3 = Mat3::from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// OKLab to non-linear LMS'.
pub const OKLAB_TO_LMS: Mat3 = Mat3::from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS cone response to linear sRGB.
pub const LMS_TO_LINEAR: Mat3 = Mat3::from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

/// Rec.601 luma weights used for the achromatic fallback.
const FALLBACK_LUMA: Vec3 = Vec3::new(0.299, 0.587, 0.114);

// ============================================================================
// Checked conversions
// ============================================================================

/// Converts sRGB to OKLab.
///
/// # Errors
///
/// [`ColorError::NonFinite`] if any stage produced NaN or infinity.
pub fn rgb_to_oklab(rgb: Rgb) -> ColorResult<Oklab> {
    let linear = Vec3::from(srgb::eotf_rgb(rgb.to_unit()));
    // cbrt keeps the sign of slightly negative LMS values
    let lms_ = (LINEAR_TO_LMS * linear).map(f64::cbrt);
    let lab = LMS_TO_OKLAB * lms_;
    if !lab.is_finite() {
        return Err(ColorError::non_finite("rgb_to_oklab"));
    }
    Ok(Oklab::new(lab.x, lab.y, lab.z))
}

/// Converts sRGB to OKLCH.
///
/// Lightness is clamped to [0, 1]. Hue is 0 for achromatic colors.
///
/// # Example
///
/// ```rust
/// use legible_color::rgb_to_oklch;
/// use legible_core::Rgb;
///
/// let white = rgb_to_oklch(Rgb::WHITE)?;
/// assert!((white.l() - 1.0).abs() < 1e-6);
/// assert!(white.c() < 1e-6);
/// # Ok::<(), legible_color::ColorError>(())
/// ```
pub fn rgb_to_oklch(rgb: Rgb) -> ColorResult<Oklch> {
    let lab = rgb_to_oklab(rgb)?;
    let lch = Oklab::new(lab.l.clamp(0.0, 1.0), lab.a, lab.b).to_oklch();
    if !lch.is_valid() {
        let (l, c, h) = lch.to_tuple();
        return Err(Error::InvalidOklch { l, c, h }.into());
    }
    Ok(lch)
}

/// Converts OKLab to sRGB, clamping out-of-gamut values.
///
/// # Errors
///
/// [`ColorError::NonFinite`] for non-finite input or intermediate values.
pub fn oklab_to_rgb(lab: Oklab) -> ColorResult<Rgb> {
    let lms_ = OKLAB_TO_LMS * Vec3::new(lab.l, lab.a, lab.b);
    let lms = lms_.map(|v| v * v * v);
    let linear = LMS_TO_LINEAR * lms;
    if !linear.is_finite() {
        return Err(ColorError::non_finite("oklab_to_rgb"));
    }
    Ok(Rgb::from_unit(srgb::oetf_rgb(linear.clamp01().to_array())))
}

/// Converts OKLCH to sRGB, clamping out-of-gamut values.
///
/// # Errors
///
/// [`Error::InvalidOklch`] (wrapped) if `lch` is outside L in [0, 1],
/// C >= 0, H in [0, 360].
pub fn oklch_to_rgb(lch: Oklch) -> ColorResult<Rgb> {
    if !lch.is_valid() {
        let (l, c, h) = lch.to_tuple();
        return Err(Error::InvalidOklch { l, c, h }.into());
    }
    oklab_to_rgb(lch.to_oklab())
}

// ============================================================================
// Safe conversions
// ============================================================================

/// [`rgb_to_oklch`] that never fails.
///
/// The fallback is achromatic: `L = (0.299 R + 0.587 G + 0.114 B) / 255`,
/// `C = 0`, `H = 0`.
pub fn rgb_to_oklch_safe(rgb: Rgb) -> Converted<Oklch> {
    match rgb_to_oklch(rgb) {
        Ok(lch) => Converted::Exact(lch),
        Err(err) => {
            warn!(%err, r = rgb.r, g = rgb.g, b = rgb.b, "rgb_to_oklch fell back to gray");
            Converted::Fallback(achromatic_oklch(rgb))
        }
    }
}

/// [`oklch_to_rgb`] that never fails.
///
/// The fallback is the gray `round(L * 255)`, clamped to [0, 255].
pub fn oklch_to_rgb_safe(lch: Oklch) -> Converted<Rgb> {
    match oklch_to_rgb(lch) {
        Ok(rgb) => Converted::Exact(rgb),
        Err(err) => {
            warn!(%err, l = lch.l(), c = lch.c(), h = lch.h(), "oklch_to_rgb fell back to gray");
            Converted::Fallback(achromatic_rgb(lch))
        }
    }
}

/// Euclidean distance between two OKLCH colors, measured in OKLab.
pub fn oklch_distance(a: Oklch, b: Oklch) -> f64 {
    a.to_oklab().distance(b.to_oklab())
}

#[inline]
fn achromatic_oklch(rgb: Rgb) -> Oklch {
    let v = Vec3::new(rgb.r as f64, rgb.g as f64, rgb.b as f64);
    Oklch::new((v.dot(FALLBACK_LUMA) / 255.0).clamp(0.0, 1.0), 0.0, 0.0)
}

#[inline]
fn achromatic_rgb(lch: Oklch) -> Rgb {
    let l = lch.l();
    Rgb::from_unit([l, l, l])
}
