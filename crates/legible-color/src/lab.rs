//! sRGB -> XYZ -> CIELAB (D65).
//!
//! Input to the CIEDE2000 metric. XYZ is scaled so that the D65 white point
//! has Y = 100.

use legible_core::{Lab, Rgb, Xyz};
use legible_math::{Mat3, Vec3};
use legible_transfer::srgb;

/// Linear sRGB to XYZ (D65), Y normalized to 1.
pub const RGB_TO_XYZ: Mat3 = Mat3::from_rows([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// D65 reference white, Y = 100.
pub const D65_WHITE: Xyz = Xyz::new(95.047, 100.0, 108.883);

/// CIE epsilon: boundary between the cube-root and linear segments.
const EPSILON: f64 = 0.008856;

/// CIE kappa / 116.
const LINEAR_SLOPE: f64 = 7.787;

/// Converts sRGB to XYZ scaled by 100.
#[inline]
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let linear = Vec3::from(srgb::eotf_rgb(rgb.to_unit()));
    let v = RGB_TO_XYZ * linear * 100.0;
    Xyz::new(v.x, v.y, v.z)
}

/// Converts XYZ (D65, Y = 100) to CIELAB. L* is clamped to [0, 100].
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    let fx = f(xyz.x / D65_WHITE.x);
    let fy = f(xyz.y / D65_WHITE.y);
    let fz = f(xyz.z / D65_WHITE.z);
    Lab::new(
        (116.0 * fy - 16.0).clamp(0.0, 100.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    )
}

/// Converts sRGB to CIELAB.
///
/// # Example
///
/// ```rust
/// use legible_color::rgb_to_lab;
/// use legible_core::Rgb;
///
/// let white = rgb_to_lab(Rgb::WHITE);
/// assert!((white.l - 100.0).abs() < 0.01);
/// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
/// ```
#[inline]
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

#[inline]
fn f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        LINEAR_SLOPE * t + 16.0 / 116.0
    }
}
