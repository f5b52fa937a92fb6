//! sRGB transfer function.
//!
//! Piecewise curve: a linear segment near black and a 2.4 power curve above.
//! This is the IEC 61966-2-1 form with the 0.04045 decode threshold, used by
//! the OKLab and CIELAB conversions.
//!
//! # Range
//!
//! - Input/Output: [0, 1]
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

/// Decode threshold on the encoded side.
pub const DECODE_THRESHOLD: f64 = 0.04045;

/// Encode threshold on the linear side.
pub const ENCODE_THRESHOLD: f64 = 0.0031308;

/// sRGB EOTF: Decodes sRGB encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use legible_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= DECODE_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: Encodes linear light to sRGB.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= ENCODE_THRESHOLD {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Decodes an 8-bit channel.
#[inline]
pub fn eotf_u8(v: u8) -> f64 {
    eotf(v as f64 / 255.0)
}

/// Applies sRGB EOTF to an RGB triplet.
#[inline]
pub fn eotf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(eotf)
}

/// Applies sRGB OETF to an RGB triplet.
#[inline]
pub fn oetf_rgb(rgb: [f64; 3]) -> [f64; 3] {
    rgb.map(oetf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_roundtrip() {
        for i in 0..=255u8 {
            let v = i as f64 / 255.0;
            assert_abs_diff_eq!(oetf(eotf(v)), v, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_boundaries() {
        assert_eq!(eotf(0.0), 0.0);
        assert_abs_diff_eq!(eotf(1.0), 1.0, epsilon = 1e-12);
        assert_eq!(oetf(0.0), 0.0);
        assert_abs_diff_eq!(oetf(1.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_segments_meet() {
        let below = DECODE_THRESHOLD / 12.92;
        let above = ((DECODE_THRESHOLD + 0.055) / 1.055).powf(2.4);
        assert_abs_diff_eq!(below, above, epsilon = 1e-6);
    }

    #[test]
    fn test_u8() {
        assert_eq!(eotf_u8(0), 0.0);
        assert_abs_diff_eq!(eotf_u8(255), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eotf_u8(128), 0.2158605, epsilon = 1e-6);
    }
}
