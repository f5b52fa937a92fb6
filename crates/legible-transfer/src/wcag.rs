//! WCAG 2.x channel linearization.
//!
//! WCAG's relative-luminance definition uses the older 0.03928 threshold
//! instead of sRGB's 0.04045. No 8-bit code falls between the two, so both
//! curves agree on every 8-bit input.
//!
//! # Reference
//!
//! WCAG 2.1, "relative luminance" definition

/// Linear segment threshold on the encoded side.
pub const THRESHOLD: f64 = 0.03928;

/// Linearizes a channel in [0, 1].
///
/// # Example
///
/// ```rust
/// use legible_transfer::wcag::linearize;
///
/// assert_eq!(linearize(0.0), 0.0);
/// assert!((linearize(1.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn linearize(v: f64) -> f64 {
    if v <= THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Linearizes an 8-bit channel.
#[inline]
pub fn linearize_u8(v: u8) -> f64 {
    linearize(v as f64 / 255.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::srgb;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_matches_srgb_on_8bit_codes() {
        for i in 0..=255u8 {
            assert_abs_diff_eq!(linearize_u8(i), srgb::eotf_u8(i), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linear_segment() {
        assert_abs_diff_eq!(linearize_u8(10), 10.0 / 255.0 / 12.92, epsilon = 1e-15);
    }
}
