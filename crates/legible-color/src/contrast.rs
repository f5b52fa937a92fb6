//! WCAG 2.x contrast model.
//!
//! - [`relative_luminance`] - weighted sum of linearized channels
//! - [`contrast_ratio`] - `(L_hi + 0.05) / (L_lo + 0.05)`, range [1, 21]
//! - [`wcag_level`] - FAIL / AA / AAA for normal or large text
//!
//! # Thresholds
//!
//! | Text | AA | AAA |
//! |------|----|-----|
//! | Normal | 4.5 | 7.0 |
//! | Large (>= 18pt, or 14pt bold) | 3.0 | 4.5 |
//!
//! # Example
//!
//! ```rust
//! use legible_color::{contrast_ratio, wcag_level, WcagLevel};
//! use legible_core::Rgb;
//!
//! let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
//! assert!((ratio - 21.0).abs() < 0.1);
//! assert_eq!(wcag_level(ratio, false), WcagLevel::AAA);
//! ```

use legible_core::Rgb;
use legible_math::Vec3;
use legible_transfer::wcag;
use std::fmt;

/// Minimum ratio for AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Rec.709 luminance weights.
const LUMA: Vec3 = Vec3::new(0.2126, 0.7152, 0.0722);

/// WCAG conformance level of a contrast ratio.
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WcagLevel {
    /// Below AA.
    #[cfg_attr(feature = "serde", serde(rename = "FAIL"))]
    Fail,
    /// Meets AA.
    AA,
    /// Meets AAA.
    AAA,
}

impl WcagLevel {
    /// Display label: `FAIL`, `AA`, `AAA`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "FAIL",
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }

    /// Minimum ratio needed for this level. `Fail` needs 1.0.
    pub fn min_ratio(self, large: bool) -> f64 {
        match (self, large) {
            (Self::Fail, _) => 1.0,
            (Self::AA, false) => AA_NORMAL,
            (Self::AA, true) => AA_LARGE,
            (Self::AAA, false) => AAA_NORMAL,
            (Self::AAA, true) => AAA_LARGE,
        }
    }

    /// Returns `true` for AA or AAA.
    #[inline]
    pub fn passes(self) -> bool {
        self != Self::Fail
    }
}

impl fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// WCAG relative luminance in [0, 1].
#[inline]
pub fn relative_luminance(rgb: Rgb) -> f64 {
    Vec3::new(
        wcag::linearize_u8(rgb.r),
        wcag::linearize_u8(rgb.g),
        wcag::linearize_u8(rgb.b),
    )
    .dot(LUMA)
}

/// WCAG contrast ratio. Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (hi, lo) = if la >= lb { (la, lb) } else { (lb, la) };
    (hi + 0.05) / (lo + 0.05)
}

/// Classifies a contrast ratio.
pub fn wcag_level(ratio: f64, large: bool) -> WcagLevel {
    if ratio >= WcagLevel::AAA.min_ratio(large) {
        WcagLevel::AAA
    } else if ratio >= WcagLevel::AA.min_ratio(large) {
        WcagLevel::AA
    } else {
        WcagLevel::Fail
    }
}

/// Level of a text/background pair.
#[inline]
pub fn pair_level(text: Rgb, bg: Rgb, large: bool) -> WcagLevel {
    wcag_level(contrast_ratio(text, bg), large)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_luminance_extremes() {
        assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
        assert_abs_diff_eq!(relative_luminance(Rgb::WHITE), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_black_on_white() {
        assert_abs_diff_eq!(contrast_ratio(Rgb::BLACK, Rgb::WHITE), 21.0, epsilon = 1e-9);
    }

    #[test]
    fn test_same_color() {
        for v in [0u8, 64, 128, 255] {
            let c = Rgb::new(v, 255 - v, v / 2);
            assert_eq!(contrast_ratio(c, c), 1.0);
        }
        assert_eq!(wcag_level(1.0, false), WcagLevel::Fail);
        assert_eq!(wcag_level(1.0, true), WcagLevel::Fail);
    }

    #[test]
    fn test_symmetric() {
        let a = Rgb::new(200, 30, 90);
        let b = Rgb::new(10, 240, 250);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn test_known_grays() {
        // #777 on white sits just under AA
        let r = contrast_ratio(Rgb::gray(119), Rgb::WHITE);
        assert!(r > 4.47 && r < 4.5, "{r}");
        // #767676 is the lightest gray that passes
        let r = contrast_ratio(Rgb::gray(118), Rgb::WHITE);
        assert!(r >= 4.5, "{r}");
    }

    #[test]
    fn test_thresholds() {
        assert_eq!(wcag_level(7.0, false), WcagLevel::AAA);
        assert_eq!(wcag_level(6.99, false), WcagLevel::AA);
        assert_eq!(wcag_level(4.5, false), WcagLevel::AA);
        assert_eq!(wcag_level(4.49, false), WcagLevel::Fail);
        assert_eq!(wcag_level(4.5, true), WcagLevel::AAA);
        assert_eq!(wcag_level(3.0, true), WcagLevel::AA);
        assert_eq!(wcag_level(2.99, true), WcagLevel::Fail);
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(WcagLevel::Fail.to_string(), "FAIL");
        assert_eq!(WcagLevel::AAA.as_str(), "AAA");
        assert!(WcagLevel::AA > WcagLevel::Fail);
        assert!(!WcagLevel::Fail.passes());
    }

    #[test]
    fn test_pair_level() {
        assert_eq!(pair_level(Rgb::BLACK, Rgb::WHITE, false), WcagLevel::AAA);
        assert_eq!(pair_level(Rgb::gray(119), Rgb::WHITE, true), WcagLevel::AA);
    }
}
