//! High-level conversion helpers.
//!
//! - [`Converted`] - result of a conversion that may have used the fallback
//! - [`ColorConvert`] - chainable conversions on [`Rgb`]
//!
//! # Example
//!
//! ```rust
//! use legible_color::ColorConvert;
//! use legible_core::Rgb;
//!
//! let text = Rgb::new(119, 119, 119);
//! let lch = text.to_oklch().value();
//! assert!(lch.c() < 1e-6);
//!
//! let ratio = text.contrast_with(Rgb::WHITE);
//! assert!(ratio > 4.4 && ratio < 4.5);
//! ```

use crate::contrast;
use crate::delta_e;
use crate::lab;
use crate::oklab;
use legible_core::{Lab, Oklch, Rgb, Xyz};

/// Outcome of a conversion that never fails.
///
/// `Exact` carries the true converted value, `Fallback` an achromatic
/// stand-in produced because the exact path failed. Callers that do not
/// care can take [`value`](Converted::value); callers that do can match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Converted<T> {
    /// Value produced by the exact conversion.
    Exact(T),
    /// Achromatic approximation used in place of a failed conversion.
    Fallback(T),
}

impl<T> Converted<T> {
    /// Returns the carried value, exact or not.
    #[inline]
    pub fn value(self) -> T {
        match self {
            Self::Exact(v) | Self::Fallback(v) => v,
        }
    }

    /// Returns the value only if the exact conversion succeeded.
    #[inline]
    pub fn exact(self) -> Option<T> {
        match self {
            Self::Exact(v) => Some(v),
            Self::Fallback(_) => None,
        }
    }

    /// Returns `true` if the fallback was used.
    #[inline]
    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }

    /// Borrows the carried value.
    #[inline]
    pub fn as_ref(&self) -> &T {
        match self {
            Self::Exact(v) | Self::Fallback(v) => v,
        }
    }
}

/// Conversions and measurements on 8-bit sRGB colors.
pub trait ColorConvert: Copy {
    /// OKLCH via the safe converter.
    fn to_oklch(self) -> Converted<Oklch>;

    /// CIE XYZ (D65, Y = 100 for white).
    fn to_xyz(self) -> Xyz;

    /// CIELAB (D65).
    fn to_lab(self) -> Lab;

    /// WCAG relative luminance in [0, 1].
    fn relative_luminance(self) -> f64;

    /// WCAG contrast ratio against `other`, in [1, 21].
    fn contrast_with(self, other: Self) -> f64;

    /// CIEDE2000 distance to `other`.
    fn delta_e(self, other: Self) -> f64;
}

impl ColorConvert for Rgb {
    #[inline]
    fn to_oklch(self) -> Converted<Oklch> {
        oklab::rgb_to_oklch_safe(self)
    }

    #[inline]
    fn to_xyz(self) -> Xyz {
        lab::rgb_to_xyz(self)
    }

    #[inline]
    fn to_lab(self) -> Lab {
        lab::rgb_to_lab(self)
    }

    #[inline]
    fn relative_luminance(self) -> f64 {
        contrast::relative_luminance(self)
    }

    #[inline]
    fn contrast_with(self, other: Self) -> f64 {
        contrast::contrast_ratio(self, other)
    }

    #[inline]
    fn delta_e(self, other: Self) -> f64 {
        delta_e::delta_e_2000(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_accessors() {
        let e = Converted::Exact(3);
        let f = Converted::Fallback(4);
        assert_eq!(e.value(), 3);
        assert_eq!(f.value(), 4);
        assert_eq!(e.exact(), Some(3));
        assert_eq!(f.exact(), None);
        assert!(f.is_fallback());
        assert_eq!(*f.as_ref(), 4);
    }

    #[test]
    fn test_trait_matches_free_functions() {
        let a = Rgb::new(30, 120, 200);
        let b = Rgb::new(250, 250, 240);
        assert_eq!(a.contrast_with(b), contrast::contrast_ratio(a, b));
        assert_eq!(a.delta_e(b), delta_e::delta_e_2000(a, b));
        assert_eq!(a.to_lab(), lab::rgb_to_lab(a));
    }
}
