//! HSL <-> sRGB.
//!
//! Hue is in degrees, saturation and lightness in [0, 1]. Conversion to 8-bit
//! RGB rounds, so an `hsl()` string printed from a color parses back to a
//! color at most one step away per channel.

use legible_core::{Error, Result, Rgb};

/// An HSL color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Hue in degrees, [0, 360)
    pub h: f64,
    /// Saturation, [0, 1]
    pub s: f64,
    /// Lightness, [0, 1]
    pub l: f64,
}

impl Hsl {
    /// Creates an HSL color without validation.
    #[inline]
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    /// Creates an HSL color, checking every component.
    ///
    /// # Errors
    ///
    /// [`Error::ComponentOutOfRange`] if hue is outside [0, 360) or saturation
    /// or lightness outside [0, 1].
    pub fn try_new(h: f64, s: f64, l: f64) -> Result<Self> {
        if !(0.0..360.0).contains(&h) {
            return Err(Error::component_out_of_range("hue", h, 0.0, 360.0));
        }
        if !(0.0..=1.0).contains(&s) {
            return Err(Error::component_out_of_range("saturation", s, 0.0, 1.0));
        }
        if !(0.0..=1.0).contains(&l) {
            return Err(Error::component_out_of_range("lightness", l, 0.0, 1.0));
        }
        Ok(Self { h, s, l })
    }

    /// Converts to 8-bit sRGB.
    #[inline]
    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl From<Rgb> for Hsl {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb_to_hsl(rgb)
    }
}

/// Converts HSL to 8-bit sRGB, rounding each channel.
///
/// Hue wraps, so 360 and 0 give the same color.
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let a = s * l.min(1.0 - l);
    let f = |n: f64| -> f64 {
        let k = (n + h / 30.0) % 12.0;
        l - a * (k - 3.0).min(9.0 - k).clamp(-1.0, 1.0)
    };
    Rgb::from_unit([f(0.0), f(8.0), f(4.0)])
}

/// Converts 8-bit sRGB to HSL.
///
/// Achromatic colors get hue 0 and saturation 0.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let [r, g, b] = rgb.to_unit();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;
    if d == 0.0 {
        return Hsl::new(0.0, 0.0, l);
    }

    let s = d / (1.0 - (2.0 * l - 1.0).abs());
    let h = if max == r {
        60.0 * ((g - b) / d).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / d + 2.0)
    } else {
        60.0 * ((r - g) / d + 4.0)
    };
    Hsl::new(h.rem_euclid(360.0), s.clamp(0.0, 1.0), l)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), Rgb::gray(128));
        assert_eq!(hsl_to_rgb(0.0, 0.0, 1.0), Rgb::WHITE);
        let hsl = rgb_to_hsl(Rgb::gray(77));
        assert_eq!(hsl.h, 0.0);
        assert_eq!(hsl.s, 0.0);
    }

    #[test]
    fn test_rgb_to_hsl_reference() {
        let hsl = rgb_to_hsl(Rgb::new(255, 0, 0));
        assert_abs_diff_eq!(hsl.h, 0.0);
        assert_abs_diff_eq!(hsl.s, 1.0);
        assert_abs_diff_eq!(hsl.l, 0.5);

        // rebeccapurple: hsl(270, 50%, 40%)
        let hsl = rgb_to_hsl(Rgb::new(102, 51, 153));
        assert_abs_diff_eq!(hsl.h, 270.0, epsilon = 1e-9);
        assert_abs_diff_eq!(hsl.s, 0.5, epsilon = 1e-9);
        assert_abs_diff_eq!(hsl.l, 0.4, epsilon = 1e-9);
    }

    #[test]
    fn test_exact_roundtrip() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(85) {
                    let rgb = Rgb::new(r as u8, g as u8, b as u8);
                    assert_eq!(rgb_to_hsl(rgb).to_rgb(), rgb, "{rgb}");
                }
            }
        }
    }

    #[test]
    fn test_try_new_ranges() {
        assert!(Hsl::try_new(359.9, 1.0, 0.0).is_ok());
        let err = Hsl::try_new(360.0, 0.5, 0.5).unwrap_err();
        assert!(matches!(err, Error::ComponentOutOfRange { component: "hue", .. }));
        assert!(Hsl::try_new(0.0, 1.01, 0.5).is_err());
        assert!(Hsl::try_new(0.0, 0.5, -0.01).is_err());
    }
}
