//! CIEDE2000 color difference.
//!
//! The full CIE 2000 formula with unit weighting factors (kL = kC = kH = 1):
//!
//! ```text
//! dE00 = sqrt( (dL'/SL)^2 + (dC'/SC)^2 + (dH'/SH)^2 + RT * (dC'/SC) * (dH'/SH) )
//! ```
//!
//! Every term is either a symmetric combination of the two inputs or a
//! difference that flips sign when they are swapped and appears squared or
//! as a product of two flipped differences. The result is therefore
//! bit-for-bit symmetric and exactly 0 for identical inputs. Keep it that
//! way: no branch may depend on argument order.
//!
//! # Reference
//!
//! Sharma, Wu, Dalal, "The CIEDE2000 Color-Difference Formula:
//! Implementation Notes, Supplementary Test Data, and Mathematical
//! Observations" (2005)

use crate::lab::rgb_to_lab;
use legible_core::{Lab, Rgb};

/// 25^7, the chroma pivot of the G and RC terms.
const POW25_7: f64 = 6_103_515_625.0;

/// CIEDE2000 distance between two CIELAB colors.
///
/// # Example
///
/// ```rust
/// use legible_color::ciede2000;
/// use legible_core::Lab;
///
/// let a = Lab::new(50.0, 2.6772, -79.7751);
/// let b = Lab::new(50.0, 0.0, -82.7485);
/// assert!((ciede2000(a, b) - 2.0425).abs() < 1e-4);
/// ```
pub fn ciede2000(lab1: Lab, lab2: Lab) -> f64 {
    // Chroma-dependent a* rotation
    let c_bar = (lab1.a.hypot(lab1.b) + lab2.a.hypot(lab2.b)) / 2.0;
    let c_bar7 = c_bar.powi(7);
    let g = 0.5 * (1.0 - (c_bar7 / (c_bar7 + POW25_7)).sqrt());

    let a1 = lab1.a * (1.0 + g);
    let a2 = lab2.a * (1.0 + g);
    let c1 = a1.hypot(lab1.b);
    let c2 = a2.hypot(lab2.b);
    let h1 = hue_angle(a1, lab1.b);
    let h2 = hue_angle(a2, lab2.b);

    // Differences
    let dl = lab2.l - lab1.l;
    let dc = c2 - c1;
    let dh = if c1 * c2 == 0.0 {
        0.0
    } else {
        let d = h2 - h1;
        if d > 180.0 {
            d - 360.0
        } else if d < -180.0 {
            d + 360.0
        } else {
            d
        }
    };
    // sin of |dh| with the sign restored, so swapping inputs flips only the sign
    let half_sin = (dh.abs() / 2.0).to_radians().sin().copysign(dh);
    let d_big_h = 2.0 * (c1 * c2).sqrt() * half_sin;

    // Means
    let l_bar = (lab1.l + lab2.l) / 2.0;
    let c_bar_p = (c1 + c2) / 2.0;
    let h_sum = h1 + h2;
    let h_bar = if c1 * c2 == 0.0 {
        h_sum
    } else if (h1 - h2).abs() <= 180.0 {
        h_sum / 2.0
    } else if h_sum < 360.0 {
        (h_sum + 360.0) / 2.0
    } else {
        (h_sum - 360.0) / 2.0
    };

    // Weighting functions
    let t = 1.0 - 0.17 * (h_bar - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_bar).to_radians().cos()
        + 0.32 * (3.0 * h_bar + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_bar - 63.0).to_radians().cos();
    let d_theta = 30.0 * (-((h_bar - 275.0) / 25.0).powi(2)).exp();
    let c_bar_p7 = c_bar_p.powi(7);
    let rc = 2.0 * (c_bar_p7 / (c_bar_p7 + POW25_7)).sqrt();
    let l50 = (l_bar - 50.0).powi(2);
    let sl = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();
    let sc = 1.0 + 0.045 * c_bar_p;
    let sh = 1.0 + 0.015 * c_bar_p * t;
    let rt = -(2.0 * d_theta).to_radians().sin() * rc;

    let tl = dl / sl;
    let tc = dc / sc;
    let th = d_big_h / sh;
    (tl * tl + tc * tc + th * th + rt * tc * th).max(0.0).sqrt()
}

/// CIEDE2000 distance between two sRGB colors.
#[inline]
pub fn delta_e_2000(a: Rgb, b: Rgb) -> f64 {
    ciede2000(rgb_to_lab(a), rgb_to_lab(b))
}

/// Hue angle in degrees, [0, 360). Zero for the neutral axis.
#[inline]
fn hue_angle(a: f64, b: f64) -> f64 {
    if a == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(a).to_degrees();
    if h < 0.0 { h + 360.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Sharma et al. 2005, table 1 (subset)
    const SHARMA: &[([f64; 3], [f64; 3], f64)] = &[
        ([50.0, 2.6772, -79.7751], [50.0, 0.0, -82.7485], 2.0425),
        ([50.0, 3.1571, -77.2803], [50.0, 0.0, -82.7485], 2.8615),
        ([50.0, 2.8361, -74.0200], [50.0, 0.0, -82.7485], 3.4412),
        ([50.0, -1.3802, -84.2814], [50.0, 0.0, -82.7485], 1.0000),
        ([50.0, 0.0, 0.0], [50.0, -1.0, 2.0], 2.3669),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0009], 7.1792),
        ([50.0, 2.4900, -0.0010], [50.0, -2.4900, 0.0011], 7.2195),
        ([50.0, 2.5000, 0.0000], [50.0, 0.0000, -2.5000], 4.3065),
        ([50.0, 2.5000, 0.0000], [73.0, 25.0000, -18.0000], 27.1492),
        ([50.0, 2.5000, 0.0000], [56.0, -27.0000, -3.0000], 31.9030),
        ([60.2574, -34.0099, 36.2677], [60.4626, -34.1751, 39.4387], 1.2644),
        ([22.7233, 20.0904, -46.6940], [23.0331, 14.9730, -42.5619], 2.0373),
        ([90.8027, -2.0831, 1.4410], [91.1528, -1.6435, 0.0447], 1.4441),
        ([2.0776, 0.0795, -1.1350], [0.9033, -0.0636, -0.5514], 0.9082),
    ];

    #[test]
    fn test_sharma_reference() {
        for (i, (a, b, expected)) in SHARMA.iter().enumerate() {
            let lab1 = Lab::new(a[0], a[1], a[2]);
            let lab2 = Lab::new(b[0], b[1], b[2]);
            let de = ciede2000(lab1, lab2);
            assert!((de - expected).abs() < 1e-4, "pair {i}: got {de}, expected {expected}");
        }
    }

    #[test]
    fn test_identity_is_zero() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(delta_e_2000(red, red), 0.0);
        assert_eq!(delta_e_2000(Rgb::BLACK, Rgb::BLACK), 0.0);
    }

    #[test]
    fn test_symmetry_exact() {
        let colors = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 255, 0),
            Rgb::new(12, 34, 200),
            Rgb::gray(128),
            Rgb::new(250, 240, 10),
        ];
        for &a in &colors {
            for &b in &colors {
                assert_eq!(delta_e_2000(a, b), delta_e_2000(b, a));
            }
        }
    }

    #[test]
    fn test_red_green_far_apart() {
        let de = delta_e_2000(Rgb::new(255, 0, 0), Rgb::new(0, 255, 0));
        assert!(de > 50.0, "{de}");
    }

    #[test]
    fn test_one_step_is_small() {
        let de = delta_e_2000(Rgb::gray(119), Rgb::gray(118));
        assert!(de > 0.0 && de < 1.0);
        assert!(delta_e_2000(Rgb::gray(119), Rgb::gray(100)) > de);
    }
}
