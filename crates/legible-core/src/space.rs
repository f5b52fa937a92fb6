//! Perceptual and device-independent color coordinates.
//!
//! These are plain value types. The matrix transforms that produce them
//! from [`Rgb`](crate::Rgb) live in `legible-color`; only the polar/cartesian
//! step between [`Oklab`] and [`Oklch`] is done here.
//!
//! | Type | Components | Range |
//! |------|------------|-------|
//! | [`Oklab`] | L, a, b | L in [0, 1] |
//! | [`Oklch`] | L, C, H | L in [0, 1], C >= 0, H in [0, 360) |
//! | [`Xyz`] | X, Y, Z | Y = 100 for D65 white |
//! | [`Lab`] | L*, a*, b* | L* in [0, 100] |

use crate::error::{Error, Result};

/// Chroma below this is treated as achromatic and gets hue 0.
pub const ACHROMATIC_CHROMA: f64 = 1e-10;

/// OKLab cartesian coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklab {
    /// Perceptual lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Oklab {
    /// Creates a new OKLab value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Polar form. Hue is 0 when chroma is below [`ACHROMATIC_CHROMA`].
    pub fn to_oklch(self) -> Oklch {
        let c = self.a.hypot(self.b);
        let h = if c < ACHROMATIC_CHROMA {
            0.0
        } else {
            let deg = self.b.atan2(self.a).to_degrees();
            if deg < 0.0 { deg + 360.0 } else { deg }
        };
        Oklch::new(self.l, c, h)
    }

    /// Euclidean distance in OKLab.
    #[inline]
    pub fn distance(self, other: Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// OKLCH: lightness, chroma, hue in degrees.
///
/// Normally produced by the sRGB converter in `legible-color`. Use
/// [`Oklch::try_new`] when a value comes from outside and must be checked.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Oklch {
    l: f64,
    c: f64,
    h: f64,
}

impl Oklch {
    /// Creates a value without validation.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Creates a value, rejecting anything [`is_valid`](Self::is_valid) refuses.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOklch`].
    pub fn try_new(l: f64, c: f64, h: f64) -> Result<Self> {
        let v = Self::new(l, c, h);
        if v.is_valid() {
            Ok(v)
        } else {
            Err(Error::InvalidOklch { l, c, h })
        }
    }

    /// Lightness in [0, 1].
    #[inline]
    pub fn l(&self) -> f64 {
        self.l
    }

    /// Chroma, >= 0.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// Hue in degrees.
    #[inline]
    pub fn h(&self) -> f64 {
        self.h
    }

    /// Same hue and chroma with lightness clamped into [0, 1].
    #[inline]
    pub fn with_lightness(self, l: f64) -> Self {
        Self::new(l.clamp(0.0, 1.0), self.c, self.h)
    }

    /// Same hue and lightness with chroma clamped into [0, `max`].
    #[inline]
    pub fn with_chroma(self, c: f64, max: f64) -> Self {
        Self::new(self.l, c.clamp(0.0, max), self.h)
    }

    /// Finite, L in [0, 1], C >= 0, H in [0, 360].
    pub fn is_valid(&self) -> bool {
        self.l.is_finite()
            && self.c.is_finite()
            && self.h.is_finite()
            && (0.0..=1.0).contains(&self.l)
            && self.c >= 0.0
            && (0.0..=360.0).contains(&self.h)
    }

    /// Cartesian form.
    pub fn to_oklab(self) -> Oklab {
        let h = self.h.to_radians();
        Oklab::new(self.l, self.c * h.cos(), self.c * h.sin())
    }

    /// Returns `(L, C, H)`.
    #[inline]
    pub fn to_tuple(self) -> (f64, f64, f64) {
        (self.l, self.c, self.h)
    }
}

/// CIE XYZ tristimulus values, scaled so that D65 white has Y = 100.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Xyz {
    /// X
    pub x: f64,
    /// Y (luminance)
    pub y: f64,
    /// Z
    pub z: f64,
}

impl Xyz {
    /// Creates a new XYZ value.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// CIELAB (D65).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lab {
    /// L* in [0, 100]
    pub l: f64,
    /// a*
    pub a: f64,
    /// b*
    pub b: f64,
}

impl Lab {
    /// Creates a new CIELAB value.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}
