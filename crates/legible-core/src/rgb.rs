//! 8-bit sRGB color types.
//!
//! - [`Rgb`] - three channels in [0, 255], the only color the tuning core accepts
//! - [`Rgba`] - an [`Rgb`] with straight alpha, flattened with [`Rgba::composite_over`]
//!
//! Channel values outside [0, 255] are rejected by [`Rgb::try_new`], never
//! clamped. Clamping only happens inside conversions, see [`Rgb::from_unit`].
//!
//! # Example
//!
//! ```
//! use legible_core::{Rgb, Rgba};
//!
//! let text = Rgb::try_new(119, 119, 119)?;
//! assert_eq!(text.to_hex(), "#777777");
//!
//! let veil = Rgba::try_new(0, 0, 0, 0.5)?;
//! assert_eq!(veil.composite_over(Rgb::WHITE), Rgb::new(128, 128, 128));
//! # Ok::<(), legible_core::Error>(())
//! ```

use crate::error::{Error, Result};
use std::fmt;

/// An 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Black (0, 0, 0).
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White (255, 255, 255).
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from in-range channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a neutral gray.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Creates a color from wide integers, rejecting anything outside [0, 255].
    ///
    /// # Errors
    ///
    /// [`Error::ChannelOutOfRange`] naming the first offending channel.
    pub fn try_new(r: i64, g: i64, b: i64) -> Result<Self> {
        Ok(Self::new(
            channel("red", r)?,
            channel("green", g)?,
            channel("blue", b)?,
        ))
    }

    /// Scales unit-range values to 8 bits: `round(v * 255)` clamped to [0, 255].
    ///
    /// Non-finite inputs map to 0.
    #[inline]
    pub fn from_unit(rgb: [f64; 3]) -> Self {
        Self::new(unit_to_u8(rgb[0]), unit_to_u8(rgb[1]), unit_to_u8(rgb[2]))
    }

    /// Returns channels as an array.
    #[inline]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Returns channels divided by 255.
    #[inline]
    pub fn to_unit(self) -> [f64; 3] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
        ]
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from(a: [u8; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// An 8-bit sRGB color with straight (non-premultiplied) alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Color channels
    pub rgb: Rgb,
    /// Opacity, 0 = transparent
    pub alpha: f64,
}

impl Rgba {
    /// Creates a color, rejecting out-of-range channels or alpha.
    ///
    /// # Errors
    ///
    /// [`Error::ChannelOutOfRange`] or [`Error::AlphaOutOfRange`].
    pub fn try_new(r: i64, g: i64, b: i64, alpha: f64) -> Result<Self> {
        let rgb = Rgb::try_new(r, g, b)?;
        Ok(Self {
            rgb,
            alpha: checked_alpha(alpha)?,
        })
    }

    /// Creates from an existing [`Rgb`], validating alpha only.
    pub fn with_alpha(rgb: Rgb, alpha: f64) -> Result<Self> {
        Ok(Self {
            rgb,
            alpha: checked_alpha(alpha)?,
        })
    }

    /// Flattens onto an opaque background: `round(c * a + bg * (1 - a))`.
    pub fn composite_over(self, bg: Rgb) -> Rgb {
        let a = self.alpha;
        let mix = |c: u8, under: u8| -> u8 {
            let v = (c as f64 * a + under as f64 * (1.0 - a)).round();
            v.clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.rgb.r, bg.r),
            mix(self.rgb.g, bg.g),
            mix(self.rgb.b, bg.b),
        )
    }

    /// Returns `true` for alpha = 1.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.alpha >= 1.0
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[inline]
fn channel(name: &'static str, v: i64) -> Result<u8> {
    u8::try_from(v).map_err(|_| Error::channel_out_of_range(name, v as f64))
}

#[inline]
fn checked_alpha(a: f64) -> Result<f64> {
    if a.is_finite() && (0.0..=1.0).contains(&a) {
        Ok(a)
    } else {
        Err(Error::alpha_out_of_range(a))
    }
}

#[inline]
fn unit_to_u8(v: f64) -> u8 {
    if v.is_finite() {
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    } else {
        0
    }
}
