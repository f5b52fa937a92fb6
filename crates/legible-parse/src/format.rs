//! Output mirroring: writing a color back in its input notation.

use crate::hsl::rgb_to_hsl;
use legible_core::Rgb;
use std::fmt;

/// Notation family of a color.
///
/// Forms that cannot round-trip an opaque result exactly (`rgba`, `hsla`,
/// names) are written back as hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorFamily {
    /// `#rrggbb`
    #[default]
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `(r, g, b)`
    Tuple,
}

impl ColorFamily {
    /// Formats `rgb` in this notation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use legible_parse::ColorFamily;
    /// use legible_core::Rgb;
    ///
    /// let c = Rgb::new(102, 51, 153);
    /// assert_eq!(ColorFamily::Hex.format(c), "#663399");
    /// assert_eq!(ColorFamily::Rgb.format(c), "rgb(102, 51, 153)");
    /// assert_eq!(ColorFamily::Hsl.format(c), "hsl(270, 50%, 40%)");
    /// assert_eq!(ColorFamily::Tuple.format(c), "(102, 51, 153)");
    /// ```
    pub fn format(self, rgb: Rgb) -> String {
        match self {
            Self::Hex => rgb.to_hex(),
            Self::Rgb => rgb.to_string(),
            Self::Hsl => {
                let hsl = rgb_to_hsl(rgb);
                let h = hsl.h.round() as u32 % 360;
                let s = (hsl.s * 100.0).round() as u32;
                let l = (hsl.l * 100.0).round() as u32;
                format!("hsl({h}, {s}%, {l}%)")
            }
            Self::Tuple => format!("({}, {}, {})", rgb.r, rgb.g, rgb.b),
        }
    }

    /// Lowercase label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hex => "hex",
            Self::Rgb => "rgb",
            Self::Hsl => "hsl",
            Self::Tuple => "tuple",
        }
    }
}

impl fmt::Display for ColorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
