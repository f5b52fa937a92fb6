//! Color input as a tagged union.
//!
//! Every accepted representation becomes one [`ColorInput`] variant through
//! one of two entry points:
//!
//! - [`ColorInput::parse`] for text (hex, `rgb()`/`rgba()`, `hsl()`/`hsla()`,
//!   CSS names)
//! - [`ColorInput::from_components`] for numeric tuples
//!
//! The variant remembers the family the color came from, so a tuned result
//! can be written back in the same notation (see [`ColorFamily`]).
//!
//! # Example
//!
//! ```rust
//! use legible_parse::ColorInput;
//! use legible_core::Rgb;
//!
//! let c = ColorInput::parse("rgba(0, 0, 0, 50%)").unwrap();
//! assert_eq!(c.alpha(), 0.5);
//! assert_eq!(c.to_rgb(Rgb::WHITE), Rgb::gray(128));
//! ```

use crate::format::ColorFamily;
use crate::hsl::Hsl;
use crate::named;
use legible_core::{Error, Result, Rgb, Rgba};
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::trace;

/// `name(args)` with optional whitespace around the parentheses.
const FUNCTIONAL_PATTERN: &str = r"^(rgba?|hsla?)\s*\(\s*(.*?)\s*\)$";

const CHANNEL_NAMES: [&str; 3] = ["red", "green", "blue"];

fn functional_regex() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(FUNCTIONAL_PATTERN).ok()).as_ref()
}

// ============================================================================
// ColorInput
// ============================================================================

/// A validated color in the notation it was given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorInput {
    /// `#rgb`, `#rrggbb`, or the same digits without `#`
    Hex(Rgb),
    /// `rgb(r, g, b)`
    Rgb(Rgb),
    /// `rgba(r, g, b, a)`
    Rgba(Rgba),
    /// `hsl(h, s%, l%)`
    Hsl(Hsl),
    /// `hsla(h, s%, l%, a)`, alpha in [0, 1]
    Hsla(Hsl, f64),
    /// CSS color keyword, stored with its canonical name
    Named(&'static str, Rgb),
    /// Tuple of unit-range floats, optional alpha
    Normalized([f64; 3], Option<f64>),
    /// Tuple of 0-255 integers, optional alpha
    Components(Rgb, Option<f64>),
}

impl ColorInput {
    /// Parses a textual color. Case and surrounding whitespace are ignored.
    ///
    /// # Errors
    ///
    /// - [`Error::Malformed`] for empty input, bad hex, or bad function syntax
    /// - [`Error::UnknownName`] for a word that is not a CSS color name
    /// - range errors for components outside their bounds
    pub fn parse(input: &str) -> Result<Self> {
        let s = input.trim().to_ascii_lowercase();
        if s.is_empty() {
            return Err(Error::malformed(input, "empty color string"));
        }

        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(input, digits).map(Self::Hex);
        }

        if let Some(caps) = functional_regex().and_then(|re| re.captures(&s)) {
            let args = split_args(&caps[2]);
            trace!(func = &caps[1], args = args.len(), "functional color");
            return match &caps[1] {
                "rgb" => parse_rgb(input, &args).map(Self::Rgb),
                "rgba" => parse_rgba(input, &args).map(Self::Rgba),
                "hsl" => parse_hsl(input, &args, false).map(Self::Hsl),
                _ => parse_hsla(input, &args).map(|(hsl, a)| Self::Hsla(hsl, a)),
            };
        }
        if s.contains('(') || s.contains(')') {
            return Err(Error::malformed(input, "unrecognized color function"));
        }

        if let Some((name, rgb)) = named::lookup_entry(&s) {
            return Ok(Self::Named(name, rgb));
        }

        if matches!(s.len(), 3 | 6) && s.chars().all(|c| c.is_ascii_hexdigit()) {
            return parse_hex(input, &s).map(Self::Hex);
        }

        if s.chars().all(|c| c.is_ascii_alphabetic() || matches!(c, ' ' | '-' | '_')) {
            Err(Error::unknown_name(input.trim()))
        } else {
            Err(Error::malformed(input, "unrecognized color format"))
        }
    }

    /// Builds an input from a numeric tuple of 3 or 4 components.
    ///
    /// If every color channel is in [0, 1] and at least one has a fractional
    /// part, the tuple is [`Normalized`](Self::Normalized). Otherwise the
    /// channels must be integers in [0, 255]. A fourth component is alpha.
    ///
    /// # Errors
    ///
    /// [`Error::WrongArity`], [`Error::ChannelOutOfRange`],
    /// [`Error::AlphaOutOfRange`], or [`Error::Malformed`] for non-finite or
    /// fractional 0-255 channels.
    pub fn from_components(values: &[f64]) -> Result<Self> {
        if !matches!(values.len(), 3 | 4) {
            return Err(Error::wrong_arity(values.len()));
        }
        if values.iter().any(|v| !v.is_finite()) {
            return Err(Error::malformed(format!("{values:?}"), "non-finite component"));
        }

        let alpha = values.get(3).map(|&a| checked_alpha(a)).transpose()?;
        let channels = [values[0], values[1], values[2]];

        let unit_range = channels.iter().all(|v| (0.0..=1.0).contains(v));
        if unit_range && channels.iter().any(|v| v.fract() != 0.0) {
            return Ok(Self::Normalized(channels, alpha));
        }

        let mut out = [0u8; 3];
        for ((slot, &v), name) in out.iter_mut().zip(&channels).zip(CHANNEL_NAMES) {
            if !(0.0..=255.0).contains(&v) {
                return Err(Error::channel_out_of_range(name, v));
            }
            if v.fract() != 0.0 {
                return Err(Error::malformed(
                    format!("{values:?}"),
                    format!("{name} channel must be an integer, got {v}"),
                ));
            }
            *slot = v as u8;
        }
        Ok(Self::Components(Rgb::from(out), alpha))
    }

    /// Color channels before any alpha compositing.
    pub fn opaque_rgb(&self) -> Rgb {
        match *self {
            Self::Hex(rgb) | Self::Rgb(rgb) | Self::Named(_, rgb) | Self::Components(rgb, _) => rgb,
            Self::Rgba(rgba) => rgba.rgb,
            Self::Hsl(hsl) | Self::Hsla(hsl, _) => hsl.to_rgb(),
            Self::Normalized(unit, _) => Rgb::from_unit(unit),
        }
    }

    /// Opacity, 1.0 for forms without alpha.
    pub fn alpha(&self) -> f64 {
        match *self {
            Self::Rgba(rgba) => rgba.alpha,
            Self::Hsla(_, a) => a,
            Self::Normalized(_, a) | Self::Components(_, a) => a.unwrap_or(1.0),
            Self::Hex(_) | Self::Rgb(_) | Self::Hsl(_) | Self::Named(..) => 1.0,
        }
    }

    /// Returns `true` if compositing would change the color.
    #[inline]
    pub fn is_translucent(&self) -> bool {
        self.alpha() < 1.0
    }

    /// Channels plus alpha.
    #[inline]
    pub fn to_rgba(&self) -> Rgba {
        Rgba {
            rgb: self.opaque_rgb(),
            alpha: self.alpha(),
        }
    }

    /// Final opaque color: composited over `background` when translucent.
    pub fn to_rgb(&self, background: Rgb) -> Rgb {
        if self.is_translucent() {
            self.to_rgba().composite_over(background)
        } else {
            self.opaque_rgb()
        }
    }

    /// Notation a tuned result should be written back in.
    pub fn family(&self) -> ColorFamily {
        match self {
            Self::Hex(_) | Self::Rgba(_) | Self::Hsla(..) | Self::Named(..) => ColorFamily::Hex,
            Self::Rgb(_) => ColorFamily::Rgb,
            Self::Hsl(_) => ColorFamily::Hsl,
            Self::Normalized(..) | Self::Components(..) => ColorFamily::Tuple,
        }
    }

    /// Short name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hex(_) => "hex",
            Self::Rgb(_) => "rgb",
            Self::Rgba(_) => "rgba",
            Self::Hsl(_) => "hsl",
            Self::Hsla(..) => "hsla",
            Self::Named(..) => "named",
            Self::Normalized(..) => "normalized",
            Self::Components(..) => "components",
        }
    }
}

impl From<Rgb> for ColorInput {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        Self::Components(rgb, None)
    }
}

impl FromStr for ColorInput {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|t| !t.is_empty())
        .collect()
}

fn parse_hex(input: &str, digits: &str) -> Result<Rgb> {
    if !matches!(digits.len(), 3 | 6) {
        return Err(Error::malformed(
            input,
            format!("expected 3 or 6 hex digits, got {}", digits.len()),
        ));
    }
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(Error::malformed(input, format!("invalid hex digit '{bad}'")));
    }

    let nibble = |i: usize| -> u8 {
        // Validated above
        digits.as_bytes()[i].to_ascii_lowercase()
    };
    let value = |b: u8| -> u8 {
        match b {
            b'0'..=b'9' => b - b'0',
            _ => b - b'a' + 10,
        }
    };
    let rgb = if digits.len() == 3 {
        let expand = |i: usize| value(nibble(i)) * 17;
        Rgb::new(expand(0), expand(1), expand(2))
    } else {
        let byte = |i: usize| value(nibble(i)) << 4 | value(nibble(i + 1));
        Rgb::new(byte(0), byte(2), byte(4))
    };
    Ok(rgb)
}

fn parse_number(input: &str, token: &str) -> Result<f64> {
    match token.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(Error::malformed(input, format!("invalid number '{token}'"))),
    }
}

fn parse_channel(input: &str, channel: &'static str, token: &str) -> Result<u8> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(input, pct)? / 100.0 * 255.0,
        None => parse_number(input, token)?,
    };
    if !(0.0..=255.0).contains(&value) {
        return Err(Error::channel_out_of_range(channel, value));
    }
    Ok(value.round() as u8)
}

fn checked_alpha(value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(Error::alpha_out_of_range(value))
    }
}

fn parse_alpha(input: &str, token: &str) -> Result<f64> {
    let value = match token.strip_suffix('%') {
        Some(pct) => parse_number(input, pct)? / 100.0,
        None => parse_number(input, token)?,
    };
    checked_alpha(value)
}

fn expect_args(input: &str, func: &str, args: &[&str], n: usize) -> Result<()> {
    if args.len() == n {
        Ok(())
    } else {
        Err(Error::malformed(
            input,
            format!("{func}() takes {n} components, got {}", args.len()),
        ))
    }
}

fn parse_rgb(input: &str, args: &[&str]) -> Result<Rgb> {
    expect_args(input, "rgb", args, 3)?;
    Ok(Rgb::new(
        parse_channel(input, CHANNEL_NAMES[0], args[0])?,
        parse_channel(input, CHANNEL_NAMES[1], args[1])?,
        parse_channel(input, CHANNEL_NAMES[2], args[2])?,
    ))
}

fn parse_rgba(input: &str, args: &[&str]) -> Result<Rgba> {
    expect_args(input, "rgba", args, 4)?;
    let rgb = parse_rgb(input, &args[..3])?;
    Ok(Rgba {
        rgb,
        alpha: parse_alpha(input, args[3])?,
    })
}

fn parse_hsl(input: &str, args: &[&str], wrap_hue: bool) -> Result<Hsl> {
    let (func, n) = if wrap_hue { ("hsla", 4) } else { ("hsl", 3) };
    expect_args(input, func, args, n)?;

    let hue = args[0].strip_suffix("deg").unwrap_or(args[0]);
    let mut h = parse_number(input, hue)?;
    if wrap_hue {
        h = h.rem_euclid(360.0);
        // rem_euclid can round up to the modulus for tiny negatives
        if h >= 360.0 {
            h = 0.0;
        }
    }
    let percent = |token: &str| -> Result<f64> {
        let token = token.strip_suffix('%').unwrap_or(token);
        Ok(parse_number(input, token)? / 100.0)
    };
    Hsl::try_new(h, percent(args[1])?, percent(args[2])?)
}

fn parse_hsla(input: &str, args: &[&str]) -> Result<(Hsl, f64)> {
    let hsl = parse_hsl(input, args, true)?;
    Ok((hsl, parse_alpha(input, args[3])?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hex_forms() {
        let red = Rgb::new(255, 0, 0);
        assert_eq!(ColorInput::parse("#ff0000").unwrap(), ColorInput::Hex(red));
        assert_eq!(ColorInput::parse("#F00").unwrap(), ColorInput::Hex(red));
        assert_eq!(ColorInput::parse("  ff0000 ").unwrap(), ColorInput::Hex(red));
        assert_eq!(
            ColorInput::parse("#1a2B3c").unwrap().opaque_rgb(),
            Rgb::new(0x1a, 0x2b, 0x3c)
        );
    }

    #[test]
    fn test_bad_hex() {
        let err = ColorInput::parse("#ff00").unwrap_err();
        assert!(err.to_string().contains("3 or 6 hex digits"));
        let err = ColorInput::parse("#gg0000").unwrap_err();
        assert!(err.to_string().contains("invalid hex digit"));
        assert!(ColorInput::parse("#").is_err());
    }

    #[test]
    fn test_rgb_function() {
        let c = ColorInput::parse("RGB( 10 , 20,30 )").unwrap();
        assert_eq!(c, ColorInput::Rgb(Rgb::new(10, 20, 30)));
        assert_eq!(c.family(), ColorFamily::Rgb);

        let c = ColorInput::parse("rgb(50%, 0%, 100%)").unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(128, 0, 255));

        let c = ColorInput::parse("rgb(1 2 3)").unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_rgb_errors() {
        assert!(ColorInput::parse("rgb()").unwrap_err().is_syntax_error());
        assert!(ColorInput::parse("rgb(255)").unwrap_err().is_syntax_error());
        assert!(ColorInput::parse("rgb(1, 2, 3, 4)").is_err());
        assert!(ColorInput::parse("rgb(a, b, c)").unwrap_err().is_syntax_error());

        let err = ColorInput::parse("rgb(256, 0, 0)").unwrap_err();
        assert!(matches!(err, Error::ChannelOutOfRange { channel: "red", .. }));
        let err = ColorInput::parse("rgb(0, -1, 0)").unwrap_err();
        assert!(matches!(err, Error::ChannelOutOfRange { channel: "green", .. }));
    }

    #[test]
    fn test_rgba_function() {
        let c = ColorInput::parse("rgba(255, 0, 0, 0.5)").unwrap();
        assert_eq!(c.kind(), "rgba");
        assert_eq!(c.alpha(), 0.5);
        assert_eq!(c.family(), ColorFamily::Hex);
        assert_eq!(c.to_rgb(Rgb::WHITE), Rgb::new(255, 128, 128));
        assert_eq!(c.to_rgb(Rgb::BLACK), Rgb::new(128, 0, 0));

        let c = ColorInput::parse("rgba(0, 0, 0, 25%)").unwrap();
        assert_abs_diff_eq!(c.alpha(), 0.25);

        let err = ColorInput::parse("rgba(0, 0, 0, 1.5)").unwrap_err();
        assert!(matches!(err, Error::AlphaOutOfRange { .. }));
        assert!(ColorInput::parse("rgba(0, 0, 0)").is_err());
    }

    #[test]
    fn test_hsl_function() {
        let c = ColorInput::parse("hsl(120, 100%, 50%)").unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(c.family(), ColorFamily::Hsl);

        let c = ColorInput::parse("hsl(240 100% 50%)").unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(0, 0, 255));

        let err = ColorInput::parse("hsl(360, 100%, 50%)").unwrap_err();
        assert!(matches!(err, Error::ComponentOutOfRange { component: "hue", .. }));
        assert!(ColorInput::parse("hsl(0, 120%, 50%)").unwrap_err().is_range_error());
    }

    #[test]
    fn test_hsla_function() {
        let c = ColorInput::parse("hsla(0, 100%, 50%, 0.5)").unwrap();
        assert_eq!(c.to_rgb(Rgb::WHITE), Rgb::new(255, 128, 128));

        // Hue wraps for hsla
        let a = ColorInput::parse("hsla(480, 100%, 50%, 1)").unwrap();
        assert_eq!(a.opaque_rgb(), Rgb::new(0, 255, 0));
        let b = ColorInput::parse("hsla(-240 100% 50% / 1)").unwrap();
        assert_eq!(b.opaque_rgb(), Rgb::new(0, 255, 0));
        assert_eq!(a.family(), ColorFamily::Hex);
    }

    #[test]
    fn test_named() {
        let c = ColorInput::parse("  RebeccaPurple ").unwrap();
        assert_eq!(c, ColorInput::Named("rebeccapurple", Rgb::new(102, 51, 153)));
        assert_eq!(c.family(), ColorFamily::Hex);

        let err = ColorInput::parse("blurple").unwrap_err();
        assert!(matches!(err, Error::UnknownName { .. }));
    }

    #[test]
    fn test_bare_hex_word() {
        assert_eq!(
            ColorInput::parse("bad").unwrap(),
            ColorInput::Hex(Rgb::new(0xbb, 0xaa, 0xdd))
        );
    }

    #[test]
    fn test_empty_and_garbage() {
        assert!(ColorInput::parse("").unwrap_err().is_syntax_error());
        assert!(ColorInput::parse("   ").unwrap_err().is_syntax_error());
        let err = ColorInput::parse("12;34").unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
        let err = ColorInput::parse("cmyk(0, 0, 0, 0)").unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
    }

    #[test]
    fn test_components_integer() {
        let c = ColorInput::from_components(&[255.0, 0.0, 0.0]).unwrap();
        assert_eq!(c, ColorInput::Components(Rgb::new(255, 0, 0), None));
        assert_eq!(c.family(), ColorFamily::Tuple);

        // All in [0, 1] but integral: still 0-255 channels
        let c = ColorInput::from_components(&[1.0, 0.0, 1.0]).unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(1, 0, 1));
    }

    #[test]
    fn test_components_normalized() {
        let c = ColorInput::from_components(&[1.0, 0.5, 0.0]).unwrap();
        assert_eq!(c.kind(), "normalized");
        assert_eq!(c.opaque_rgb(), Rgb::new(255, 128, 0));
        assert_eq!(c.family(), ColorFamily::Tuple);
    }

    #[test]
    fn test_components_alpha() {
        let c = ColorInput::from_components(&[0.0, 0.0, 0.0, 0.5]).unwrap();
        assert_eq!(c.kind(), "components");
        assert_eq!(c.to_rgb(Rgb::WHITE), Rgb::gray(128));

        let err = ColorInput::from_components(&[0.0, 0.0, 0.0, 2.0]).unwrap_err();
        assert!(matches!(err, Error::AlphaOutOfRange { .. }));
    }

    #[test]
    fn test_components_errors() {
        let err = ColorInput::from_components(&[1.0, 2.0]).unwrap_err();
        assert_eq!(err, Error::wrong_arity(2));
        let err = ColorInput::from_components(&[1.0, 2.0, 3.0, 0.5, 1.0]).unwrap_err();
        assert_eq!(err, Error::wrong_arity(5));

        let err = ColorInput::from_components(&[300.0, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::ChannelOutOfRange { channel: "red", .. }));
        let err = ColorInput::from_components(&[0.0, -5.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::ChannelOutOfRange { channel: "green", .. }));
        let err = ColorInput::from_components(&[10.5, 0.0, 0.0]).unwrap_err();
        assert!(matches!(err, Error::Malformed { .. }));
        assert!(ColorInput::from_components(&[f64::NAN, 0.0, 0.0]).is_err());
    }

    #[test]
    fn test_from_str() {
        let c: ColorInput = "navy".parse().unwrap();
        assert_eq!(c.opaque_rgb(), Rgb::new(0, 0, 128));
    }
}
