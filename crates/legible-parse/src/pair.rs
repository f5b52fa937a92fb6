//! Text/background pairs.
//!
//! The background is resolved first, composited over white when it has
//! alpha. The text is then composited over that resolved background, so a
//! translucent foreground is judged on what is actually behind it.

use crate::input::ColorInput;
use legible_core::{Error, Result, Rgb};

/// A parsed text/background pair with both colors resolved to opaque RGB.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPair {
    /// Text color as given
    pub text: ColorInput,
    /// Background color as given
    pub background: ColorInput,
    /// Opaque text color after compositing
    pub text_rgb: Rgb,
    /// Opaque background after compositing over white
    pub background_rgb: Rgb,
}

impl ColorPair {
    /// Builds a pair from already-parsed inputs.
    pub fn new(text: ColorInput, background: ColorInput) -> Self {
        let background_rgb = background.to_rgb(Rgb::WHITE);
        let text_rgb = text.to_rgb(background_rgb);
        Self {
            text,
            background,
            text_rgb,
            background_rgb,
        }
    }

    /// Parses both colors.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidPair`] listing every color that failed, each prefixed
    /// with `Text: ` or `Background: `.
    ///
    /// # Example
    ///
    /// ```rust
    /// use legible_parse::ColorPair;
    ///
    /// let pair = ColorPair::parse("rgba(0, 0, 0, 0.5)", "white").unwrap();
    /// assert_eq!(pair.text_rgb.to_hex(), "#808080");
    ///
    /// let err = ColorPair::parse("nope", "#12").unwrap_err();
    /// let msg = err.to_string();
    /// assert!(msg.contains("Text: ") && msg.contains("Background: "));
    /// ```
    pub fn parse(text: &str, background: &str) -> Result<Self> {
        let background = ColorInput::parse(background);
        let text = ColorInput::parse(text);
        Self::combine(text, background)
    }

    /// Like [`parse`](Self::parse), for numeric tuples.
    pub fn from_components(text: &[f64], background: &[f64]) -> Result<Self> {
        let background = ColorInput::from_components(background);
        let text = ColorInput::from_components(text);
        Self::combine(text, background)
    }

    /// Contrast-relevant colors as `(text, background)`.
    #[inline]
    pub fn rgb(&self) -> (Rgb, Rgb) {
        (self.text_rgb, self.background_rgb)
    }

    fn combine(text: Result<ColorInput>, background: Result<ColorInput>) -> Result<Self> {
        match Error::invalid_pair(text.as_ref().err(), background.as_ref().err()) {
            Some(err) => Err(err),
            None => Ok(Self::new(text?, background?)),
        }
    }
}
