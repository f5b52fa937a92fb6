//! Error types for color input validation.
//!
//! Every failure here is an **invalid color input**: a channel outside its
//! range, a malformed textual form, or a tuple of the wrong length. These are
//! raised at the input boundary only. The numeric core works on values that
//! were already validated and never produces them itself.
//!
//! # Usage
//!
//! ```rust
//! use legible_core::{Error, Rgb};
//!
//! let err = Rgb::try_new(300, 0, 0).unwrap_err();
//! assert!(matches!(err, Error::ChannelOutOfRange { channel: "red", .. }));
//! assert!(err.to_string().contains("out of range"));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Rgb`], [`crate::Rgba`], [`crate::Oklch`] - checked constructors
//! - `legible-parse` - textual and tuple parsing
//! - `legible-tune` - wrapped into `TuneError`

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Invalid color input.
///
/// # Categories
///
/// - **Range errors**: [`ChannelOutOfRange`](Error::ChannelOutOfRange),
///   [`AlphaOutOfRange`](Error::AlphaOutOfRange),
///   [`ComponentOutOfRange`](Error::ComponentOutOfRange),
///   [`InvalidOklch`](Error::InvalidOklch)
/// - **Shape errors**: [`WrongArity`](Error::WrongArity), [`InvalidPair`](Error::InvalidPair)
/// - **Syntax errors**: [`Malformed`](Error::Malformed), [`UnknownName`](Error::UnknownName)
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// An RGB channel is outside [0, 255].
    ///
    /// Values are never clamped at the input boundary.
    #[error("{channel} channel value {value} out of range [0, 255]")]
    ChannelOutOfRange {
        /// Channel name (`"red"`, `"green"`, `"blue"`)
        channel: &'static str,
        /// Offending value
        value: f64,
    },

    /// Alpha is outside [0, 1].
    #[error("alpha value {value} out of range [0, 1]")]
    AlphaOutOfRange {
        /// Offending value
        value: f64,
    },

    /// A non-RGB component (hue, saturation, lightness) is out of range.
    #[error("{component} value {value} out of range [{min}, {max}]")]
    ComponentOutOfRange {
        /// Component name
        component: &'static str,
        /// Offending value
        value: f64,
        /// Inclusive lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// Numeric color tuple has the wrong number of components.
    #[error("color tuple must have length 3 or 4, got {got}")]
    WrongArity {
        /// Number of components supplied
        got: usize,
    },

    /// Textual color could not be parsed.
    #[error("malformed color '{input}': {reason}")]
    Malformed {
        /// The input as given
        input: String,
        /// What was wrong with it
        reason: String,
    },

    /// Not a known CSS color name.
    #[error("unknown color name '{name}'")]
    UnknownName {
        /// Name as given
        name: String,
    },

    /// One or both colors of a text/background pair are invalid.
    ///
    /// `details` lists each failure prefixed with `Text: ` or `Background: `.
    #[error("invalid color pair: {details}")]
    InvalidPair {
        /// Joined per-color messages
        details: String,
    },

    /// OKLCH triple outside L in [0, 1], C >= 0, H in [0, 360].
    #[error("OKLCH value ({l}, {c}, {h}) out of range")]
    InvalidOklch {
        /// Lightness
        l: f64,
        /// Chroma
        c: f64,
        /// Hue in degrees
        h: f64,
    },
}

impl Error {
    /// Creates an [`Error::ChannelOutOfRange`] error.
    #[inline]
    pub fn channel_out_of_range(channel: &'static str, value: impl Into<f64>) -> Self {
        Self::ChannelOutOfRange {
            channel,
            value: value.into(),
        }
    }

    /// Creates an [`Error::AlphaOutOfRange`] error.
    #[inline]
    pub fn alpha_out_of_range(value: f64) -> Self {
        Self::AlphaOutOfRange { value }
    }

    /// Creates an [`Error::ComponentOutOfRange`] error.
    #[inline]
    pub fn component_out_of_range(component: &'static str, value: f64, min: f64, max: f64) -> Self {
        Self::ComponentOutOfRange {
            component,
            value,
            min,
            max,
        }
    }

    /// Creates an [`Error::WrongArity`] error.
    #[inline]
    pub fn wrong_arity(got: usize) -> Self {
        Self::WrongArity { got }
    }

    /// Creates an [`Error::Malformed`] error.
    ///
    /// # Arguments
    ///
    /// * `input` - The offending text, kept verbatim for the message
    /// * `reason` - Short description of the problem
    #[inline]
    pub fn malformed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::UnknownName`] error.
    #[inline]
    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Creates an [`Error::InvalidPair`] error from the per-color failures.
    ///
    /// Returns `None` when neither color failed.
    pub fn invalid_pair(text: Option<&Error>, background: Option<&Error>) -> Option<Self> {
        let parts: Vec<String> = [("Text", text), ("Background", background)]
            .into_iter()
            .filter_map(|(label, err)| err.map(|e| format!("{label}: {e}")))
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(Self::InvalidPair {
                details: parts.join(", "),
            })
        }
    }

    /// Returns `true` if a value was syntactically fine but out of range.
    #[inline]
    pub fn is_range_error(&self) -> bool {
        matches!(
            self,
            Self::ChannelOutOfRange { .. }
                | Self::AlphaOutOfRange { .. }
                | Self::ComponentOutOfRange { .. }
                | Self::InvalidOklch { .. }
        )
    }

    /// Returns `true` if the input text could not be understood at all.
    #[inline]
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::UnknownName { .. })
    }
}
