//! # legible-parse
//!
//! Color input boundary for legible.
//!
//! Turns user-supplied colors into validated [`Rgb`](legible_core::Rgb)
//! values, and writes tuned results back in the notation they came in.
//!
//! # Accepted Inputs
//!
//! | Form | Example | Variant |
//! |------|---------|---------|
//! | Hex | `#f00`, `#ff0000`, `ff0000` | [`ColorInput::Hex`] |
//! | rgb() | `rgb(255, 0, 0)`, `rgb(100% 0% 0%)` | [`ColorInput::Rgb`] |
//! | rgba() | `rgba(255, 0, 0, 0.5)` | [`ColorInput::Rgba`] |
//! | hsl() | `hsl(0, 100%, 50%)` | [`ColorInput::Hsl`] |
//! | hsla() | `hsla(0 100% 50% / 0.5)` | [`ColorInput::Hsla`] |
//! | Name | `rebeccapurple` | [`ColorInput::Named`] |
//! | Tuple | `[1.0, 0.5, 0.0]` | [`ColorInput::Normalized`] |
//! | Tuple | `[255, 128, 0, 0.5]` | [`ColorInput::Components`] |
//!
//! # Usage
//!
//! ```rust
//! use legible_parse::{ColorPair, ColorInput, ColorFamily};
//!
//! let pair = ColorPair::parse("hsl(0, 0%, 47%)", "white").unwrap();
//! assert_eq!(pair.text.family(), ColorFamily::Hsl);
//! assert_eq!(pair.text.family().format(pair.text_rgb), "hsl(0, 0%, 47%)");
//!
//! assert!(ColorInput::parse("not-a-color").is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`legible-core`] - Color types and input errors
//! - [`regex`] - Functional notation matching
//! - [`tracing`] - Parse diagnostics
//!
//! # Used By
//!
//! - `legible-tune` - `tune_str` and bulk tuning
//! - `legible` CLI - every command that takes a color

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod format;
pub mod hsl;
pub mod input;
pub mod named;
pub mod pair;

pub use format::ColorFamily;
pub use hsl::{Hsl, hsl_to_rgb, rgb_to_hsl};
pub use input::ColorInput;
pub use pair::ColorPair;
