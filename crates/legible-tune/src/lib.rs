//! # legible-tune
//!
//! Minimal-change WCAG contrast tuning.
//!
//! Given a text color and a background, finds the text color closest to the
//! original (by CIEDE2000) that meets the WCAG contrast minimum, moving only
//! OKLCH lightness and chroma so the hue is preserved.
//!
//! # Architecture
//!
//! ```text
//!   tune / tune_detailed / tune_str / tune_bulk
//!                     |
//!               Dispatcher  ---- TuneConfig (YAML)
//!          strict | recursive | relaxed
//!                     |
//!        +------------+------------+
//!        |                         |
//!   BinarySearch            GradientDescent
//!   (lightness)            (lightness, chroma)
//!        |                         |
//!        +------------+------------+
//!                     |
//!               legible-color
//!   OKLCH conversions, CIEDE2000, WCAG contrast
//! ```
//!
//! # Modes
//!
//! | Mode | Number | Behavior |
//! |------|--------|----------|
//! | [`Mode::Strict`] | 0 | One pass over the tolerance sequence |
//! | [`Mode::Recursive`] | 1 | Repeated passes, re-anchored each round (default) |
//! | [`Mode::Relaxed`] | 2 | Recursive, then wider fallbacks |
//!
//! # Usage
//!
//! ```rust
//! use legible_core::Rgb;
//! use legible_tune::{Mode, tune, tune_detailed};
//!
//! let text = Rgb::new(119, 119, 119);
//! let (tuned, ok) = tune(text, Rgb::WHITE, false, Mode::Recursive, false);
//! assert!(ok);
//! assert_ne!(tuned, text);
//!
//! let report = tune_detailed(Rgb::BLACK, Rgb::WHITE, false, Mode::Recursive, false);
//! assert!(report.status);
//! assert_eq!(report.improvement_percentage, 0.0);
//! ```
//!
//! Textual colors keep their notation:
//!
//! ```rust
//! use legible_tune::{Mode, tune_str};
//!
//! let (tuned, ok) = tune_str("hsl(0, 0%, 47%)", "white", false, Mode::Recursive, false)?;
//! assert!(ok);
//! assert!(tuned.starts_with("hsl("));
//! # Ok::<(), legible_tune::TuneError>(())
//! ```
//!
//! # Features
//!
//! - `parallel` (default) - Relaxed fallbacks and batch tuning use rayon
//!
//! # Dependencies
//!
//! - [`legible-color`] - Conversions, CIEDE2000, contrast
//! - [`legible-parse`] - Textual color input and output mirroring
//! - [`serde`], [`serde_yaml`] - Config and report serialization
//! - [`thiserror`] - Error types
//! - [`tracing`] - Search and strategy diagnostics
//! - [`rayon`] - Optional parallelism
//!
//! # Used By
//!
//! - `legible` CLI - `tune` and `batch` commands

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bulk;
pub mod config;
mod error;
mod parallel;
pub mod report;
pub mod search;
pub mod strategy;
pub mod target;

pub use bulk::{BulkOutcome, Readability, tune_bulk};
pub use config::{BinaryConfig, GradientConfig, ToleranceSequence, TuneConfig};
pub use error::{TuneError, TuneResult};
pub use report::TuneReport;
pub use search::{BinarySearch, Candidate, CandidateSearch, GradientDescent, SearchProblem};
pub use strategy::{Dispatcher, StrategyResult};
pub use target::{ContrastTarget, Mode};

use legible_core::Rgb;
use legible_parse::ColorPair;

/// Prelude with commonly used items
pub mod prelude {
    pub use crate::{
        Mode, StrategyResult, TuneConfig, TuneError, TuneReport, TuneResult, tune, tune_detailed,
        tune_str, tune_with_config,
    };
}

// ============================================================================
// RGB entry points
// ============================================================================

/// Tunes `text` against `background` with default settings.
///
/// Returns the tuned color and whether it meets the minimum contrast. If the
/// pair is already accessible, `text` comes back unchanged.
pub fn tune(text: Rgb, background: Rgb, large: bool, mode: Mode, premium: bool) -> (Rgb, bool) {
    let result = tune_with_config(text, background, large, mode, premium, &TuneConfig::default());
    (result.tuned, result.success)
}

/// Like [`tune`], with explicit settings and the full result.
pub fn tune_with_config(
    text: Rgb,
    background: Rgb,
    large: bool,
    mode: Mode,
    premium: bool,
    config: &TuneConfig,
) -> StrategyResult {
    Dispatcher::new(config).tune(text, background, large, mode, premium)
}

/// Tunes a pair and returns a [`TuneReport`].
///
/// Colors in the report use `rgb(r, g, b)` notation.
pub fn tune_detailed(text: Rgb, background: Rgb, large: bool, mode: Mode, premium: bool) -> TuneReport {
    let result = tune_with_config(text, background, large, mode, premium, &TuneConfig::default());
    TuneReport::new(
        &result,
        text.to_string(),
        result.tuned.to_string(),
        background.to_string(),
        large,
    )
}

/// Tunes many RGB pairs, in parallel when enabled. Output order matches
/// input order.
pub fn tune_batch(
    pairs: &[(Rgb, Rgb, bool)],
    mode: Mode,
    premium: bool,
    config: &TuneConfig,
) -> Vec<StrategyResult> {
    let dispatcher = Dispatcher::new(config);
    parallel::map_ordered(pairs, |&(text, background, large)| {
        dispatcher.tune(text, background, large, mode, premium)
    })
}

// ============================================================================
// Textual entry points
// ============================================================================

/// Tunes textual colors with default settings.
///
/// Returns the tuned text color in the notation it was given in, and the
/// success flag.
///
/// # Errors
///
/// [`TuneError::Color`] if either color fails to parse.
pub fn tune_str(
    text: &str,
    background: &str,
    large: bool,
    mode: Mode,
    premium: bool,
) -> TuneResult<(String, bool)> {
    let report = tune_detailed_str(text, background, large, mode, premium, &TuneConfig::default())?;
    Ok((report.tuned_text, report.status))
}

/// Tunes textual colors and returns a [`TuneReport`].
///
/// `text` and `background` are echoed as given (trimmed); `tuned_text`
/// mirrors the notation of `text`, and is `text` itself when the pair
/// already meets the target.
///
/// # Errors
///
/// [`TuneError::Color`] if either color fails to parse.
pub fn tune_detailed_str(
    text: &str,
    background: &str,
    large: bool,
    mode: Mode,
    premium: bool,
    config: &TuneConfig,
) -> TuneResult<TuneReport> {
    let pair = ColorPair::parse(text, background)?;
    let result = tune_with_config(pair.text_rgb, pair.background_rgb, large, mode, premium, config);
    let tuned = if result.unchanged {
        text.trim().to_string()
    } else {
        pair.text.family().format(result.tuned)
    };
    Ok(TuneReport::new(&result, text.trim(), tuned, background.trim(), large))
}

#[cfg(test)]
mod tests {
    use super::*;
    use legible_color::{WcagLevel, contrast_ratio, delta_e_2000};

    #[test]
    fn test_black_on_white_unchanged() {
        for mode in Mode::ALL {
            assert_eq!(tune(Rgb::BLACK, Rgb::WHITE, false, mode, false), (Rgb::BLACK, true));
        }
        let report = tune_detailed(Rgb::BLACK, Rgb::WHITE, false, Mode::Recursive, false);
        assert_eq!(report.wcag_level, WcagLevel::AAA);
        assert!(report.message.starts_with("Perfect!"));
        assert_eq!(report.text, "rgb(0, 0, 0)");
        assert_eq!(report.tuned_text, "rgb(0, 0, 0)");
    }

    #[test]
    fn test_gray_119_recursive() {
        let text = Rgb::gray(119);
        let (tuned, ok) = tune(text, Rgb::WHITE, false, Mode::Recursive, false);
        assert!(ok);
        assert!(contrast_ratio(tuned, Rgb::WHITE) >= 4.5);
        assert!(delta_e_2000(text, tuned) < 3.0);
    }

    #[test]
    fn test_light_gray_reaches_aa_or_reports() {
        let text = Rgb::gray(200);
        let original = contrast_ratio(text, Rgb::WHITE);
        assert!(original < 4.5);
        for mode in Mode::ALL {
            let report = tune_detailed(text, Rgb::WHITE, false, mode, false);
            if report.status {
                assert!(report.contrast >= 4.5);
                assert!(report.message.contains("compliant"));
            } else {
                assert!(report.message.starts_with("Please choose"));
            }
            assert!(report.contrast >= original - 1e-9);
        }
    }

    #[test]
    fn test_premium_needs_aaa() {
        // AA on white, short of AAA
        let text = Rgb::gray(0x76);
        let result = tune_with_config(text, Rgb::WHITE, false, Mode::Recursive, true, &TuneConfig::default());
        assert!(!result.unchanged);
        assert!(result.success);
        assert!(result.contrast >= 7.0, "{}", result.contrast);
        assert_eq!(result.level, WcagLevel::AAA);
    }

    #[test]
    fn test_batch_matches_single() {
        let config = TuneConfig::default();
        let pairs = [
            (Rgb::gray(119), Rgb::WHITE, false),
            (Rgb::new(40, 40, 40), Rgb::BLACK, true),
            (Rgb::gray(128), Rgb::gray(128), false),
        ];
        let batch = tune_batch(&pairs, Mode::Strict, false, &config);
        for (&(t, b, l), got) in pairs.iter().zip(&batch) {
            assert_eq!(*got, tune_with_config(t, b, l, Mode::Strict, false, &config));
        }
    }

    #[test]
    fn test_tune_str_mirrors_family() {
        let (tuned, ok) = tune_str("#777", "white", false, Mode::Recursive, false).unwrap();
        assert!(ok);
        assert!(tuned.starts_with('#') && tuned.len() == 7, "{tuned}");

        let (tuned, _) = tune_str("rgb(119, 119, 119)", "#fff", false, Mode::Strict, false).unwrap();
        assert!(tuned.starts_with("rgb("), "{tuned}");

        let (tuned, ok) = tune_str("black", "white", false, Mode::Strict, false).unwrap();
        assert_eq!((tuned.as_str(), ok), ("black", true));
    }

    #[test]
    fn test_tune_str_keeps_accessible_input() {
        for text in ["black", "#000", "rgba(0,0,0,1)", "hsla(0, 0%, 0%, 1)"] {
            for mode in Mode::ALL {
                let (tuned, ok) = tune_str(text, "white", false, mode, false).unwrap();
                assert_eq!((tuned.as_str(), ok), (text, true), "{mode}");
            }
        }

        let report =
            tune_detailed_str("  #000 ", "white", false, Mode::Recursive, false, &TuneConfig::default())
                .unwrap();
        assert_eq!(report.tuned_text, "#000");
        assert_eq!(report.tuned_text, report.text);
    }

    #[test]
    fn test_tune_str_errors() {
        let err = tune_str("nope", "white", false, Mode::Recursive, false).unwrap_err();
        assert!(matches!(err, TuneError::Color(_)));
        assert!(err.to_string().contains("Text: "));
    }
}
