//! Bulk tuning of textual color pairs.
//!
//! Each item is parsed and tuned on its own. A bad item yields an error in
//! its slot and the rest of the batch carries on. Output order matches
//! input order.

use crate::config::TuneConfig;
use crate::error::TuneResult;
use crate::parallel;
use crate::strategy::Dispatcher;
use crate::target::Mode;
use legible_color::WcagLevel;
use legible_parse::ColorPair;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Coarse readability label for a tuned pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Readability {
    /// AAA.
    VeryReadable,
    /// AA.
    Readable,
    /// Below AA.
    NotReadable,
}

impl Readability {
    /// Label text: `very readable`, `readable`, `not readable`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VeryReadable => "very readable",
            Self::Readable => "readable",
            Self::NotReadable => "not readable",
        }
    }
}

impl From<WcagLevel> for Readability {
    fn from(level: WcagLevel) -> Self {
        match level {
            WcagLevel::AAA => Self::VeryReadable,
            WcagLevel::AA => Self::Readable,
            WcagLevel::Fail => Self::NotReadable,
        }
    }
}

impl fmt::Display for Readability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result for one bulk item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkOutcome {
    /// Tuned text color in the notation it was given in, or the input
    /// text itself when the pair already met the target.
    pub tuned: String,
    /// Readability of the tuned pair.
    pub readability: Readability,
}

/// Tunes `(text, background, large)` triples, in parallel when enabled.
///
/// # Example
///
/// ```rust
/// use legible_tune::{Mode, Readability, TuneConfig, tune_bulk};
///
/// let pairs = [("#777777", "white", false), ("nope", "white", false)];
/// let out = tune_bulk(&pairs, Mode::Recursive, false, &TuneConfig::default());
///
/// let first = out[0].as_ref().unwrap();
/// assert!(first.tuned.starts_with('#'));
/// assert_ne!(first.readability, Readability::NotReadable);
/// assert!(out[1].is_err());
/// ```
pub fn tune_bulk<S>(
    pairs: &[(S, S, bool)],
    mode: Mode,
    premium: bool,
    config: &TuneConfig,
) -> Vec<TuneResult<BulkOutcome>>
where
    S: AsRef<str> + Sync,
{
    let dispatcher = Dispatcher::new(config);
    debug!(count = pairs.len(), %mode, premium, "bulk tune");

    parallel::map_ordered(pairs, |(text, background, large)| -> TuneResult<BulkOutcome> {
        let pair = ColorPair::parse(text.as_ref(), background.as_ref())?;
        let result = dispatcher.tune(pair.text_rgb, pair.background_rgb, *large, mode, premium);
        let tuned = if result.unchanged {
            text.as_ref().trim().to_string()
        } else {
            pair.text.family().format(result.tuned)
        };
        Ok(BulkOutcome {
            tuned,
            readability: result.level.into(),
        })
    })
}
