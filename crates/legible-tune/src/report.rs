//! Detailed tuning report.

use crate::strategy::StrategyResult;
use legible_color::WcagLevel;
use serde::Serialize;
use std::fmt;

/// Fixed-field report for one tuned pair.
///
/// Colors are stored as display strings so the report can be printed or
/// serialized without further formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TuneReport {
    /// Original text color.
    pub text: String,
    /// Tuned text color.
    pub tuned_text: String,
    /// Background color.
    pub background: String,
    /// Large-text thresholds were used.
    pub large: bool,
    /// WCAG level of the tuned pair.
    pub wcag_level: WcagLevel,
    /// Contrast gain in percent, rounded to 2 decimals.
    pub improvement_percentage: f64,
    /// Whether the tuned pair meets the minimum.
    pub status: bool,
    /// Human-readable summary.
    pub message: String,
    /// Contrast of the tuned pair.
    pub contrast: f64,
    /// Contrast of the original pair.
    pub original_contrast: f64,
    /// CIEDE2000 distance between original and tuned text.
    pub delta_e: f64,
}

impl TuneReport {
    /// Builds a report from a strategy result and the display strings of
    /// the three colors.
    pub fn new(
        result: &StrategyResult,
        text: impl Into<String>,
        tuned_text: impl Into<String>,
        background: impl Into<String>,
        large: bool,
    ) -> Self {
        Self {
            text: text.into(),
            tuned_text: tuned_text.into(),
            background: background.into(),
            large,
            wcag_level: result.level,
            improvement_percentage: result.improvement_percentage,
            status: result.success,
            message: message(result),
            contrast: result.contrast,
            original_contrast: result.original_contrast,
            delta_e: result.delta_e,
        }
    }
}

impl fmt::Display for TuneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} -> {} on {}", self.text, self.tuned_text, self.background)?;
        writeln!(
            f,
            "contrast {:.2} -> {:.2} ({:+.2}%), level {}, dE {:.2}",
            self.original_contrast, self.contrast, self.improvement_percentage, self.wcag_level, self.delta_e
        )?;
        write!(f, "{}", self.message)
    }
}

fn message(result: &StrategyResult) -> String {
    if result.unchanged {
        format!(
            "Perfect! Your pair is already accessible with a contrast ratio of {:.2}.",
            result.contrast
        )
    } else if result.success && result.level != WcagLevel::Fail {
        format!(
            "Your pair was not accessible, but now it is {} compliant with a contrast ratio of {:.2}.",
            result.level, result.contrast
        )
    } else {
        format!(
            "Please choose a different color, your pair is not accessible with a contrast ratio of {:.2}.",
            result.contrast
        )
    }
}
