//! Strategy dispatch: strict, recursive and relaxed tuning.
//!
//! ```text
//!            contrast >= minimum? ──yes──> unchanged, success
//!                    │ no
//!     ┌──────────────┼─────────────────┐
//!   Strict       Recursive          Relaxed
//!     │              │                 │
//!  one pass     rounds of strict    Recursive ──ok──> done
//!  over the     passes, each           │ fail
//!  tolerances   anchored on the     join( Recursive with more rounds
//!               last output               and a wider drift cap,
//!               (drift capped)            strict pass over wide tolerances )
//!                                          │
//!                                   closest passing to the original
//! ```
//!
//! All loops are bounded by config values, so every call terminates after
//! a fixed number of conversions.

use crate::config::TuneConfig;
use crate::parallel;
use crate::search::{BinarySearch, Candidate, CandidateSearch, GradientDescent, SearchProblem};
use crate::target::{ContrastTarget, Mode};
use legible_color::{WcagLevel, contrast_ratio, delta_e_2000, wcag_level};
use legible_core::Rgb;
use serde::Serialize;
use tracing::debug;

/// Outcome of one tuning call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrategyResult {
    /// Tuned text color (the input itself if nothing better was found).
    pub tuned: Rgb,
    /// Whether `contrast` meets the minimum for the request.
    pub success: bool,
    /// Contrast of the tuned pair.
    pub contrast: f64,
    /// CIEDE2000 distance from the original text color.
    pub delta_e: f64,
    /// WCAG level of the tuned pair.
    pub level: WcagLevel,
    /// Contrast gain in percent, rounded to 2 decimals.
    pub improvement_percentage: f64,
    /// Contrast of the original pair.
    pub original_contrast: f64,
    /// `true` if the input already met the minimum and no search ran.
    pub unchanged: bool,
}

/// Runs the tuning strategies with one set of parameters.
#[derive(Debug, Clone)]
pub struct Dispatcher<'a> {
    config: &'a TuneConfig,
    binary: BinarySearch,
    gradient: GradientDescent,
}

impl<'a> Dispatcher<'a> {
    /// Creates a dispatcher for `config`.
    pub fn new(config: &'a TuneConfig) -> Self {
        Self {
            config,
            binary: BinarySearch::new(config.binary),
            gradient: GradientDescent::new(config.gradient),
        }
    }

    /// Tunes `text` against `background`.
    ///
    /// Returns the input unchanged (and `success = true`) if it already meets
    /// the minimum.
    pub fn tune(&self, text: Rgb, background: Rgb, large: bool, mode: Mode, premium: bool) -> StrategyResult {
        let target = ContrastTarget::new(large, premium);
        let original_contrast = contrast_ratio(text, background);

        if target.is_met(original_contrast) {
            debug!(contrast = original_contrast, "already accessible");
            return StrategyResult {
                tuned: text,
                success: true,
                contrast: original_contrast,
                delta_e: 0.0,
                level: wcag_level(original_contrast, large),
                improvement_percentage: 0.0,
                original_contrast,
                unchanged: true,
            };
        }

        let tuned = match mode {
            Mode::Strict => self.strict(text, background, target),
            Mode::Recursive => self.recursive(
                text,
                background,
                target,
                self.config.recursive_rounds,
                self.config.max_drift,
            ),
            Mode::Relaxed => self.relaxed(text, background, target),
        };

        let contrast = contrast_ratio(tuned, background);
        let result = StrategyResult {
            tuned,
            success: target.is_met(contrast),
            contrast,
            delta_e: delta_e_2000(text, tuned),
            level: wcag_level(contrast, large),
            improvement_percentage: round2((contrast - original_contrast) / original_contrast * 100.0),
            original_contrast,
            unchanged: false,
        };
        debug!(
            %mode,
            success = result.success,
            contrast = result.contrast,
            delta_e = result.delta_e,
            "tuned"
        );
        result
    }

    /// One pass over `budgets`, binary search then gradient descent at each.
    ///
    /// Returns the first candidate that reaches the target. Otherwise keeps
    /// the best one seen (higher contrast, then lower distance), stopping
    /// early once it meets the minimum at a budget no larger than
    /// `early_exit_budget`. `None` if nothing improved on `text`.
    pub fn strict_pass(
        &self,
        text: Rgb,
        background: Rgb,
        target: ContrastTarget,
        budgets: impl IntoIterator<Item = f64>,
    ) -> Option<Candidate> {
        let base = SearchProblem {
            text,
            background,
            target: target.target,
            budget: 0.0,
        };
        let mut best: Option<Candidate> = None;
        let mut best_contrast = base.original_contrast();

        for budget in budgets {
            let problem = base.with_budget(budget);
            for searcher in self.searchers() {
                let Some(cand) = searcher.search(&problem) else {
                    continue;
                };
                if cand.contrast >= target.target {
                    debug!(budget, searcher = searcher.name(), contrast = cand.contrast, "target reached");
                    return Some(cand);
                }
                let better = cand.contrast > best_contrast
                    || (cand.contrast == best_contrast
                        && best.is_some_and(|b| cand.delta_e < b.delta_e));
                if better {
                    best_contrast = cand.contrast;
                    best = Some(cand);
                }
            }

            if best.is_some() && best_contrast >= target.minimum && budget <= self.config.early_exit_budget {
                debug!(budget, contrast = best_contrast, "early exit");
                return best;
            }
        }
        best
    }

    fn searchers(&self) -> [&dyn CandidateSearch; 2] {
        [&self.binary, &self.gradient]
    }

    fn strict(&self, text: Rgb, background: Rgb, target: ContrastTarget) -> Rgb {
        self.strict_pass(text, background, target, self.config.tolerances.as_slice().iter().copied())
            .map_or(text, |c| c.rgb)
    }

    /// Bounded rounds of strict passes, each anchored on the previous output.
    ///
    /// Total CIEDE2000 drift from `original` never exceeds `max_drift`:
    /// each round only uses budgets within the remaining allowance, and a
    /// result past the cap is rejected. Stops on success, when a round finds
    /// nothing or gains no contrast, or after `rounds`.
    pub fn recursive(
        &self,
        original: Rgb,
        background: Rgb,
        target: ContrastTarget,
        rounds: usize,
        max_drift: f64,
    ) -> Rgb {
        let mut current = original;
        let mut current_contrast = contrast_ratio(original, background);

        for round in 1..=rounds {
            if target.is_met(current_contrast) {
                break;
            }
            let remaining = max_drift - delta_e_2000(original, current);
            let budgets = self.config.tolerances.up_to(remaining);
            let Some(cand) = self.strict_pass(current, background, target, budgets) else {
                debug!(round, remaining, "no candidate");
                break;
            };

            let drift = delta_e_2000(original, cand.rgb);
            if drift > max_drift {
                debug!(round, drift, max_drift, "drift cap exceeded");
                break;
            }
            if cand.contrast <= current_contrast {
                debug!(round, contrast = cand.contrast, "no contrast gain");
                break;
            }

            current = cand.rgb;
            current_contrast = cand.contrast;
            debug!(round, contrast = current_contrast, drift, "round complete");
        }
        current
    }

    fn relaxed(&self, original: Rgb, background: Rgb, target: ContrastTarget) -> Rgb {
        let first = self.recursive(
            original,
            background,
            target,
            self.config.recursive_rounds,
            self.config.max_drift,
        );
        if target.is_met(contrast_ratio(first, background)) {
            return first;
        }

        debug!("recursive failed, running relaxed fallbacks");
        let (deep, wide) = parallel::join(
            || {
                self.recursive(
                    original,
                    background,
                    target,
                    self.config.relaxed_rounds,
                    self.config.relaxed_max_drift,
                )
            },
            || {
                let budgets = self.config.wide_tolerances.as_slice().iter().copied();
                self.strict_pass(original, background, target, budgets)
                    .map(|c| c.rgb)
            },
        );

        let passes = |rgb: &Rgb| target.is_met(contrast_ratio(*rgb, background));
        match (Some(deep).filter(passes), wide.filter(passes)) {
            (Some(a), Some(b)) => {
                if delta_e_2000(original, a) <= delta_e_2000(original, b) {
                    a
                } else {
                    b
                }
            }
            (Some(only), None) | (None, Some(only)) => only,
            (None, None) => first,
        }
    }
}

/// Rounds to 2 decimal places.
#[inline]
pub(crate) fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
