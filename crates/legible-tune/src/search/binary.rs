//! Bisection on OKLCH lightness.
//!
//! Direction follows the background: text gets lighter on a dark background
//! (OKLCH L < 0.5) and darker otherwise. The interval runs from the text's
//! own lightness to the extreme in that direction.
//!
//! At each midpoint:
//! - over budget: move back toward the original
//! - meets the target: remember it if closest so far, then move back toward
//!   the original to find a closer one
//! - short of the target: remember it if it is the best contrast so far
//!   (and beats the original), then move further out
//!
//! The closest passing candidate wins. Without one, the best partial
//! improvement is returned.

use super::{Candidate, CandidateSearch, SearchProblem};
use crate::config::BinaryConfig;
use legible_color::{oklch_to_rgb_safe, rgb_to_oklch_safe};
use tracing::trace;

/// Lightness bisection.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BinarySearch {
    config: BinaryConfig,
}

impl BinarySearch {
    /// Creates a search with the given settings.
    pub fn new(config: BinaryConfig) -> Self {
        Self { config }
    }
}

impl CandidateSearch for BinarySearch {
    fn name(&self) -> &'static str {
        "binary"
    }

    fn search(&self, problem: &SearchProblem) -> Option<Candidate> {
        let text = rgb_to_oklch_safe(problem.text).value();
        let bg_l = rgb_to_oklch_safe(problem.background).value().l();
        let search_up = bg_l < 0.5;
        let original_contrast = problem.original_contrast();

        let (mut lo, mut hi) = if search_up {
            (text.l(), 1.0)
        } else {
            (0.0, text.l())
        };

        // Named by where they move the interval
        let toward_original = |lo: &mut f64, hi: &mut f64, mid: f64| {
            if search_up {
                *hi = mid;
            } else {
                *lo = mid;
            }
        };
        let away_from_original = |lo: &mut f64, hi: &mut f64, mid: f64| {
            if search_up {
                *lo = mid;
            } else {
                *hi = mid;
            }
        };

        let mut best_passing: Option<Candidate> = None;
        let mut best_partial: Option<Candidate> = None;

        for _ in 0..self.config.iterations {
            let mid = (lo + hi) / 2.0;
            let rgb = oklch_to_rgb_safe(text.with_lightness(mid)).value();
            let cand = problem.evaluate(rgb);

            if cand.delta_e > problem.budget {
                toward_original(&mut lo, &mut hi, mid);
            } else if cand.contrast >= problem.target {
                if best_passing.is_none_or(|b| cand.delta_e < b.delta_e) {
                    best_passing = Some(cand);
                }
                toward_original(&mut lo, &mut hi, mid);
            } else {
                if cand.contrast > original_contrast
                    && best_partial.is_none_or(|b| cand.contrast > b.contrast)
                {
                    best_partial = Some(cand);
                }
                away_from_original(&mut lo, &mut hi, mid);
            }
        }

        let result = best_passing.or(best_partial);
        trace!(
            budget = problem.budget,
            search_up,
            found = result.is_some(),
            contrast = result.map(|c| c.contrast),
            "binary search"
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legible_core::Rgb;

    fn problem(text: Rgb, background: Rgb, budget: f64) -> SearchProblem {
        SearchProblem {
            text,
            background,
            target: 4.5,
            budget,
        }
    }

    #[test]
    fn test_darkens_on_light_background() {
        let p = problem(Rgb::gray(119), Rgb::WHITE, 2.0);
        let c = BinarySearch::default().search(&p).unwrap();
        assert!(c.contrast >= 4.5, "{c:?}");
        assert!(c.delta_e <= 2.0);
        assert!(c.rgb.r < 119);
    }

    #[test]
    fn test_lightens_on_dark_background() {
        let p = problem(Rgb::gray(100), Rgb::BLACK, 5.0);
        let c = BinarySearch::default().search(&p).unwrap();
        assert!(c.rgb.r > 100);
        assert!(c.contrast > p.original_contrast());
    }

    #[test]
    fn test_budget_is_hard() {
        let p = problem(Rgb::gray(200), Rgb::WHITE, 1.0);
        if let Some(c) = BinarySearch::default().search(&p) {
            assert!(c.delta_e <= 1.0);
            assert!(c.contrast < 4.5);
        }
    }

    #[test]
    fn test_no_improvement_possible() {
        // Text is already black on white; nothing darker exists
        let p = SearchProblem {
            text: Rgb::BLACK,
            background: Rgb::WHITE,
            target: 30.0,
            budget: 5.0,
        };
        assert!(BinarySearch::default().search(&p).is_none());
    }
}
