//! Gradient descent on OKLCH (lightness, chroma).
//!
//! Cost of a point, with `contrast` and `dE` measured for the 8-bit color it
//! maps to:
//!
//! ```text
//! cost = 1000  * max(0, target - contrast)
//!      + 10000 * max(0, dE - budget)
//!      + 100   * dE
//! ```
//!
//! The gradient is a central difference on each parameter. Parameters are
//! clamped to L in [0, 1] and C in [0, max_chroma] both when stepping and
//! inside the cost. Points whose conversion falls back cost [`FALLBACK_COST`].

use super::{Candidate, CandidateSearch, SearchProblem};
use crate::config::GradientConfig;
use legible_color::{oklch_to_rgb_safe, rgb_to_oklch_safe};
use legible_core::Oklch;
use tracing::trace;

/// Cost assigned to points that do not convert cleanly.
pub const FALLBACK_COST: f64 = 1e6;

const CONTRAST_WEIGHT: f64 = 1000.0;
const OVER_BUDGET_WEIGHT: f64 = 10000.0;
const DISTANCE_WEIGHT: f64 = 100.0;

/// Joint lightness/chroma optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GradientDescent {
    config: GradientConfig,
}

impl GradientDescent {
    /// Creates an optimizer with the given settings.
    pub fn new(config: GradientConfig) -> Self {
        Self { config }
    }

    /// Penalty cost of `(l, c)` at fixed hue.
    pub fn cost(&self, problem: &SearchProblem, l: f64, c: f64, h: f64) -> f64 {
        let lch = Oklch::new(l.clamp(0.0, 1.0), c.clamp(0.0, self.config.max_chroma), h);
        let Some(rgb) = oklch_to_rgb_safe(lch).exact() else {
            return FALLBACK_COST;
        };
        let cand = problem.evaluate(rgb);
        CONTRAST_WEIGHT * (problem.target - cand.contrast).max(0.0)
            + OVER_BUDGET_WEIGHT * (cand.delta_e - problem.budget).max(0.0)
            + DISTANCE_WEIGHT * cand.delta_e
    }

    fn gradient(&self, problem: &SearchProblem, l: f64, c: f64, h: f64) -> (f64, f64) {
        let eps = self.config.epsilon;
        let gl = (self.cost(problem, l + eps, c, h) - self.cost(problem, l - eps, c, h)) / (2.0 * eps);
        let gc = (self.cost(problem, l, c + eps, h) - self.cost(problem, l, c - eps, h)) / (2.0 * eps);
        (gl, gc)
    }
}

impl CandidateSearch for GradientDescent {
    fn name(&self) -> &'static str {
        "gradient"
    }

    fn search(&self, problem: &SearchProblem) -> Option<Candidate> {
        let start = rgb_to_oklch_safe(problem.text).value();
        let h = start.h();
        let (mut l, mut c) = (start.l(), start.c());
        let mut iterations = 0;

        for iter in 0..self.config.iterations {
            iterations = iter + 1;
            let (gl, gc) = self.gradient(problem, l, c, h);
            let lr = self.config.learning_rate_at(iter);
            let next_l = (l - lr * gl).clamp(0.0, 1.0);
            let next_c = (c - lr * gc).clamp(0.0, self.config.max_chroma);

            let delta = (self.cost(problem, l, c, h) - self.cost(problem, next_l, next_c, h)).abs();
            if delta < self.config.convergence {
                break;
            }
            l = next_l;
            c = next_c;
        }

        let rgb = oklch_to_rgb_safe(Oklch::new(l, c, h)).exact()?;
        let cand = problem.evaluate(rgb);
        trace!(
            budget = problem.budget,
            iterations,
            l,
            c,
            contrast = cand.contrast,
            delta_e = cand.delta_e,
            "gradient descent"
        );
        (cand.delta_e <= problem.budget).then_some(cand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legible_core::Rgb;

    fn problem() -> SearchProblem {
        SearchProblem {
            text: Rgb::gray(119),
            background: Rgb::WHITE,
            target: 7.0,
            budget: 2.0,
        }
    }

    #[test]
    fn test_cost_of_anchor() {
        let p = problem();
        let gd = GradientDescent::default();
        let lch = rgb_to_oklch_safe(p.text).value();
        let cost = gd.cost(&p, lch.l(), lch.c(), lch.h());
        // dE = 0, so only the contrast shortfall counts
        let expected = CONTRAST_WEIGHT * (7.0 - p.original_contrast());
        assert!((cost - expected).abs() < 1e-6, "{cost} vs {expected}");
    }

    #[test]
    fn test_over_budget_dominates() {
        let p = problem();
        let gd = GradientDescent::default();
        let lch = rgb_to_oklch_safe(p.text).value();
        // Black is far outside a 2.0 budget from #777
        let far = gd.cost(&p, 0.0, 0.0, lch.h());
        let near = gd.cost(&p, lch.l(), lch.c(), lch.h());
        assert!(far > near);
    }

    #[test]
    fn test_result_within_budget() {
        let p = problem();
        if let Some(c) = GradientDescent::default().search(&p) {
            assert!(c.delta_e <= p.budget);
        }
    }

    #[test]
    fn test_converges_on_perfect_start() {
        // Already meets the target: zero gradient, anchor comes back
        let p = SearchProblem {
            text: Rgb::BLACK,
            background: Rgb::WHITE,
            target: 7.0,
            budget: 1.0,
        };
        let c = GradientDescent::default().search(&p).unwrap();
        assert_eq!(c.rgb, Rgb::BLACK);
        assert_eq!(c.delta_e, 0.0);
    }
}
