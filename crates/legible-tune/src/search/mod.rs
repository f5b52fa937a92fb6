//! Candidate search in OKLCH.
//!
//! Both searches move the *text* color only, keep its hue fixed, and treat
//! the CIEDE2000 budget as a hard constraint.
//!
//! ```text
//!   SearchProblem { text, background, target, budget }
//!          |
//!          +--> BinarySearch     lightness only, fixed bisection
//!          |
//!          +--> GradientDescent  lightness + chroma, penalty cost
//!          |
//!          v
//!   Option<Candidate>   None = nothing in budget improved on the input
//! ```
//!
//! "No candidate" is an ordinary result, not an error.

mod binary;
mod gradient;

pub use binary::BinarySearch;
pub use gradient::GradientDescent;

use legible_color::{contrast_ratio, delta_e_2000};
use legible_core::Rgb;

/// A color produced by a search, with its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// The candidate text color.
    pub rgb: Rgb,
    /// Contrast against the background.
    pub contrast: f64,
    /// CIEDE2000 distance from the search's anchor color.
    pub delta_e: f64,
}

/// One search request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchProblem {
    /// Anchor text color. Distances are measured from here.
    pub text: Rgb,
    /// Fixed background.
    pub background: Rgb,
    /// Contrast to aim for.
    pub target: f64,
    /// Maximum CIEDE2000 distance from `text`.
    pub budget: f64,
}

impl SearchProblem {
    /// Scores `rgb` against this problem.
    #[inline]
    pub fn evaluate(&self, rgb: Rgb) -> Candidate {
        Candidate {
            rgb,
            contrast: contrast_ratio(rgb, self.background),
            delta_e: delta_e_2000(self.text, rgb),
        }
    }

    /// Contrast of the unmodified anchor.
    #[inline]
    pub fn original_contrast(&self) -> f64 {
        contrast_ratio(self.text, self.background)
    }

    /// Same problem with a different budget.
    #[inline]
    pub fn with_budget(self, budget: f64) -> Self {
        Self { budget, ..self }
    }
}

/// A search procedure over the text color.
pub trait CandidateSearch: Send + Sync {
    /// Short name for diagnostics.
    fn name(&self) -> &'static str;

    /// Runs the search. Any returned candidate is within `problem.budget`.
    fn search(&self, problem: &SearchProblem) -> Option<Candidate>;
}
