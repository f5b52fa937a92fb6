//! Tuning parameters and their YAML loader.
//!
//! Every knob of the search has a default that reproduces the standard
//! behavior. A config file only needs the keys it wants to change:
//!
//! ```yaml
//! tolerances: [1.0, 2.0, 3.0]
//! recursive_rounds: 5
//! gradient:
//!   iterations: 80
//! ```
//!
//! # Loading
//!
//! ```rust,no_run
//! use legible_tune::TuneConfig;
//!
//! let config = TuneConfig::from_file("legible.yaml")?;
//! # Ok::<(), legible_tune::TuneError>(())
//! ```

use crate::error::{TuneError, TuneResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Perceptual-distance budgets tried by a strict pass, tightest first.
pub const STANDARD_TOLERANCES: [f64; 17] = [
    0.8, 1.0, 1.2, 1.4, 1.6, 1.8, 2.0, 2.1, 2.2, 2.3, 2.4, 2.5, 2.7, 3.0, 3.5, 4.0, 5.0,
];

/// Extra budgets appended for the relaxed wide pass.
const WIDE_EXTENSION: [f64; 6] = [6.0, 7.0, 8.0, 10.0, 12.0, 15.0];

// ============================================================================
// ToleranceSequence
// ============================================================================

/// Strictly ascending list of positive CIEDE2000 budgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct ToleranceSequence(Vec<f64>);

impl ToleranceSequence {
    /// Validates and wraps a list of budgets.
    ///
    /// # Errors
    ///
    /// [`TuneError::InvalidConfig`] if the list is empty, holds a non-finite
    /// or non-positive value, or is not strictly ascending.
    pub fn new(values: Vec<f64>) -> TuneResult<Self> {
        if values.is_empty() {
            return Err(TuneError::invalid_config("tolerance sequence is empty"));
        }
        if let Some(v) = values.iter().find(|v| !v.is_finite() || **v <= 0.0) {
            return Err(TuneError::invalid_config(format!(
                "tolerance {v} must be finite and positive"
            )));
        }
        if let Some(w) = values.windows(2).find(|w| w[1] <= w[0]) {
            return Err(TuneError::invalid_config(format!(
                "tolerances must be strictly ascending ({} then {})",
                w[0], w[1]
            )));
        }
        Ok(Self(values))
    }

    /// The default 17-step sequence, 0.8 to 5.0.
    pub fn standard() -> Self {
        Self(STANDARD_TOLERANCES.to_vec())
    }

    /// The standard sequence extended up to 15.0.
    pub fn wide() -> Self {
        Self(
            STANDARD_TOLERANCES
                .iter()
                .chain(WIDE_EXTENSION.iter())
                .copied()
                .collect(),
        )
    }

    /// Budgets as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Number of budgets.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false` for a validated sequence.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Largest budget.
    #[inline]
    pub fn max(&self) -> f64 {
        self.0.last().copied().unwrap_or(0.0)
    }

    /// Budgets not exceeding `limit`, ascending.
    pub fn up_to(&self, limit: f64) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied().take_while(move |&b| b <= limit)
    }
}

impl Default for ToleranceSequence {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<f64>> for ToleranceSequence {
    type Error = TuneError;

    fn try_from(values: Vec<f64>) -> TuneResult<Self> {
        Self::new(values)
    }
}

impl From<ToleranceSequence> for Vec<f64> {
    fn from(seq: ToleranceSequence) -> Self {
        seq.0
    }
}

// ============================================================================
// Search parameters
// ============================================================================

/// Lightness bisection settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinaryConfig {
    /// Bisection steps (20 gives about 1e-6 resolution on [0, 1]).
    pub iterations: usize,
}

impl Default for BinaryConfig {
    fn default() -> Self {
        Self { iterations: 20 }
    }
}

/// Gradient descent settings over (lightness, chroma).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GradientConfig {
    /// Maximum steps.
    pub iterations: usize,
    /// Initial learning rate.
    pub learning_rate: f64,
    /// Multiplier applied every `decay_every` steps.
    pub decay: f64,
    /// Steps between decays.
    pub decay_every: usize,
    /// Central-difference step.
    pub epsilon: f64,
    /// Stop when successive costs differ by less than this.
    pub convergence: f64,
    /// Upper chroma bound.
    pub max_chroma: f64,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            learning_rate: 0.02,
            decay: 0.95,
            decay_every: 10,
            epsilon: 1e-4,
            convergence: 1e-6,
            max_chroma: 0.5,
        }
    }
}

impl GradientConfig {
    /// Learning rate at step `iter`.
    #[inline]
    pub fn learning_rate_at(&self, iter: usize) -> f64 {
        let steps = (iter / self.decay_every.max(1)) as i32;
        self.learning_rate * self.decay.powi(steps)
    }
}

// ============================================================================
// TuneConfig
// ============================================================================

/// All tuning parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuneConfig {
    /// Budgets for strict passes and recursive rounds.
    pub tolerances: ToleranceSequence,
    /// Budgets for the relaxed wide strict pass.
    pub wide_tolerances: ToleranceSequence,
    /// A strict pass stops once the minimum is met at a budget at or below this.
    pub early_exit_budget: f64,
    /// Round cap for recursive mode.
    pub recursive_rounds: usize,
    /// Round cap for the relaxed recursive fallback.
    pub relaxed_rounds: usize,
    /// Cumulative CIEDE2000 cap from the original color in recursive mode.
    pub max_drift: f64,
    /// Drift cap for the relaxed recursive fallback.
    pub relaxed_max_drift: f64,
    /// Lightness bisection.
    pub binary: BinaryConfig,
    /// Gradient descent.
    pub gradient: GradientConfig,
}

impl Default for TuneConfig {
    fn default() -> Self {
        Self {
            tolerances: ToleranceSequence::standard(),
            wide_tolerances: ToleranceSequence::wide(),
            early_exit_budget: 2.5,
            recursive_rounds: 10,
            relaxed_rounds: 15,
            max_drift: 15.0,
            relaxed_max_drift: 25.0,
            binary: BinaryConfig::default(),
            gradient: GradientConfig::default(),
        }
    }
}

impl TuneConfig {
    /// Loads configuration from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> TuneResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TuneError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads configuration from a YAML string. Empty input gives the defaults.
    pub fn from_yaml_str(yaml: &str) -> TuneResult<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> TuneResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> TuneResult<()> {
        fn positive(name: &str, v: f64) -> TuneResult<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(TuneError::invalid_config(format!("{name} must be positive, got {v}")))
            }
        }
        fn at_least_one(name: &str, v: usize) -> TuneResult<()> {
            if v >= 1 {
                Ok(())
            } else {
                Err(TuneError::invalid_config(format!("{name} must be at least 1")))
            }
        }

        at_least_one("recursive_rounds", self.recursive_rounds)?;
        at_least_one("relaxed_rounds", self.relaxed_rounds)?;
        at_least_one("binary.iterations", self.binary.iterations)?;
        at_least_one("gradient.iterations", self.gradient.iterations)?;
        at_least_one("gradient.decay_every", self.gradient.decay_every)?;
        positive("early_exit_budget", self.early_exit_budget)?;
        positive("max_drift", self.max_drift)?;
        positive("relaxed_max_drift", self.relaxed_max_drift)?;
        positive("gradient.learning_rate", self.gradient.learning_rate)?;
        positive("gradient.epsilon", self.gradient.epsilon)?;
        positive("gradient.max_chroma", self.gradient.max_chroma)?;

        if !(self.gradient.decay > 0.0 && self.gradient.decay <= 1.0) {
            return Err(TuneError::invalid_config(format!(
                "gradient.decay must be in (0, 1], got {}",
                self.gradient.decay
            )));
        }
        if !(self.gradient.convergence.is_finite() && self.gradient.convergence >= 0.0) {
            return Err(TuneError::invalid_config("gradient.convergence must be >= 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = TuneConfig::default();
        assert_eq!(config.tolerances.len(), 17);
        assert_eq!(config.tolerances.as_slice()[0], 0.8);
        assert_eq!(config.tolerances.max(), 5.0);
        assert_eq!(config.wide_tolerances.len(), 23);
        assert_eq!(config.wide_tolerances.max(), 15.0);
        assert_eq!(config.binary.iterations, 20);
        assert_eq!(config.gradient.iterations, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml() {
        let yaml = "recursive_rounds: 4\ngradient:\n  iterations: 80\n";
        let config = TuneConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.recursive_rounds, 4);
        assert_eq!(config.gradient.iterations, 80);
        assert_eq!(config.gradient.learning_rate, 0.02);
        assert_eq!(config.tolerances, ToleranceSequence::standard());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(TuneConfig::from_yaml_str("").unwrap(), TuneConfig::default());
    }

    #[test]
    fn test_tolerances_must_ascend() {
        let err = TuneConfig::from_yaml_str("tolerances: [1.0, 3.0, 2.0]").unwrap_err();
        assert!(err.to_string().contains("ascending"), "{err}");
        assert!(TuneConfig::from_yaml_str("tolerances: []").is_err());
        assert!(TuneConfig::from_yaml_str("tolerances: [0.0, 1.0]").is_err());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = TuneConfig::from_yaml_str("max_drfit: 3.0").unwrap_err();
        assert!(matches!(err, TuneError::Yaml(_)));
    }

    #[test]
    fn test_invalid_values() {
        let err = TuneConfig::from_yaml_str("recursive_rounds: 0").unwrap_err();
        assert!(matches!(err, TuneError::InvalidConfig { .. }));
        assert!(TuneConfig::from_yaml_str("gradient:\n  decay: 1.5").is_err());
        assert!(TuneConfig::from_yaml_str("max_drift: -1").is_err());
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = TuneConfig::default();
        let yaml = config.to_yaml_string().unwrap();
        assert_eq!(TuneConfig::from_yaml_str(&yaml).unwrap(), config);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_drift: 12.5").unwrap();
        let config = TuneConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_drift, 12.5);

        let err = TuneConfig::from_file("/nonexistent/legible.yaml").unwrap_err();
        assert!(matches!(err, TuneError::ConfigNotFound { .. }));
    }

    #[test]
    fn test_up_to() {
        let seq = ToleranceSequence::standard();
        let capped: Vec<f64> = seq.up_to(1.4).collect();
        assert_eq!(capped, vec![0.8, 1.0, 1.2, 1.4]);
        assert_eq!(seq.up_to(0.5).count(), 0);
    }

    #[test]
    fn test_learning_rate_decay() {
        let g = GradientConfig::default();
        assert_abs_diff_eq!(g.learning_rate_at(0), 0.02);
        assert_abs_diff_eq!(g.learning_rate_at(9), 0.02);
        assert_abs_diff_eq!(g.learning_rate_at(10), 0.019, epsilon = 1e-15);
        assert_abs_diff_eq!(g.learning_rate_at(25), 0.02 * 0.95 * 0.95, epsilon = 1e-15);
    }
}
