//! Error types for tuning.
//!
//! Tuning itself never fails: a pair that cannot be fixed is reported with
//! `success = false`. Errors come only from the edges:
//! - Config file loading and validation
//! - Color input that does not parse
//! - Unknown strategy modes

use std::path::PathBuf;
use thiserror::Error;

/// Result type for tuning operations.
pub type TuneResult<T> = Result<T, TuneError>;

/// Errors from configuration or input handling.
#[derive(Debug, Error)]
pub enum TuneError {
    /// I/O error reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Config file not found.
    #[error("config file not found: {path}")]
    ConfigNotFound {
        /// Path that was given.
        path: PathBuf,
    },

    /// Config parsed but holds unusable values.
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// What was wrong.
        reason: String,
    },

    /// Strategy mode not recognized.
    #[error("unknown mode '{value}' (expected strict, recursive, relaxed or 0-2)")]
    InvalidMode {
        /// Value as given.
        value: String,
    },

    /// Invalid color input.
    #[error(transparent)]
    Color(#[from] legible_core::Error),
}

impl TuneError {
    /// Creates an [`TuneError::InvalidConfig`] error.
    #[inline]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates an [`TuneError::InvalidMode`] error.
    #[inline]
    pub fn invalid_mode(value: impl ToString) -> Self {
        Self::InvalidMode {
            value: value.to_string(),
        }
    }
}
