//! Error types for checked color conversions.
//!
//! Only the checked conversion functions return these. The `_safe`
//! variants absorb them into [`Converted::Fallback`](crate::Converted).

use thiserror::Error;

/// Color conversion error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A conversion stage produced NaN or infinity.
    #[error("non-finite result in {stage}")]
    NonFinite {
        /// Stage that produced the value.
        stage: &'static str,
    },

    /// Input is outside the domain of the conversion.
    #[error(transparent)]
    Input(#[from] legible_core::Error),
}

impl ColorError {
    /// Creates a [`ColorError::NonFinite`] error.
    #[inline]
    pub fn non_finite(stage: &'static str) -> Self {
        Self::NonFinite { stage }
    }
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
