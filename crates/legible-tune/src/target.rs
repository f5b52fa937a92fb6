//! Strategy modes and contrast targets.

use crate::error::{TuneError, TuneResult};
use legible_color::WcagLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Strategy used when a pair needs tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One pass over the tolerance sequence.
    Strict = 0,
    /// Bounded rounds, each re-anchored on the previous output.
    #[default]
    Recursive = 1,
    /// Recursive, then wider fallbacks if that fails.
    Relaxed = 2,
}

impl Mode {
    /// All modes in numeric order.
    pub const ALL: [Mode; 3] = [Mode::Strict, Mode::Recursive, Mode::Relaxed];

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Recursive => "recursive",
            Self::Relaxed => "relaxed",
        }
    }
}

impl TryFrom<u8> for Mode {
    type Error = TuneError;

    fn try_from(value: u8) -> TuneResult<Self> {
        match value {
            0 => Ok(Self::Strict),
            1 => Ok(Self::Recursive),
            2 => Ok(Self::Relaxed),
            other => Err(TuneError::invalid_mode(other)),
        }
    }
}

impl FromStr for Mode {
    type Err = TuneError;

    /// Accepts a name (any case) or a number 0-2.
    fn from_str(s: &str) -> TuneResult<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::try_from(n);
        }
        Self::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| TuneError::invalid_mode(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Contrast ratios a tuning call aims for.
///
/// | premium | target | minimum |
/// |---------|--------|---------|
/// | no | AAA | AA |
/// | yes | AAA | AAA |
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastTarget {
    /// Ratio the search tries to reach.
    pub target: f64,
    /// Ratio that counts as success.
    pub minimum: f64,
}

impl ContrastTarget {
    /// Derives the target for text size and tier.
    pub fn new(large: bool, premium: bool) -> Self {
        let target = WcagLevel::AAA.min_ratio(large);
        let minimum = if premium {
            target
        } else {
            WcagLevel::AA.min_ratio(large)
        };
        Self { target, minimum }
    }

    /// Returns `true` if `contrast` counts as success.
    #[inline]
    pub fn is_met(&self, contrast: f64) -> bool {
        contrast >= self.minimum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_numbers() {
        assert_eq!(Mode::try_from(0).unwrap(), Mode::Strict);
        assert_eq!(Mode::try_from(1).unwrap(), Mode::Recursive);
        assert_eq!(Mode::try_from(2).unwrap(), Mode::Relaxed);
        assert!(matches!(Mode::try_from(3), Err(TuneError::InvalidMode { .. })));
        assert_eq!(Mode::default(), Mode::Recursive);
    }

    #[test]
    fn test_mode_from_str() {
        assert_eq!("Relaxed".parse::<Mode>().unwrap(), Mode::Relaxed);
        assert_eq!(" 0 ".parse::<Mode>().unwrap(), Mode::Strict);
        let err = "fast".parse::<Mode>().unwrap_err();
        assert!(err.to_string().contains("fast"));
    }

    #[test]
    fn test_targets() {
        let t = ContrastTarget::new(false, false);
        assert_eq!((t.target, t.minimum), (7.0, 4.5));
        let t = ContrastTarget::new(true, false);
        assert_eq!((t.target, t.minimum), (4.5, 3.0));
        let t = ContrastTarget::new(false, true);
        assert_eq!((t.target, t.minimum), (7.0, 7.0));
        let t = ContrastTarget::new(true, true);
        assert_eq!((t.target, t.minimum), (4.5, 4.5));
        assert!(t.is_met(4.5));
        assert!(!t.is_met(4.49));
    }
}
