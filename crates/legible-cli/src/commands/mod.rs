//! CLI command implementations

pub mod batch;
pub mod check;
pub mod convert;
pub mod delta_e;
pub mod tune;

use anyhow::{Context, Result};
use legible_core::Rgb;
use legible_parse::ColorInput;
use legible_tune::TuneConfig;
use std::path::Path;
use tracing::debug;

/// Loads tuning parameters, or the defaults without a path.
pub fn load_config(path: Option<&Path>) -> Result<TuneConfig> {
    match path {
        Some(path) => {
            let config = TuneConfig::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?;
            debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(TuneConfig::default()),
    }
}

/// Parses one color, composited over white if translucent.
pub fn parse_color(input: &str) -> Result<(ColorInput, Rgb)> {
    let color = ColorInput::parse(input).with_context(|| format!("Invalid color: {input}"))?;
    Ok((color, color.to_rgb(Rgb::WHITE)))
}

/// `PASS` / `FAIL` marker.
pub fn pass_fail(ok: bool) -> &'static str {
    if ok { "PASS" } else { "FAIL" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config_default() {
        assert_eq!(load_config(None).unwrap(), TuneConfig::default());
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tune.yaml");
        std::fs::write(&path, "recursive_rounds: 3\n").unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().recursive_rounds, 3);

        let err = load_config(Some(&dir.path().join("missing.yaml"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load config"));
    }

    #[test]
    fn test_parse_color_composites() {
        let (input, rgb) = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
        assert!(input.is_translucent());
        assert_eq!(rgb, Rgb::gray(128));
        assert!(parse_color("nope").is_err());
    }
}
