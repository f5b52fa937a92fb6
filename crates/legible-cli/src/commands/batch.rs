//! Batch tuning command
//!
//! Input files hold one pair per line:
//!
//! ```text
//! # text; background; large (optional)
//! #777; white
//! rgb(200, 200, 200); #fff; large
//! ```

use crate::BatchArgs;
use anyhow::{Context, Result, bail};
use legible_parse::ColorPair;
use legible_tune::{StrategyResult, TuneConfig, tune_batch};
use std::path::{Path, PathBuf};
use tracing::{info, trace};

/// One parsed line.
#[derive(Debug, Clone, PartialEq)]
struct Entry {
    source: String,
    text: String,
    background: String,
    large: bool,
    pair: ColorPair,
}

pub fn run(args: BatchArgs, config: &TuneConfig, verbose: u8) -> Result<()> {
    trace!(pattern = %args.input, mode = %args.mode, "batch::run");

    let files = find_files(&args.input)?;
    info!(files = files.len(), pattern = %args.input, "Starting batch tuning");
    if verbose > 0 {
        println!("Found {} files matching '{}'", files.len(), args.input);
    }

    let mut entries = Vec::new();
    let mut failed = 0;
    for file in &files {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read: {}", file.display()))?;
        for (idx, line) in content.lines().enumerate() {
            let source = format!("{}:{}", file.display(), idx + 1);
            match parse_line(line) {
                Ok(None) => {}
                Ok(Some((text, background, large))) => match ColorPair::parse(text, background) {
                    Ok(pair) => entries.push(Entry {
                        source,
                        text: text.to_string(),
                        background: background.to_string(),
                        large,
                        pair,
                    }),
                    Err(e) => {
                        failed += 1;
                        eprintln!("Error: {source}: {e}");
                    }
                },
                Err(e) => {
                    failed += 1;
                    eprintln!("Error: {source}: {e}");
                }
            }
        }
    }

    let pairs: Vec<_> = entries
        .iter()
        .map(|e| (e.pair.text_rgb, e.pair.background_rgb, e.large))
        .collect();
    let results = tune_batch(&pairs, args.mode, args.premium, config);
    let tuned: Vec<String> = entries
        .iter()
        .zip(&results)
        .map(|(e, r)| tuned_text(e, r))
        .collect();

    let passed = results.iter().filter(|r| r.success).count();
    info!(pairs = results.len(), passed, failed, "Batch tuning complete");

    if args.json {
        let rows: Vec<_> = entries
            .iter()
            .zip(&results)
            .zip(&tuned)
            .map(|((e, r), t)| {
                serde_json::json!({
                    "source": e.source,
                    "text": e.text,
                    "background": e.background,
                    "large": e.large,
                    "tuned": t,
                    "success": r.success,
                    "contrast": r.contrast,
                    "original_contrast": r.original_contrast,
                    "delta_e": r.delta_e,
                    "wcag_level": r.level,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for ((e, r), t) in entries.iter().zip(&results).zip(&tuned) {
            println!(
                "{:<24} {:<20} -> {:<24} {:>6.2}:1  {:<4} {}",
                e.text,
                e.background,
                t,
                r.contrast,
                r.level,
                super::pass_fail(r.success)
            );
            if verbose > 1 {
                println!("    {}  dE {:.2}", e.source, r.delta_e);
            }
        }
        println!(
            "Tuned: {} pairs, {} accessible, {} invalid",
            results.len(),
            passed,
            failed
        );
    }

    if failed > 0 {
        bail!("{} lines failed to parse", failed);
    }
    Ok(())
}

/// Tuned color in the entry's notation; an accessible pair keeps its text.
fn tuned_text(entry: &Entry, result: &StrategyResult) -> String {
    if result.unchanged {
        entry.text.clone()
    } else {
        entry.pair.text.family().format(result.tuned)
    }
}

/// Expands a path or glob pattern to existing files.
fn find_files(pattern: &str) -> Result<Vec<PathBuf>> {
    let path = Path::new(pattern);
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let files: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("Invalid pattern: {pattern}"))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        bail!("No files match pattern: {}", pattern);
    }
    Ok(files)
}

/// Splits `text;background[;large]`. Blank lines and `#` comments give `None`.
fn parse_line(line: &str) -> Result<Option<(&str, &str, bool)>> {
    let line = line.trim();
    let comment = line.starts_with('#') && !starts_with_hex_color(line);
    if line.is_empty() || comment {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split(';').map(str::trim).collect();
    let large = match fields.get(2) {
        None => false,
        Some(flag) => parse_flag(flag)?,
    };
    match fields.as_slice() {
        [text, background] | [text, background, _] if !text.is_empty() && !background.is_empty() => {
            Ok(Some((*text, *background, large)))
        }
        _ => bail!("expected 'text;background[;large]', got '{line}'"),
    }
}

/// `#rgb` or `#rrggbb` ending at `;`, whitespace or end of line.
fn starts_with_hex_color(line: &str) -> bool {
    let Some(rest) = line.strip_prefix('#') else {
        return false;
    };
    let digits = rest.chars().take_while(char::is_ascii_hexdigit).count();
    let end = rest[digits..].chars().next();
    matches!(digits, 3 | 6) && end.is_none_or(|c| c == ';' || c.is_whitespace())
}

fn parse_flag(flag: &str) -> Result<bool> {
    match flag.to_ascii_lowercase().as_str() {
        "" | "0" | "false" | "no" | "normal" => Ok(false),
        "1" | "true" | "yes" | "large" => Ok(true),
        other => bail!("invalid large-text flag '{other}'"),
    }
}
