//! Tune command

use crate::TuneArgs;
use anyhow::Result;
use legible_tune::{TuneConfig, tune_detailed_str};
use tracing::trace;

pub fn run(args: TuneArgs, config: &TuneConfig, verbose: u8) -> Result<()> {
    trace!(text = %args.text, background = %args.background, mode = %args.mode, "tune::run");

    let report = tune_detailed_str(
        &args.text,
        &args.background,
        args.large,
        args.mode,
        args.premium,
        config,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.tuned_text);
    if verbose > 0 {
        println!("  Original:  {} on {}", report.text, report.background);
        println!(
            "  Contrast:  {:.2}:1 -> {:.2}:1 ({:+.2}%)",
            report.original_contrast, report.contrast, report.improvement_percentage
        );
        println!("  Delta E:   {:.2}", report.delta_e);
    } else {
        println!("  Contrast:  {:.2}:1", report.contrast);
    }
    println!("  Level:     {}", report.wcag_level);
    println!("  {}", report.message);
    Ok(())
}
