//! Contrast check command

use crate::CheckArgs;
use anyhow::{Context, Result};
use legible_color::{WcagLevel, contrast_ratio, relative_luminance, wcag_level};
use legible_parse::ColorPair;

pub fn run(args: CheckArgs) -> Result<()> {
    let pair = ColorPair::parse(&args.text, &args.background).context("Invalid color pair")?;
    let (text, background) = pair.rgb();
    let ratio = contrast_ratio(text, background);
    let level = wcag_level(ratio, args.large);

    if args.json {
        let value = serde_json::json!({
            "text": text.to_hex(),
            "background": background.to_hex(),
            "large": args.large,
            "contrast": ratio,
            "wcag_level": level,
            "aa": ratio >= WcagLevel::AA.min_ratio(args.large),
            "aaa": ratio >= WcagLevel::AAA.min_ratio(args.large),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} on {}", text.to_hex(), background.to_hex());
    println!(
        "  Luminance: {:.4} / {:.4}",
        relative_luminance(text),
        relative_luminance(background)
    );
    println!("  Contrast:  {ratio:.2}:1");
    for lvl in [WcagLevel::AA, WcagLevel::AAA] {
        let need = lvl.min_ratio(args.large);
        println!(
            "  {:<4} {:>5.1}:1  {}",
            lvl.as_str(),
            need,
            super::pass_fail(ratio >= need)
        );
    }
    println!("  Level:     {level}");
    Ok(())
}
