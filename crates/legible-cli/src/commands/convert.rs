//! Color notation command

use crate::ConvertArgs;
use anyhow::Result;
use legible_color::{oklch_distance, oklch_to_rgb, relative_luminance, rgb_to_lab, rgb_to_oklch};
use legible_parse::{ColorFamily, ColorInput};

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    let (input, rgb) = super::parse_color(&args.color)?;
    let lch = rgb_to_oklch(rgb)?;
    let lab = rgb_to_lab(rgb);

    // OKLab distance of the 8-bit round trip, a measure of quantization error
    let round_trip = rgb_to_oklch(oklch_to_rgb(lch)?)?;
    let quantization = oklch_distance(lch, round_trip);

    if args.json {
        let value = serde_json::json!({
            "input": args.color.trim(),
            "kind": input.kind(),
            "hex": ColorFamily::Hex.format(rgb),
            "rgb": rgb.to_array(),
            "hsl": ColorFamily::Hsl.format(rgb),
            "oklch": [lch.l(), lch.c(), lch.h()],
            "lab": [lab.l, lab.a, lab.b],
            "luminance": relative_luminance(rgb),
            "round_trip_error": quantization,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if let ColorInput::Named(name, _) = input {
        println!("Name:      {name}");
    }
    if input.is_translucent() {
        println!("Alpha:     {:.3} (composited over white)", input.alpha());
    }
    println!("Hex:       {}", ColorFamily::Hex.format(rgb));
    println!("RGB:       {}", ColorFamily::Rgb.format(rgb));
    println!("HSL:       {}", ColorFamily::Hsl.format(rgb));
    println!("OKLCH:     {:.4} {:.4} {:.2}", lch.l(), lch.c(), lch.h());
    println!("CIELAB:    {:.2} {:.2} {:.2}", lab.l, lab.a, lab.b);
    println!("Luminance: {:.4}", relative_luminance(rgb));
    if verbose > 0 {
        println!("Round trip: {quantization:.2e}");
    }
    Ok(())
}
