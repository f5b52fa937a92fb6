//! CIEDE2000 distance command

use crate::DeltaEArgs;
use anyhow::Result;
use legible_color::delta_e_2000;

pub fn run(args: DeltaEArgs) -> Result<()> {
    let (_, a) = super::parse_color(&args.a)?;
    let (_, b) = super::parse_color(&args.b)?;
    println!("{:.4}", delta_e_2000(a, b));
    Ok(())
}
