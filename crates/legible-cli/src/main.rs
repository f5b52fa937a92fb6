//! legible - WCAG contrast checker and tuner
//!
//! Checks text/background pairs against WCAG and nudges the text color to
//! the closest accessible one.

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use legible_tune::Mode;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod commands;

#[derive(Parser)]
#[command(name = "legible")]
#[command(author, version, about = "WCAG contrast checker and tuner")]
#[command(long_about = "
Checks text/background color pairs against WCAG 2 contrast levels and finds
the closest accessible text color, keeping its hue.

Colors may be hex (#777, 777777), rgb()/rgba(), hsl()/hsla(), or CSS names.
Tuned colors are printed in the notation they were given in.

Examples:
  legible tune '#777' white                  # Closest AA color
  legible tune 'hsl(0, 0%, 47%)' white --premium
  legible tune grey black --mode relaxed --json
  legible check '#767676' white --large      # Contrast and level only
  legible delta-e '#777' '#767676'           # CIEDE2000 distance
  legible convert rebeccapurple              # Show in every notation
  legible batch pairs.txt                    # One 'text;background[;large]' per line
  legible -j 4 --config tune.yaml batch 'palettes/*.txt'
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// Tuning parameters (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Tune a text color until the pair is accessible
    #[command(visible_alias = "t")]
    Tune(TuneArgs),

    /// Report contrast and WCAG level without tuning
    #[command(visible_alias = "c")]
    Check(CheckArgs),

    /// CIEDE2000 distance between two colors
    #[command(name = "delta-e", visible_alias = "de")]
    DeltaE(DeltaEArgs),

    /// Show a color in every supported notation
    Convert(ConvertArgs),

    /// Tune every pair listed in one or more files
    #[command(visible_alias = "b")]
    Batch(BatchArgs),
}

#[derive(Args)]
struct TuneArgs {
    /// Text color
    text: String,

    /// Background color
    background: String,

    /// Use large-text thresholds
    #[arg(short, long)]
    large: bool,

    /// Strategy: strict (0), recursive (1), relaxed (2)
    #[arg(short, long, default_value = "recursive")]
    mode: Mode,

    /// Require AAA instead of AA
    #[arg(short, long)]
    premium: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct CheckArgs {
    /// Text color
    text: String,

    /// Background color
    background: String,

    /// Use large-text thresholds
    #[arg(short, long)]
    large: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct DeltaEArgs {
    /// First color
    a: String,

    /// Second color
    b: String,
}

#[derive(Args)]
struct ConvertArgs {
    /// Color to convert
    color: String,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct BatchArgs {
    /// Pair file(s): a path or glob pattern
    input: String,

    /// Strategy: strict (0), recursive (1), relaxed (2)
    #[arg(short, long, default_value = "recursive")]
    mode: Mode,

    /// Require AAA instead of AA
    #[arg(short, long)]
    premium: bool,

    /// Machine-readable output (JSON)
    #[arg(long)]
    json: bool,
}

/// Installs the tracing subscriber. `RUST_LOG` overrides `-v`.
///
/// The returned guard flushes the log file on drop, so it must live until
/// the process exits.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let stderr = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file: {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::registry()
                .with(filter)
                .with(stderr)
                .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(writer))
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(filter).with(stderr).init();
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "legible");
    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Tune(args) => commands::tune::run(args, &config, cli.verbose),
        Commands::Check(args) => commands::check::run(args),
        Commands::DeltaE(args) => commands::delta_e::run(args),
        Commands::Convert(args) => commands::convert::run(args, cli.verbose),
        Commands::Batch(args) => commands::batch::run(args, &config, cli.verbose),
    }
}
