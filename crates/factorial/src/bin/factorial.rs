//! CLI for generating a two-level full-factorial design and estimating
//! main effects on a simulated response.
//!
//! # Usage
//!
//! ```bash
//! # Prompt for the number of factors on stdin
//! cargo run --bin factorial
//!
//! # Three factors, fixed seed
//! cargo run --bin factorial -- --factors 3 --seed 42
//!
//! # JSON report with a 1000-replicate bias check
//! cargo run --bin factorial -- -n 4 --replicates 1000 --format json --pretty
//! ```

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use factorial::input::read_factors;
use factorial::output::{
    format_report, format_report_full, format_shapes, is_verbose, to_json, to_json_pretty,
};
use factorial::{parse_seed, Config, Experiment};
use factorial_core::constants::{DEFAULT_MAX_FACTORS, DEFAULT_NOISE_SD, DEFAULT_SHIFT};

/// Two-level full-factorial design with simulated response and main effects
#[derive(Parser, Debug)]
#[command(name = "factorial")]
#[command(about = "Build a 2^n full-factorial design, simulate a response and estimate main effects")]
#[command(version)]
struct Args {
    /// Number of factors (prompted on stdin when omitted)
    #[arg(short = 'n', long)]
    factors: Option<usize>,

    /// Seed for the response RNG, decimal or 0x-prefixed hex
    /// (falls back to FACTORIAL_SEED, then OS entropy)
    #[arg(short, long, value_parser = parse_seed_arg)]
    seed: Option<u64>,

    /// Constant added to the coded design before squaring
    #[arg(long, default_value_t = DEFAULT_SHIFT, allow_negative_numbers = true)]
    shift: f64,

    /// Standard deviation of the per-run Gaussian noise
    #[arg(long, default_value_t = DEFAULT_NOISE_SD)]
    noise_sd: f64,

    /// Refuse designs with more factors than this (bounds memory use)
    #[arg(long, default_value_t = DEFAULT_MAX_FACTORS)]
    max_factors: usize,

    /// Average effects over this many extra simulations and report the bias
    #[arg(long)]
    replicates: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print every row of large arrays instead of summarising
    #[arg(long)]
    full: bool,

    /// Show debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn parse_seed_arg(raw: &str) -> Result<u64, String> {
    parse_seed(raw).ok_or_else(|| format!("'{}' is not a valid u64 seed", raw))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> anyhow::Result<()> {
    let factors = match args.factors {
        Some(n) => n,
        None => read_factors(&mut io::stdin().lock(), &mut io::stderr())?,
    };

    let config = Config {
        max_factors: args.max_factors,
        shift: args.shift,
        noise_sd: args.noise_sd,
        seed: args.seed,
        replicates: args.replicates,
    };
    tracing::debug!(?config, factors, "Starting experiment");

    let report = Experiment::with_config(config)
        .run(factors)
        .with_context(|| format!("experiment with {} factors failed", factors))?;
    tracing::debug!("{}", format_shapes(&report));

    let rendered = match args.format {
        Format::Json if args.pretty => to_json_pretty(&report)?,
        Format::Json => to_json(&report)?,
        Format::Text if args.full => format_report_full(&report),
        Format::Text => format_report(&report),
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose || is_verbose());

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
