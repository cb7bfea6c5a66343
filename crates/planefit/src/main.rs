use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use planefit::prelude::*;

const DEFAULT_DATA_FILE: &str = "fund_data.csv";

/// Fit the plane z = a*x + b*y + c to a CSV of x,y,z rows and report slopes and R².
#[derive(Debug, Parser)]
#[command(name = "planefit", version, about)]
struct Cli {
    /// Data file with one x,y,z row per line (an optional header row is skipped)
    #[arg(short, long, default_value = DEFAULT_DATA_FILE)]
    file: PathBuf,

    /// Decimal places in the report
    #[arg(short, long, default_value_t = 4)]
    precision: usize,

    /// Also print the fitted value for every sample
    #[arg(long)]
    predictions: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    info!("reading samples from {}", cli.file.display());
    let samples = read_samples_from_path(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;
    debug!("loaded {} samples", samples.len());

    let result = fit(&samples).context("plane fit failed")?;

    match report(&cli, &samples, &result) {
        // Reader went away, e.g. `planefit --predictions | head -1`
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("stdout closed early");
            Ok(())
        }
        other => other.context("failed to write report"),
    }
}

fn report(cli: &Cli, samples: &[Sample<f64>], result: &FitResult<f64>) -> io::Result<()> {
    let mut out = io::stdout().lock();
    let p = cli.precision;

    writeln!(out, "Slope (x): {:.*}", p, result.a)?;
    writeln!(out, "Slope (y): {:.*}", p, result.b)?;
    writeln!(out, "Intercept: {:.*}", p, result.c)?;
    writeln!(out, "R²: {:.*}", p, result.r_squared)?;

    if cli.predictions {
        for s in samples {
            writeln!(
                out,
                "Prediction for ({:.*}, {:.*}): {:.*}",
                p,
                s.x,
                p,
                s.y,
                p,
                result.predict(s.x, s.y)
            )?;
        }
    }

    out.flush()
}
