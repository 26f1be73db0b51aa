//! stepplot - renders potential-step simulation output as line charts.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stepplot::dispatch::{Dispatcher, Regime};
use stepplot::plot::SvgPlotter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const MOD_NAME: &str = "stepplot";

#[derive(Parser, Debug)]
#[command(name = "stepplot")]
#[command(about = "Plots potential-step wavefunction and probability data", long_about = None)]
struct Args {
    /// Directory holding the solver output (defaults to the working directory)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Also plot transmission/reflection probabilities
    #[arg(long)]
    ratio: bool,

    /// Energy regime shown in the wavefunction title
    #[arg(long, value_enum, default_value_t = Regime::Above)]
    regime: Regime,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("failed to open log file {}", log_path.display()))?;
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting stepplot");
    }

    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to read working directory")?,
    };
    println!("{}", dir.display());

    let mut dispatcher = Dispatcher::new(dir, SvgPlotter::default()).with_regime(args.regime);

    report("render_wavefunction_plot", dispatcher.render_wavefunction_plot());
    if args.ratio {
        report("render_ratio_plot", dispatcher.render_ratio_plot());
    }

    if args.log.is_some() {
        tracing::info!("stepplot exited");
    }

    Ok(())
}

/// Log a failed operation and carry on.
fn report<T>(operation: &str, result: stepplot::Result<T>) {
    if let Err(err) = result {
        tracing::error!(operation, "{}", err);
        eprintln!("Error: {}::{}(): {}", MOD_NAME, operation, err);
    }
}
