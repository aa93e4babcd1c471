//! Measura CLI
//!
//! Commands:
//! - convert <amount> <from> <to>: convert an amount between two units
//! - list [dimension]: list catalog units, optionally for one dimension
//!
//! Environment:
//! - MEASURA_PRECISION: decimal places for rendered amounts (default: exact)
//! - RUST_LOG: log filter for stderr output (default: warn)

mod config;

use std::process::ExitCode;
use std::str::FromStr;
use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use measura_core::{Number, NumberError};
use measura_units::{Dimension, Quantity, Unit, UnitError, CATALOG};
use config::Config;

#[derive(Debug, Parser)]
#[command(name = "measura")]
#[command(version, about = "Exact unit conversion for mass, length and volume", long_about = None)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Convert an amount between two units of the same dimension
    Convert {
        /// Amount to convert (e.g. "14", "2.5", "1/3", "6479891e-11")
        #[arg(allow_negative_numbers = true)]
        amount: String,

        /// Source unit symbol or name (e.g. "lb", "pound")
        from: String,

        /// Target unit symbol or name
        to: String,
    },

    /// List catalog units
    List {
        /// Only list units of this dimension (mass, length or volume)
        dimension: Option<String>,
    },
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Unit(#[from] UnitError),

    #[error("invalid amount: {0}")]
    Amount(#[from] NumberError),

    #[error("unknown dimension: {0} (expected one of: mass, length, volume)")]
    UnknownDimension(String),

    #[error("cannot encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// JSON shape of a conversion
#[derive(Serialize)]
struct ConversionReport {
    from: Quantity,
    to: Quantity,
}

fn run(config: &Config, cli: &Cli) -> Result<String, CliError> {
    match &cli.command {
        Commands::Convert { amount, from, to } => {
            let amount = Number::from_str(amount)?;
            let from = CATALOG.lookup(from)?;
            let to = CATALOG.lookup(to)?;
            debug!(%amount, %from, %to, "converting");

            let source = Quantity::new(amount, from.clone());
            let target = source.convert_to(to)?;

            if cli.json {
                let report = ConversionReport { from: source, to: target };
                Ok(serde_json::to_string_pretty(&report)?)
            } else {
                Ok(format!(
                    "{} {} = {} {}",
                    config.render(source.amount()),
                    source.unit(),
                    config.render(target.amount()),
                    target.unit()
                ))
            }
        }
        Commands::List { dimension } => {
            let units: Vec<&Unit> = match dimension {
                Some(name) => {
                    let dimension = Dimension::from_name(name)
                        .ok_or_else(|| CliError::UnknownDimension(name.clone()))?;
                    CATALOG.by_dimension(dimension)
                }
                None => CATALOG.iter().collect(),
            };

            if cli.json {
                Ok(serde_json::to_string_pretty(&units)?)
            } else {
                let lines: Vec<String> = units
                    .iter()
                    .map(|u| format!("{:<6} {:<8} {:<14} {}", u.symbol(), u.dimension().name(), u.name(), config.render(u.ratio())))
                    .collect();
                Ok(lines.join("\n"))
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .init();

    for warning in &config.warnings {
        warn!("{}", warning);
    }

    match run(&config, &cli) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
