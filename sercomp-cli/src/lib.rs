#![warn(missing_docs)]
//! Sercomp CLI Library
//!
//! Two subcommands around the log-file coupling:
//! - `run` executes the serializer comparison suite and appends the
//!   measurement log
//! - `plot` parses a previously written log into chart JSON for the
//!   plotting collaborator
//!
//! The two never run in the same invocation; the log file is their only
//! shared state.

mod fixtures;
mod suite;

pub use fixtures::{create_person, Document, Person, DOCUMENT_COUNT};
pub use suite::{prepare_environment, run_suite};

use std::fs::OpenOptions;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sercomp_core::Harness;
use sercomp_report::{generate_json_chart, parse_log, MeasurementLog};

/// Sercomp CLI arguments
#[derive(Parser, Debug)]
#[command(name = "sercomp")]
#[command(author, version, about = "Serializer comparison harness with box-plot log summaries")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the comparison suite and append to the measurement log
    Run {
        /// Timed repetitions per series
        #[arg(long, default_value_t = sercomp_core::DEFAULT_REPETITIONS)]
        repetitions: usize,

        /// Measurement log file to append to
        #[arg(long, default_value = "measurements.log")]
        log: PathBuf,

        /// Pin the measurement thread to this CPU
        #[arg(long)]
        pin_cpu: Option<usize>,
    },

    /// Parse a measurement log into chart JSON
    Plot {
        /// Log file to parse
        log: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the sercomp CLI. This is the main entry point for the binary.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the sercomp CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> Result<()> {
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        tracing_subscriber::fmt().with_env_filter("info").init();
    }

    match cli.command {
        Commands::Run {
            repetitions,
            log,
            pin_cpu,
        } => {
            prepare_environment(pin_cpu);

            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log)
                .with_context(|| format!("opening log file {}", log.display()))?;
            let mut measurement_log = MeasurementLog::new(file);

            let harness = Harness::new(repetitions);
            run_suite(&harness, &mut measurement_log)?;

            println!("Measurements appended to: {}", log.display());
        }

        Commands::Plot { log, output } => {
            let text = std::fs::read_to_string(&log)
                .with_context(|| format!("reading log file {}", log.display()))?;

            let chart = parse_log(&text)?;
            let json = generate_json_chart(&chart)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing chart data to {}", path.display()))?;
                    println!("Chart data written to: {}", path.display());
                }
                None => println!("{json}"),
            }
        }
    }

    Ok(())
}
