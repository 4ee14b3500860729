//! Fare engine command-line entry point.
//!
//! - `calculate` prices a JSON or CSV journey file and prints the result.
//! - `serve` runs the HTTP API.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use fare_engine::api::{AppState, create_router};
use fare_engine::calculation::FareCalculationEngine;
use fare_engine::config::{ConfigLoader, FareRules};
use fare_engine::error::EngineResult;
use fare_engine::input::load_journeys;
use fare_engine::output::OutputFormat;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Fare calculation engine with peak pricing and daily/weekly caps
#[derive(Parser, Debug)]
#[command(name = "fare-engine", version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Price every journey in a .json or .csv file
    Calculate {
        /// Path to the journey file
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// YAML fare rules file (built-in table if omitted)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(short, long, default_value = "127.0.0.1:3000")]
        bind: String,

        /// YAML fare rules file (built-in table if omitted)
        #[arg(short, long)]
        rules: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize structured logging with configurable level via RUST_LOG env var.
    // Logs go to stderr so stdout only carries the rendered result.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let outcome: Result<(), Box<dyn std::error::Error>> = match args.command {
        Command::Calculate {
            file,
            format,
            rules,
        } => calculate(&file, format, rules.as_deref()).map_err(Into::into),
        Command::Serve { bind, rules } => serve(&bind, rules.as_deref()).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "fare-engine failed");
            ExitCode::FAILURE
        }
    }
}

fn load_rules(path: Option<&Path>) -> EngineResult<FareRules> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_rules()),
        None => Ok(FareRules::default()),
    }
}

fn calculate(file: &Path, format: OutputFormat, rules: Option<&Path>) -> EngineResult<()> {
    let engine = FareCalculationEngine::new(load_rules(rules)?);

    let journeys = load_journeys(file)?;
    info!(
        file = %file.display(),
        journeys_count = journeys.len(),
        "Journeys loaded"
    );

    let result = engine.calculate_fares(&journeys)?;
    info!(
        total_fare = result.total_fare,
        total_base_fare = result.total_base_fare(),
        "Calculation complete"
    );

    println!("{}", format.render(&result)?);
    Ok(())
}

async fn serve(bind: &str, rules: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(load_rules(rules)?);
    let listener = tokio::net::TcpListener::bind(bind).await?;

    info!(bind = %bind, "fare-engine API listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
