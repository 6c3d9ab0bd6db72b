//! Command-line entry point for the Payroll Engine.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::PayrollEngine;
use payroll_engine::config::RulesLoader;
use payroll_engine::error::{EngineError, EngineResult};
use payroll_engine::io::{PayrollReport, load_timesheet_from_json};

/// Computes gross pay from a timesheet using daily and weekly overtime rules
#[derive(Parser, Debug)]
#[command(name = "payroll")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// YAML file overriding the default overtime rules
    #[arg(short, long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Price a timesheet file and print the result
    Run {
        /// Timesheet JSON file
        #[arg(default_value = "data/sample_timesheet.json")]
        timesheet: PathBuf,

        /// Print the result as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Include the audit trace (implies --json)
        #[arg(long)]
        audit: bool,
    },

    /// Serve the HTTP API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let loader = match RulesLoader::load_or_default(cli.rules.as_ref()) {
        Ok(loader) => loader,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    let rules = *loader.rules();

    match cli.command {
        Commands::Run {
            timesheet,
            json,
            audit,
        } => match run(&PayrollEngine::new(rules), &timesheet, json, audit) {
            Ok(output) => {
                println!("{output}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {err}");
                ExitCode::FAILURE
            }
        },
        Commands::Serve { addr } => {
            let listener = match tokio::net::TcpListener::bind(addr).await {
                Ok(listener) => listener,
                Err(err) => {
                    eprintln!("Error: cannot bind {addr}: {err}");
                    return ExitCode::FAILURE;
                }
            };
            info!(%addr, "Payroll API listening");
            if let Err(err) = axum::serve(listener, create_router(AppState::new(rules))).await {
                warn!(error = %err, "Server stopped");
                eprintln!("Error: {err}");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
    }
}

fn run(engine: &PayrollEngine, path: &Path, json: bool, audit: bool) -> EngineResult<String> {
    let timesheet = load_timesheet_from_json(path)?;

    if audit {
        let calculation = engine.run_with_audit(&timesheet)?;
        return to_json(&calculation);
    }

    let result = engine.run(&timesheet)?;
    if json {
        to_json(&result)
    } else {
        Ok(PayrollReport::new(&result).to_string())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> EngineResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| EngineError::SerializationError {
        message: e.to_string(),
    })
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG takes precedence over -v flags
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
