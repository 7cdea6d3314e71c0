//! roots CLI - linear and quadratic equation solver
//!
//! # Commands
//!
//! - `roots` / `roots interactive` - Prompt for coefficients and print the roots
//! - `roots solve <COEFF>...` - Solve coefficients given as arguments
//!
//! Coefficients are ordered highest degree first: `roots solve 1 -3 2`
//! solves `x² - 3x + 2 = 0`.

use clap::{Parser, Subcommand};
use service_cli::commands;
use service_cli::config::{build_config, CliArgs, OutputFormat};
use service_cli::output::write_error;
use service_cli::CliError;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Linear and quadratic equation solver
#[derive(Parser)]
#[command(name = "roots")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve the equation whose coefficients are given, highest degree first
    Solve {
        /// Coefficients, e.g. `1 -3 2` for x² - 3x + 2
        #[arg(required = true, allow_negative_numbers = true, value_name = "COEFF")]
        coefficients: Vec<String>,
    },

    /// Prompt for a line of coefficients (default)
    Interactive,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = match build_config(&CliArgs {
        config_file: cli.config.clone(),
        format: cli.format,
        verbose: cli.verbose,
    }) {
        Ok(config) => config,
        Err(err) => {
            // tracing is not up yet; the flag format is all we know
            let format = cli.format.unwrap_or_default();
            write_error(&mut io::stdout().lock(), format, &CliError::from(err))?;
            return Ok(ExitCode::FAILURE);
        }
    };

    init_tracing(config.log_level.as_filter_str());
    tracing::debug!(
        version = service_cli::VERSION,
        log_level = %config.log_level,
        format = %config.format,
        "Configuration loaded"
    );

    let mut stdout = io::stdout().lock();
    let result = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Solve { coefficients } => {
            commands::solve::run(&coefficients, config.format, &mut stdout)
        }
        Commands::Interactive => {
            let mut stdin = io::stdin().lock();
            commands::interactive::run(&mut stdin, &mut stdout, config.format)
        }
    };

    match result {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(err) => {
            tracing::debug!(error = ?err, "Command failed");
            write_error(&mut stdout, config.format, &err)?;
            Ok(ExitCode::FAILURE)
        }
    }
}
