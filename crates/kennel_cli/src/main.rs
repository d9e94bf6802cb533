//! kennel CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Validation failure

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use kennel_core::PetError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const VALIDATION_FAILURE: u8 = 3;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let session = match cli.session() {
        Ok(session) => session,
        Err(e) => return report(&e),
    };

    init_logging(&cli, &session.config.log_filter);

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, &session),
        Commands::Bark => commands::bark::execute(&session),
        Commands::Greet(args) => commands::greet::execute(args, &session),
        Commands::HasBaby(args) => commands::has_baby::execute(args, &session),
        Commands::Rename(args) => commands::rename::execute(args, &session),
        Commands::Age(args) => commands::age::execute(args, &session),
        Commands::Validate => commands::validate::execute(&session),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => report(&e),
    }
}

/// Initialize logging. `RUST_LOG` wins over the flags and the config file.
fn init_logging(cli: &Cli, config_filter: &str) {
    let default_filter = if cli.verbose {
        "kennel=debug"
    } else if cli.quiet {
        "warn"
    } else {
        config_filter
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let log_result = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    if log_result.is_err() {
        // Logging already initialized, continue
    }
}

fn report(e: &anyhow::Error) -> ExitCode {
    let exit_code = categorize_error(e);
    eprintln!("Error: {:#}", e);
    ExitCode::from(exit_code)
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if let Some(pet_error) = cause.downcast_ref::<PetError>() {
            return match pet_error {
                PetError::EmptyName | PetError::NegativeAge(_) => ExitCodes::VALIDATION_FAILURE,
                PetError::ConfigNotFound(_) | PetError::UnsupportedConfigFormat(_) => {
                    ExitCodes::INVALID_ARGS
                }
                _ => ExitCodes::GENERAL_ERROR,
            };
        }
    }

    if e.to_string().to_lowercase().contains("validation") {
        ExitCodes::VALIDATION_FAILURE
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
