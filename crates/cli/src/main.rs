//! Till command line

use std::{io, process::ExitCode};

use tracing::error;

use crate::config::TillConfig;

mod commands;
mod config;
mod errors;
mod observability;

/// Till CLI entry point
#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration from .env and CLI arguments
    let config = match TillConfig::load() {
        Ok(config) => config,
        Err(parse_error) => parse_error.exit(),
    };

    if let Err(init_error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging failed to initialise, must use eprintln"
        )]
        {
            eprintln!("{init_error}");
        }

        return ExitCode::FAILURE;
    }

    let mut stdout = io::stdout().lock();

    match commands::run(&config, &mut stdout).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(command_error) => {
            error!(error = %command_error, "command failed");

            #[expect(
                clippy::print_stderr,
                reason = "the failure must reach the cashier even when logs are filtered"
            )]
            {
                eprintln!("Error: {command_error}");
            }

            ExitCode::FAILURE
        }
    }
}
