//! `till validation`

use std::{fs, io::Write, path::PathBuf};

use clap::Args;
use till::validation::{ValidationOutcome, ValidationResponse};

use crate::{config::currency::CurrencyConfig, errors::CliError};

/// Arguments of `till validation`.
#[derive(Debug, Args)]
pub struct ValidationArgs {
    /// Cart validation response (JSON)
    #[arg(long)]
    pub response: PathBuf,
}

pub(crate) fn run(
    args: &ValidationArgs,
    currency: &CurrencyConfig,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let currency = currency.resolve()?;
    let contents = fs::read_to_string(&args.response)?;
    let response: ValidationResponse = serde_json::from_str(&contents)?;

    for line in ValidationOutcome::from_response(response, currency).summary_lines() {
        writeln!(out, "{line}")?;
    }

    Ok(())
}
