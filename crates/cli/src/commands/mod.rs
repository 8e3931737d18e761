//! CLI commands

use std::{io::Write, path::Path};

use clap::Subcommand;
use till::fixtures::Fixture;
use tracing::info;

use crate::{config::TillConfig, errors::CliError};

pub(crate) mod checkout;
pub(crate) mod eligibility;
pub(crate) mod render;
pub(crate) mod validation;

/// Till commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render the lines of a cart as a table
    Render(render::RenderArgs),

    /// Check whether a cart may proceed to payment
    Eligibility(eligibility::EligibilityArgs),

    /// Resolve where the payment button leads, asking the backend when needed
    Checkout(checkout::CheckoutArgs),

    /// Summarise a cart validation response
    Validation(validation::ValidationArgs),
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::Render(_) => "render",
            Command::Eligibility(_) => "eligibility",
            Command::Checkout(_) => "checkout",
            Command::Validation(_) => "validation",
        }
    }
}

/// Run the configured command, writing its output to `out`.
pub(crate) async fn run(config: &TillConfig, out: &mut impl Write) -> Result<(), CliError> {
    info!(command = config.command.name(), "running command");

    match &config.command {
        Command::Render(args) => render::run(args, out),
        Command::Eligibility(args) => eligibility::run(args, out),
        Command::Checkout(args) => checkout::run(args, &config.api, out).await,
        Command::Validation(args) => validation::run(args, &config.currency, out),
    }
}

fn load_cart(path: &Path) -> Result<Fixture, CliError> {
    let mut fixture = Fixture::default();

    fixture.load_cart_file(path)?;

    Ok(fixture)
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use std::{
        io::Write,
        path::{Path, PathBuf},
    };

    use tempfile::NamedTempFile;
    use testresult::TestResult;

    pub(crate) fn fixture(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../core/fixtures")
            .join(relative)
    }

    pub(crate) fn temp_file(contents: &str) -> TestResult<NamedTempFile> {
        let mut file = NamedTempFile::new()?;

        file.write_all(contents.as_bytes())?;

        Ok(file)
    }
}
