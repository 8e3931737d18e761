//! Till CLI configuration

use clap::Parser;

use crate::{
    commands::Command,
    config::{api::ApiConfig, currency::CurrencyConfig, observability::LoggingConfig},
};

pub(crate) mod api;
pub(crate) mod currency;
pub(crate) mod observability;

/// Till point-of-sale cart tools
#[derive(Debug, Parser)]
#[command(name = "till", about = "Studio point-of-sale cart tools", long_about = None)]
pub struct TillConfig {
    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Currency settings.
    #[command(flatten)]
    pub currency: CurrencyConfig,

    /// Backend API settings.
    #[command(flatten)]
    pub api: ApiConfig,

    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

impl TillConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}
