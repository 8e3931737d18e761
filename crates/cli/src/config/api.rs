//! Backend API Config

use std::time::Duration;

use clap::Args;
use till_app::customers::{PaymentInfoConfig, http::DEFAULT_PAYMENT_INFO_PATH};

use crate::errors::CliError;

/// Backend settings.
#[derive(Debug, Args)]
pub struct ApiConfig {
    /// Backend base URL, e.g. `https://studio.example.com`
    #[arg(long, env = "TILL_API_URL")]
    pub api_url: Option<String>,

    /// Path of the customer payment-info endpoint
    #[arg(long, env = "TILL_PAYMENT_INFO_PATH", default_value = DEFAULT_PAYMENT_INFO_PATH)]
    pub payment_info_path: String,

    /// Request timeout in seconds
    #[arg(long, env = "TILL_API_TIMEOUT_SECONDS", default_value_t = 10_u64)]
    pub api_timeout_seconds: u64,
}

impl ApiConfig {
    /// Payment-info client settings.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::MissingApiUrl`] if no backend URL is configured.
    pub fn payment_info(&self) -> Result<PaymentInfoConfig, CliError> {
        let base_url = self.api_url.clone().ok_or(CliError::MissingApiUrl)?;

        Ok(PaymentInfoConfig {
            base_url,
            path: self.payment_info_path.clone(),
            timeout: Duration::from_secs(self.api_timeout_seconds),
        })
    }
}
