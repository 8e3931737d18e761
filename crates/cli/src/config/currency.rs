//! Currency Config

use clap::Args;
use rusty_money::iso::Currency;
use till::pricing::currency_from_code;

use crate::errors::CliError;

/// Currency settings.
#[derive(Debug, Args)]
pub struct CurrencyConfig {
    /// ISO currency code for amounts whose input does not name one
    #[arg(long, env = "TILL_CURRENCY", default_value = "EUR")]
    pub currency: String,
}

impl CurrencyConfig {
    /// Resolve the configured currency.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::UnknownCurrency`] if the code is not supported.
    pub fn resolve(&self) -> Result<&'static Currency, CliError> {
        currency_from_code(&self.currency)
            .ok_or_else(|| CliError::UnknownCurrency(self.currency.clone()))
    }
}
