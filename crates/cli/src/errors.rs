//! CLI errors.

use std::io;

use thiserror::Error;
use till::{display::table::TableError, fixtures::FixtureError, pricing::TotalPriceError};
use till_app::{checkout::CheckoutError, customers::PaymentInfoError};

/// Errors that end a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// The cart or class catalog could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// The cart table could not be written.
    #[error(transparent)]
    Table(#[from] TableError),

    /// Reading input or writing output failed.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// A JSON document could not be parsed.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured currency is not supported.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Totals could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// The command needs the backend but no URL is configured.
    #[error("no backend configured; set --api-url or TILL_API_URL")]
    MissingApiUrl,

    /// The payment-info client could not be created.
    #[error(transparent)]
    PaymentInfo(#[from] PaymentInfoError),

    /// The cart cannot proceed to payment.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
