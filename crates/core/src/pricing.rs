//! Pricing

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money, MoneyError,
    iso::{self, Currency},
};
use thiserror::Error;

use crate::items::CartItem;

/// Errors that can occur while calculating prices.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// No items were provided, so currency could not be determined.
    #[error("no items provided; cannot determine currency")]
    NoItems,

    /// Quantity multiplied by unit price does not fit in minor units.
    #[error("line total overflows")]
    Overflow,

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Looks up a supported till currency by ISO code, ignoring case.
pub fn currency_from_code(code: &str) -> Option<&'static Currency> {
    match code.trim().to_ascii_uppercase().as_str() {
        "EUR" => Some(iso::EUR),
        "GBP" => Some(iso::GBP),
        "USD" => Some(iso::USD),
        "CHF" => Some(iso::CHF),
        "DKK" => Some(iso::DKK),
        "NOK" => Some(iso::NOK),
        "SEK" => Some(iso::SEK),
        "CAD" => Some(iso::CAD),
        "AUD" => Some(iso::AUD),
        _ => None,
    }
}

/// Converts a decimal major-unit amount (e.g. `12.50`) into money.
///
/// Amounts are rounded half-to-even to the currency's minor unit. Returns
/// `None` when the amount does not fit in `i64` minor units.
pub fn money_from_decimal(amount: Decimal, currency: &Currency) -> Option<Money<'_, Currency>> {
    let scale = Decimal::from(10_u64.checked_pow(currency.exponent)?);

    let minor_units = amount
        .checked_mul(scale)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven)
        .to_i64()?;

    Some(Money::from_minor(minor_units, currency))
}

/// Calculates `quantity × unit price`.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product does not fit in minor units.
pub fn line_total<'a>(
    unit_price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let minor_units = unit_price
        .to_minor_units()
        .checked_mul(i64::from(quantity))
        .ok_or(TotalPriceError::Overflow)?;

    Ok(Money::from_minor(minor_units, unit_price.currency()))
}

/// Calculates the total price of a list of cart items, honouring quantities.
///
/// # Errors
///
/// - [`TotalPriceError::NoItems`]: No items were provided, so currency could not be determined.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(items: &[CartItem<'a>]) -> Result<Money<'a, Currency>, TotalPriceError> {
    let first = items.first().ok_or(TotalPriceError::NoItems)?;

    let total = items.iter().try_fold(
        Money::from_minor(0, first.unit_price().currency()),
        |acc, item| acc.add(item.line_total()).map_err(TotalPriceError::from),
    )?;

    Ok(total)
}
