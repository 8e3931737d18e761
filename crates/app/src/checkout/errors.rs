//! Checkout errors.

use thiserror::Error;
use till::checkout::PaymentBlocked;

use crate::customers::PaymentInfoError;

/// Errors that can stop the till from leaving the cart for payment.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart is not eligible for payment.
    #[error(transparent)]
    Blocked(#[from] PaymentBlocked),

    /// The payment-info lookup failed; the till stays on the cart.
    #[error("payment info lookup failed: {0}")]
    LookupFailure(#[from] PaymentInfoError),

    /// A previous payment request is still waiting for its answer.
    #[error("a payment request is already in flight")]
    InFlight,
}
