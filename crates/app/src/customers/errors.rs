//! Customer lookup errors.

use thiserror::Error;

/// Errors that can occur when asking the backend about a customer's payment info.
#[derive(Debug, Error)]
pub enum PaymentInfoError {
    /// An HTTP transport, timeout or body decoding error occurred.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-2xx response.
    #[error("unexpected response from backend: {0}")]
    UnexpectedResponse(String),
}
