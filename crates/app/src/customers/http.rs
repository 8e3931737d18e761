//! HTTP client for the customer payment-info endpoint.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use till::ids::CustomerId;
use tracing::debug;

use crate::customers::{PaymentInfoError, PaymentInfoService};

/// Default path of the payment-info endpoint.
pub const DEFAULT_PAYMENT_INFO_PATH: &str = "/api/customer_payment_info_known";

/// Configuration for reaching the backend.
#[derive(Debug, Clone)]
pub struct PaymentInfoConfig {
    /// Backend address, e.g. `"https://studio.example.com"`.
    pub base_url: String,

    /// Endpoint path, joined to `base_url`.
    pub path: String,

    /// Request timeout.
    pub timeout: Duration,
}

impl PaymentInfoConfig {
    /// Full endpoint URL.
    #[must_use]
    pub fn url(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }
}

/// Payment-info lookups over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPaymentInfoService {
    url: String,
    http: Client,
}

impl HttpPaymentInfoService {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: &PaymentInfoConfig) -> Result<Self, PaymentInfoError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            url: config.url(),
            http,
        })
    }
}

#[async_trait]
impl PaymentInfoService for HttpPaymentInfoService {
    async fn payment_info_known(&self, customer: CustomerId) -> Result<bool, PaymentInfoError> {
        debug!(customer = %customer, url = %self.url, "requesting payment info");

        let response = self
            .http
            .post(&self.url)
            .json(&PaymentInfoRequest { id: &customer })
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|read_error| format!("<unreadable body: {read_error}>"));

            debug!(customer = %customer, %status, body = %text, "payment info request rejected");

            return Err(PaymentInfoError::UnexpectedResponse(format!(
                "payment info request failed with status {status}: {text}"
            )));
        }

        let parsed: PaymentInfoResponse = response.json().await?;

        Ok(parsed.payment_info_known)
    }
}

#[derive(Debug, Serialize)]
struct PaymentInfoRequest<'c> {
    id: &'c CustomerId,
}

#[derive(Debug, Deserialize)]
struct PaymentInfoResponse {
    payment_info_known: bool,
}
