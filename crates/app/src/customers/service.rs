//! Payment info service.

use async_trait::async_trait;
use mockall::automock;
use till::ids::CustomerId;

use crate::customers::PaymentInfoError;

/// Answers whether the backend already holds payment details for a customer.
///
/// Answers are never cached; every checkout asks again.
#[automock]
#[async_trait]
pub trait PaymentInfoService: Send + Sync {
    /// Whether payment info is known for the customer.
    async fn payment_info_known(&self, customer: CustomerId) -> Result<bool, PaymentInfoError>;
}
