//! Customers

mod errors;
pub mod http;
mod service;

pub use errors::*;
pub use http::{HttpPaymentInfoService, PaymentInfoConfig};
pub use service::*;
