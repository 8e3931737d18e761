//! Till application services: the customer payment-info lookup and the
//! guarded checkout flow built on it.

pub mod checkout;
pub mod customers;
