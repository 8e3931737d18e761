//! Till
//!
//! Till renders the lines of a studio point-of-sale cart (classes, class cards,
//! memberships, subscriptions, retail products and custom charges) and decides
//! whether the cart may proceed to payment.

pub mod cart;
pub mod checkout;
pub mod classes;
pub mod display;
pub mod fixtures;
pub mod ids;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod validation;
