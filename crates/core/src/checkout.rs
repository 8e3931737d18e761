//! Checkout eligibility

use std::fmt::{Display, Formatter, Result as FmtResult};

use thiserror::Error;

use crate::{
    ids::CustomerId,
    items::{CartItem, ItemType},
};

/// Why a cart cannot proceed to payment.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PaymentBlocked {
    /// There is nothing to pay for.
    #[error("the cart is empty")]
    EmptyCart,

    /// The cart holds a school product but no customer is selected.
    #[error("a customer must be selected for classes, cards, memberships and subscriptions")]
    CustomerRequired,
}

/// Where the till goes after the payment button is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaymentRoute {
    /// Payment details are known, or not needed: go straight to payment.
    DirectToPayment,

    /// The customer buys a subscription without known bank details: collect them first.
    CollectBankDetails,
}

impl PaymentRoute {
    /// Navigation target of the route.
    pub fn path(self) -> &'static str {
        match self {
            PaymentRoute::DirectToPayment => "/shop/payment",
            PaymentRoute::CollectBankDetails => "/shop/bankdetails",
        }
    }
}

impl Display for PaymentRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.path())
    }
}

/// Checks whether the cart may proceed to payment.
///
/// # Errors
///
/// - [`PaymentBlocked::EmptyCart`]: the cart has no items.
/// - [`PaymentBlocked::CustomerRequired`]: a school product is in the cart and no customer is selected.
pub fn payment_eligibility(
    items: &[CartItem<'_>],
    customer: Option<&CustomerId>,
) -> Result<(), PaymentBlocked> {
    if items.is_empty() {
        return Err(PaymentBlocked::EmptyCart);
    }

    if customer.is_none() && items.iter().any(CartItem::is_school_product) {
        return Err(PaymentBlocked::CustomerRequired);
    }

    Ok(())
}

/// Whether the payment button is enabled.
pub fn can_proceed_to_payment(items: &[CartItem<'_>], customer: Option<&CustomerId>) -> bool {
    payment_eligibility(items, customer).is_ok()
}

/// Whether any line is a subscription.
pub fn has_subscription(items: &[CartItem<'_>]) -> bool {
    items
        .iter()
        .any(|item| item.item_type() == ItemType::Subscription)
}

/// Whether resolving the payment route needs the customer's payment-info lookup.
///
/// Only a selected customer buying a subscription is looked up; every other
/// cart goes straight to payment.
pub fn needs_payment_info_lookup<'c>(
    items: &[CartItem<'_>],
    customer: Option<&'c CustomerId>,
) -> Option<&'c CustomerId> {
    customer.filter(|_| has_subscription(items))
}

/// Maps the lookup answer to a route.
pub fn route_for_payment_info(payment_info_known: bool) -> PaymentRoute {
    if payment_info_known {
        PaymentRoute::DirectToPayment
    } else {
        PaymentRoute::CollectBankDetails
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::EUR};
    use testresult::TestResult;

    use crate::{
        ids::ClassId,
        items::{Classcard, CustomCharge, ItemKind, ProductVariant, Quantity, Subscription},
    };

    use super::*;

    fn product() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "p".into(),
            Quantity::ONE,
            ItemKind::Product(ProductVariant {
                variant_name: "500ml".to_string(),
                product_name: "Water".to_string(),
                price: Money::from_minor(250, EUR),
            }),
        )?)
    }

    fn custom() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "c".into(),
            Quantity::ONE,
            ItemKind::Custom(CustomCharge {
                product: "Towel".to_string(),
                description: "Rental".to_string(),
                price: Money::from_minor(100, EUR),
            }),
        )?)
    }

    fn classcard() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "cc".into(),
            Quantity::ONE,
            ItemKind::Classcard(Classcard {
                name: "10 classes".to_string(),
                price: Money::from_minor(12000, EUR),
                checkin_classes_id: Some(ClassId::new("1")),
            }),
        )?)
    }

    fn subscription() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "s".into(),
            Quantity::ONE,
            ItemKind::Subscription(Subscription {
                name: "Unlimited".to_string(),
                price: Money::from_minor(8000, EUR),
                checkin_classes_id: None,
            }),
        )?)
    }

    #[test]
    fn empty_cart_is_blocked() {
        let customer = CustomerId::new("1");

        assert!(!can_proceed_to_payment(&[], None));
        assert!(!can_proceed_to_payment(&[], Some(&customer)));
        assert_eq!(payment_eligibility(&[], Some(&customer)), Err(PaymentBlocked::EmptyCart));
    }

    #[test]
    fn retail_only_cart_needs_no_customer() -> TestResult {
        assert!(can_proceed_to_payment(&[product()?], None));
        assert!(can_proceed_to_payment(&[product()?, custom()?], None));

        Ok(())
    }

    #[test]
    fn school_product_needs_customer() -> TestResult {
        let customer = CustomerId::new("1");

        assert!(!can_proceed_to_payment(&[classcard()?], None));
        assert!(can_proceed_to_payment(&[classcard()?], Some(&customer)));
        assert_eq!(
            payment_eligibility(&[product()?, classcard()?], None),
            Err(PaymentBlocked::CustomerRequired)
        );

        Ok(())
    }

    #[test]
    fn lookup_only_for_customer_with_subscription() -> TestResult {
        let customer = CustomerId::new("1");

        assert_eq!(needs_payment_info_lookup(&[classcard()?], Some(&customer)), None);
        assert_eq!(needs_payment_info_lookup(&[subscription()?], None), None);
        assert_eq!(
            needs_payment_info_lookup(&[product()?, subscription()?], Some(&customer)),
            Some(&customer)
        );

        Ok(())
    }

    #[test]
    fn routes() {
        assert_eq!(route_for_payment_info(true), PaymentRoute::DirectToPayment);
        assert_eq!(route_for_payment_info(false), PaymentRoute::CollectBankDetails);
        assert_eq!(PaymentRoute::CollectBankDetails.path(), "/shop/bankdetails");
    }
}
