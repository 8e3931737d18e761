//! Payment route resolution.

use till::{
    checkout::{PaymentRoute, needs_payment_info_lookup, route_for_payment_info},
    ids::CustomerId,
    items::CartItem,
};
use tracing::{debug, info, warn};

use crate::{checkout::CheckoutError, customers::PaymentInfoService};

/// Decides where the till goes when the payment button is pressed.
///
/// Carts holding a subscription for a selected customer ask the backend whether
/// payment details are on file; every other cart goes straight to payment.
/// Eligibility is not checked here, see [`crate::checkout::CheckoutSession`].
///
/// # Errors
///
/// Returns [`CheckoutError::LookupFailure`] if the payment-info lookup failed.
pub async fn resolve_payment_destination(
    items: &[CartItem<'_>],
    customer: Option<&CustomerId>,
    payment_info: &dyn PaymentInfoService,
) -> Result<PaymentRoute, CheckoutError> {
    let Some(customer) = needs_payment_info_lookup(items, customer) else {
        debug!("no subscription for a selected customer, skipping payment info lookup");

        return Ok(PaymentRoute::DirectToPayment);
    };

    let known = payment_info
        .payment_info_known(customer.clone())
        .await
        .inspect_err(|error| warn!(customer = %customer, %error, "payment info lookup failed"))?;

    let route = route_for_payment_info(known);

    info!(customer = %customer, payment_info_known = known, route = %route, "resolved payment route");

    Ok(route)
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use rusty_money::{Money, iso::EUR};
    use testresult::TestResult;
    use till::items::{ClassVisit, ItemKind, ProductVariant, Quantity, Subscription};

    use crate::customers::{MockPaymentInfoService, PaymentInfoError};

    use super::*;

    fn subscription() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "1".into(),
            Quantity::ONE,
            ItemKind::Subscription(Subscription {
                name: "Unlimited".to_string(),
                price: Money::from_minor(8900, EUR),
                checkin_classes_id: None,
            }),
        )?)
    }

    fn dropin() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "2".into(),
            Quantity::ONE,
            ItemKind::ClassDropin(ClassVisit {
                class_id: "10".into(),
                price: Money::from_minor(1500, EUR),
            }),
        )?)
    }

    fn product() -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            "3".into(),
            Quantity::ONE,
            ItemKind::Product(ProductVariant {
                variant_name: "Large".to_string(),
                product_name: "Mat".to_string(),
                price: Money::from_minor(3500, EUR),
            }),
        )?)
    }

    #[tokio::test]
    async fn no_lookup_without_subscription() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info.expect_payment_info_known().never();

        let customer = CustomerId::new("1001");

        let route =
            resolve_payment_destination(&[dropin()?, product()?], Some(&customer), &payment_info).await?;

        assert_eq!(route, PaymentRoute::DirectToPayment);

        Ok(())
    }

    #[tokio::test]
    async fn retail_cart_without_customer_goes_to_payment() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info.expect_payment_info_known().never();

        let route = resolve_payment_destination(&[product()?], None, &payment_info).await?;

        assert_eq!(route, PaymentRoute::DirectToPayment);

        Ok(())
    }

    #[tokio::test]
    async fn subscription_with_known_payment_info() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info
            .expect_payment_info_known()
            .with(eq(CustomerId::new("1001")))
            .once()
            .returning(|_| Ok(true));

        let customer = CustomerId::new("1001");

        let route =
            resolve_payment_destination(&[subscription()?], Some(&customer), &payment_info).await?;

        assert_eq!(route, PaymentRoute::DirectToPayment);

        Ok(())
    }

    #[tokio::test]
    async fn subscription_without_payment_info_collects_bank_details() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info
            .expect_payment_info_known()
            .once()
            .returning(|_| Ok(false));

        let customer = CustomerId::new("1001");

        let route = resolve_payment_destination(
            &[product()?, subscription()?],
            Some(&customer),
            &payment_info,
        )
        .await?;

        assert_eq!(route, PaymentRoute::CollectBankDetails);
        assert_eq!(route.path(), "/shop/bankdetails");

        Ok(())
    }

    #[tokio::test]
    async fn lookup_failure_is_surfaced() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info
            .expect_payment_info_known()
            .once()
            .returning(|_| Err(PaymentInfoError::UnexpectedResponse("status 502".to_string())));

        let customer = CustomerId::new("1001");

        let result = resolve_payment_destination(&[subscription()?], Some(&customer), &payment_info).await;

        assert!(
            matches!(result, Err(CheckoutError::LookupFailure(_))),
            "{result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn no_customer_or_empty_cart_goes_to_payment_without_lookup() -> TestResult {
        let mut payment_info = MockPaymentInfoService::new();

        payment_info.expect_payment_info_known().never();

        let empty = resolve_payment_destination(&[], None, &payment_info).await?;
        let anonymous = resolve_payment_destination(&[subscription()?], None, &payment_info).await?;

        assert_eq!(empty, PaymentRoute::DirectToPayment);
        assert_eq!(anonymous, PaymentRoute::DirectToPayment);

        Ok(())
    }
}
