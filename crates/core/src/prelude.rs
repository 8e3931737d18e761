//! Till prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, CartError},
    checkout::{
        PaymentBlocked, PaymentRoute, can_proceed_to_payment, has_subscription,
        needs_payment_info_lookup, payment_eligibility, route_for_payment_info,
    },
    classes::{ClassCatalog, class_name},
    display::{
        CartLine, DisplayRepresentation, QuantityLine, UnrenderableLine, render, render_cart,
        render_items, rendered_subtotal,
        table::{TableError, write_cart},
    },
    ids::{ClassId, CustomerId, ItemId, TypedId},
    items::{
        CartItem, CartItemError, ClassReconcileLater, ClassVisit, Classcard, CustomCharge,
        ItemKind, ItemType, Membership, ProductVariant, Quantity, Subscription,
        raw::{RawCartItem, RawItemData},
    },
    pricing::{TotalPriceError, currency_from_code, line_total, money_from_decimal, total_price},
    validation::{
        CheckinOutcome, ReceiptItem, ReceiptLine, ValidationOutcome, ValidationResponse,
    },
};
