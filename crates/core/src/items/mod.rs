//! Items

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    num::NonZeroU32,
    str::FromStr,
};

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    ids::{ClassId, ItemId},
    pricing::line_total,
};

mod kinds;
pub mod raw;

pub use kinds::*;

/// Errors raised while building cart items.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartItemError {
    /// The `item_type` tag is not one of the recognised variants.
    #[error("unknown item type: {0}")]
    UnknownItemType(String),

    /// A payload field required by the variant is absent.
    #[error("{item_type} item is missing field `{field}`")]
    MissingField {
        /// Variant the field belongs to.
        item_type: ItemType,

        /// Wire name of the missing field.
        field: &'static str,
    },

    /// A price could not be represented in the cart currency.
    #[error("{item_type} item has an invalid `{field}`")]
    InvalidPrice {
        /// Variant the price belongs to.
        item_type: ItemType,

        /// Wire name of the price field.
        field: &'static str,
    },

    /// Quantities must be positive integers.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Quantity multiplied by unit price does not fit in minor units.
    #[error("line total for quantity {0} overflows")]
    LineTotalOverflow(u32),
}

/// The discriminant of a cart line item, as sent on the wire in `item_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    /// A single class visit paid at the door.
    ClassDropin,

    /// A trial class.
    ClassTrial,

    /// A drop-in class whose booking is reconciled after payment.
    ClassReconcileLater,

    /// A retail product variant.
    Product,

    /// A class card.
    Classcard,

    /// A membership.
    Membership,

    /// A subscription.
    Subscription,

    /// A custom charge entered at the till.
    Custom,
}

impl ItemType {
    /// Every recognised item type.
    pub const ALL: [ItemType; 8] = [
        ItemType::ClassDropin,
        ItemType::ClassTrial,
        ItemType::ClassReconcileLater,
        ItemType::Product,
        ItemType::Classcard,
        ItemType::Membership,
        ItemType::Subscription,
        ItemType::Custom,
    ];

    /// The wire tag for this item type.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::ClassDropin => "class_dropin",
            ItemType::ClassTrial => "class_trial",
            ItemType::ClassReconcileLater => "class_reconcile_later",
            ItemType::Product => "product",
            ItemType::Classcard => "classcard",
            ItemType::Membership => "membership",
            ItemType::Subscription => "subscription",
            ItemType::Custom => "custom",
        }
    }

    /// School products (classes, cards, memberships and subscriptions) can
    /// only be sold to a known customer.
    pub fn is_school_product(self) -> bool {
        !matches!(self, ItemType::Product | ItemType::Custom)
    }
}

impl Display for ItemType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = CartItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|item_type| item_type.as_str() == s)
            .ok_or_else(|| CartItemError::UnknownItemType(s.to_string()))
    }
}

/// A positive line item quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantity(NonZeroU32);

impl Quantity {
    /// A quantity of one.
    pub const ONE: Quantity = Quantity(NonZeroU32::MIN);

    /// The quantity as a plain integer.
    pub fn get(self) -> u32 {
        self.0.get()
    }
}

impl TryFrom<u32> for Quantity {
    type Error = CartItemError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        NonZeroU32::new(value)
            .map(Quantity)
            .ok_or(CartItemError::InvalidQuantity(i64::from(value)))
    }
}

impl TryFrom<i64> for Quantity {
    type Error = CartItemError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .map(Quantity)
            .ok_or(CartItemError::InvalidQuantity(value))
    }
}

impl Display for Quantity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

/// One purchasable entry in the cart.
///
/// The line total (`quantity × unit price`) is checked to fit in minor units
/// whenever the item is created or its quantity changes.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem<'a> {
    id: ItemId,
    quantity: Quantity,
    kind: ItemKind<'a>,
}

impl<'a> CartItem<'a> {
    /// Creates a new cart item.
    ///
    /// # Errors
    ///
    /// Returns [`CartItemError::LineTotalOverflow`] if the line total cannot be represented.
    pub fn new(id: ItemId, quantity: Quantity, kind: ItemKind<'a>) -> Result<Self, CartItemError> {
        check_line_total(&kind, quantity)?;

        Ok(Self { id, quantity, kind })
    }

    /// Item id
    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Item quantity
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Variant payload
    pub fn kind(&self) -> &ItemKind<'a> {
        &self.kind
    }

    /// Wire discriminant of the item.
    pub fn item_type(&self) -> ItemType {
        self.kind.item_type()
    }

    /// Price of a single unit.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        self.kind.unit_price()
    }

    /// `quantity × unit price`.
    pub fn line_total(&self) -> Money<'a, Currency> {
        let unit_price = self.unit_price();

        // Checked on construction and on every quantity change.
        let minor_units = unit_price
            .to_minor_units()
            .saturating_mul(i64::from(self.quantity.get()));

        Money::from_minor(minor_units, unit_price.currency())
    }

    /// Class the purchase checks the customer in to, if any.
    pub fn checkin_classes_id(&self) -> Option<&ClassId> {
        self.kind.checkin_classes_id()
    }

    /// Whether this item requires a selected customer.
    pub fn is_school_product(&self) -> bool {
        self.item_type().is_school_product()
    }

    /// Changes the quantity, the only in-place mutation a cart item allows.
    ///
    /// # Errors
    ///
    /// Returns [`CartItemError::LineTotalOverflow`] if the new line total cannot be represented.
    pub fn set_quantity(&mut self, quantity: Quantity) -> Result<(), CartItemError> {
        check_line_total(&self.kind, quantity)?;

        self.quantity = quantity;

        Ok(())
    }
}

fn check_line_total(kind: &ItemKind<'_>, quantity: Quantity) -> Result<(), CartItemError> {
    line_total(kind.unit_price(), quantity.get())
        .map(|_total| ())
        .map_err(|_err| CartItemError::LineTotalOverflow(quantity.get()))
}
