//! Wire representation of cart items.
//!
//! The backend sends every item as `{ id, item_type, quantity, data, checkin_classes_id }`
//! where the shape of `data` depends on `item_type`. Field casing differs between
//! variants (`Price` for school products, `price` for retail, custom and
//! reconcile-later items); each variant reads only its own spelling.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::{
    ids::{ClassId, ItemId},
    items::{
        CartItem, CartItemError, ClassReconcileLater, ClassVisit, Classcard, CustomCharge,
        ItemKind, ItemType, Membership, ProductVariant, Quantity, Subscription,
    },
    pricing::money_from_decimal,
};

/// A cart item exactly as received from the backend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RawCartItem {
    /// Item id
    pub id: ItemId,

    /// Variant tag
    pub item_type: String,

    /// Quantity, validated on conversion
    pub quantity: i64,

    /// Variant payload
    #[serde(default)]
    pub data: RawItemData,

    /// Class check-in for card and subscription purchases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkin_classes_id: Option<ClassId>,
}

/// Union of every variant's payload fields, keyed by their wire names.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RawItemData {
    /// Scheduled class of drop-in and trial items
    #[serde(rename = "clsID", skip_serializing_if = "Option::is_none")]
    pub cls_id: Option<ClassId>,

    /// Unit price of class, card, membership and subscription items
    #[serde(rename = "Price", skip_serializing_if = "Option::is_none")]
    pub school_price: Option<Decimal>,

    /// Unit price of product, custom and reconcile-later items
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Decimal>,

    /// Card, membership or subscription name
    #[serde(rename = "Name", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// `variant_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_name: Option<String>,

    /// `product_name`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// `school_classtype`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_classtype: Option<String>,

    /// `school_location`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub school_location: Option<String>,

    /// `time_start`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,

    /// Custom charge title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,

    /// Custom charge description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl<'a> CartItem<'a> {
    /// Converts a wire item into a typed cart item priced in `currency`.
    ///
    /// # Errors
    ///
    /// - [`CartItemError::UnknownItemType`]: `item_type` is not a recognised tag.
    /// - [`CartItemError::MissingField`]: the variant's payload lacks a required field.
    /// - [`CartItemError::InvalidPrice`]: the price does not fit the currency's minor units.
    /// - [`CartItemError::InvalidQuantity`]: the quantity is not a positive integer.
    pub fn try_from_raw(raw: RawCartItem, currency: &'a Currency) -> Result<Self, CartItemError> {
        let item_type = raw.item_type.parse::<ItemType>()?;
        let quantity = Quantity::try_from(raw.quantity)?;
        let fields = Fields {
            item_type,
            currency,
        };

        let data = raw.data;
        let checkin_classes_id = raw.checkin_classes_id.filter(|id| !id.is_empty());

        let kind = match item_type {
            ItemType::ClassDropin => ItemKind::ClassDropin(ClassVisit {
                class_id: fields.require("clsID", data.cls_id)?,
                price: fields.price("Price", data.school_price)?,
            }),
            ItemType::ClassTrial => ItemKind::ClassTrial(ClassVisit {
                class_id: fields.require("clsID", data.cls_id)?,
                price: fields.price("Price", data.school_price)?,
            }),
            ItemType::ClassReconcileLater => ItemKind::ClassReconcileLater(ClassReconcileLater {
                classtype: fields.require("school_classtype", data.school_classtype)?,
                location: fields.require("school_location", data.school_location)?,
                time_start: fields.require("time_start", data.time_start)?,
                price: fields.price("price", data.price)?,
            }),
            ItemType::Product => ItemKind::Product(ProductVariant {
                variant_name: fields.require("variant_name", data.variant_name)?,
                product_name: fields.require("product_name", data.product_name)?,
                price: fields.price("price", data.price)?,
            }),
            ItemType::Classcard => ItemKind::Classcard(Classcard {
                name: fields.require("Name", data.name)?,
                price: fields.price("Price", data.school_price)?,
                checkin_classes_id,
            }),
            ItemType::Membership => ItemKind::Membership(Membership {
                name: fields.require("Name", data.name)?,
                price: fields.price("Price", data.school_price)?,
            }),
            ItemType::Subscription => ItemKind::Subscription(Subscription {
                name: fields.require("Name", data.name)?,
                price: fields.price("Price", data.school_price)?,
                checkin_classes_id,
            }),
            ItemType::Custom => ItemKind::Custom(CustomCharge {
                product: fields.require("product", data.product)?,
                description: fields.require("description", data.description)?,
                price: fields.price("price", data.price)?,
            }),
        };

        CartItem::new(raw.id, quantity, kind)
    }
}

struct Fields<'a> {
    item_type: ItemType,
    currency: &'a Currency,
}

impl<'a> Fields<'a> {
    fn require<T>(&self, field: &'static str, value: Option<T>) -> Result<T, CartItemError> {
        value.ok_or(CartItemError::MissingField {
            item_type: self.item_type,
            field,
        })
    }

    fn price(
        &self,
        field: &'static str,
        value: Option<Decimal>,
    ) -> Result<Money<'a, Currency>, CartItemError> {
        let amount = self.require(field, value)?;

        money_from_decimal(amount, self.currency).ok_or(CartItemError::InvalidPrice {
            item_type: self.item_type,
            field,
        })
    }
}
