//! Item kinds

use rusty_money::{Money, iso::Currency};

use crate::{ids::ClassId, items::ItemType};

/// Variant payload of a cart item. The variant fully determines which fields exist.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind<'a> {
    /// `class_dropin`
    ClassDropin(ClassVisit<'a>),

    /// `class_trial`
    ClassTrial(ClassVisit<'a>),

    /// `class_reconcile_later`
    ClassReconcileLater(ClassReconcileLater<'a>),

    /// `product`
    Product(ProductVariant<'a>),

    /// `classcard`
    Classcard(Classcard<'a>),

    /// `membership`
    Membership(Membership<'a>),

    /// `subscription`
    Subscription(Subscription<'a>),

    /// `custom`
    Custom(CustomCharge<'a>),
}

impl<'a> ItemKind<'a> {
    /// Wire discriminant of the payload.
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemKind::ClassDropin(_) => ItemType::ClassDropin,
            ItemKind::ClassTrial(_) => ItemType::ClassTrial,
            ItemKind::ClassReconcileLater(_) => ItemType::ClassReconcileLater,
            ItemKind::Product(_) => ItemType::Product,
            ItemKind::Classcard(_) => ItemType::Classcard,
            ItemKind::Membership(_) => ItemType::Membership,
            ItemKind::Subscription(_) => ItemType::Subscription,
            ItemKind::Custom(_) => ItemType::Custom,
        }
    }

    /// Price of a single unit.
    pub fn unit_price(&self) -> &Money<'a, Currency> {
        match self {
            ItemKind::ClassDropin(visit) | ItemKind::ClassTrial(visit) => &visit.price,
            ItemKind::ClassReconcileLater(class) => &class.price,
            ItemKind::Product(product) => &product.price,
            ItemKind::Classcard(card) => &card.price,
            ItemKind::Membership(membership) => &membership.price,
            ItemKind::Subscription(subscription) => &subscription.price,
            ItemKind::Custom(custom) => &custom.price,
        }
    }

    /// Class check-in attached to a card or subscription purchase.
    pub fn checkin_classes_id(&self) -> Option<&ClassId> {
        match self {
            ItemKind::Classcard(card) => card.checkin_classes_id.as_ref(),
            ItemKind::Subscription(subscription) => subscription.checkin_classes_id.as_ref(),
            ItemKind::ClassDropin(_)
            | ItemKind::ClassTrial(_)
            | ItemKind::ClassReconcileLater(_)
            | ItemKind::Product(_)
            | ItemKind::Membership(_)
            | ItemKind::Custom(_) => None,
        }
    }
}

/// A visit to a scheduled class (drop-in or trial).
#[derive(Debug, Clone, PartialEq)]
pub struct ClassVisit<'a> {
    /// Scheduled class, `clsID` on the wire.
    pub class_id: ClassId,

    /// Unit price, `Price` on the wire.
    pub price: Money<'a, Currency>,
}

/// A drop-in class described by its schedule rather than a class id.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassReconcileLater<'a> {
    /// Class type name, `school_classtype` on the wire.
    pub classtype: String,

    /// Location name, `school_location` on the wire.
    pub location: String,

    /// Start time as sent by the backend, `time_start` on the wire.
    pub time_start: String,

    /// Unit price, `price` on the wire.
    pub price: Money<'a, Currency>,
}

/// A retail product variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductVariant<'a> {
    /// `variant_name`
    pub variant_name: String,

    /// `product_name`
    pub product_name: String,

    /// Unit price, `price` on the wire.
    pub price: Money<'a, Currency>,
}

/// A class card.
#[derive(Debug, Clone, PartialEq)]
pub struct Classcard<'a> {
    /// Card name, `Name` on the wire.
    pub name: String,

    /// Unit price, `Price` on the wire.
    pub price: Money<'a, Currency>,

    /// Class to check in to with this card.
    pub checkin_classes_id: Option<ClassId>,
}

/// A membership.
#[derive(Debug, Clone, PartialEq)]
pub struct Membership<'a> {
    /// Membership name, `Name` on the wire.
    pub name: String,

    /// Unit price, `Price` on the wire.
    pub price: Money<'a, Currency>,
}

/// A subscription.
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription<'a> {
    /// Subscription name, `Name` on the wire.
    pub name: String,

    /// Unit price, `Price` on the wire.
    pub price: Money<'a, Currency>,

    /// Class to check in to with this subscription.
    pub checkin_classes_id: Option<ClassId>,
}

/// A custom charge entered at the till.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomCharge<'a> {
    /// `product`
    pub product: String,

    /// `description`
    pub description: String,

    /// Unit price, `price` on the wire.
    pub price: Money<'a, Currency>,
}
