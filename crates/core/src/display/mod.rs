//! Cart line display
//!
//! Maps every cart item variant to the lines shown in the till's cart list.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rusty_money::{Money, iso::Currency};
use tracing::warn;

use crate::{
    classes::{ClassCatalog, class_name},
    ids::ItemId,
    items::{CartItem, CartItemError, ItemKind, Quantity, raw::RawCartItem},
    pricing::TotalPriceError,
};

pub mod table;

/// How a single cart line is shown.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRepresentation<'a> {
    /// Bold first line, e.g. `Classcard - 10 classes`.
    pub label: String,

    /// Quantity, unit price and line total.
    pub quantity: QuantityLine<'a>,

    /// Optional muted detail, e.g. `Checkin to Vinyasa Flow`.
    pub detail: Option<String>,

    /// Whether this line is the currently selected one.
    pub highlighted: bool,
}

/// `{quantity} Item(s) at {unit price} each`, with the line total alongside.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityLine<'a> {
    /// Number of units.
    pub quantity: Quantity,

    /// Price of one unit.
    pub unit_price: Money<'a, Currency>,

    /// `quantity × unit_price`
    pub total: Money<'a, Currency>,
}

impl Display for QuantityLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} Item(s) at {} each", self.quantity, self.unit_price)
    }
}

/// Renders one cart item.
///
/// Check-in details are only shown when a class catalog is supplied and the
/// card or subscription carries a check-in class.
pub fn render<'a>(
    item: &CartItem<'a>,
    classes: Option<&ClassCatalog>,
    selected_item: Option<&ItemId>,
) -> DisplayRepresentation<'a> {
    let label = match item.kind() {
        ItemKind::ClassDropin(visit) => {
            format!("Drop-in class - {}", class_name(classes, &visit.class_id))
        }
        ItemKind::ClassTrial(visit) => {
            format!("Trial class - {}", class_name(classes, &visit.class_id))
        }
        ItemKind::ClassReconcileLater(class) => format!(
            "Drop-in class - {} in {} @{}",
            class.classtype, class.location, class.time_start
        ),
        ItemKind::Product(product) => {
            format!("{} - {}", product.variant_name, product.product_name)
        }
        ItemKind::Classcard(card) => format!("Classcard - {}", card.name),
        ItemKind::Membership(membership) => format!("Membership - {}", membership.name),
        ItemKind::Subscription(subscription) => format!("Subscription - {}", subscription.name),
        ItemKind::Custom(custom) => format!("{} - {}", custom.product, custom.description),
    };

    let detail = classes.zip(item.checkin_classes_id()).map(|(catalog, class_id)| {
        format!("Checkin to {}", catalog.display_name(class_id))
    });

    DisplayRepresentation {
        label,
        quantity: QuantityLine {
            quantity: item.quantity(),
            unit_price: *item.unit_price(),
            total: item.line_total(),
        },
        detail,
        highlighted: selected_item == Some(item.id()),
    }
}

/// A cart line that could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct UnrenderableLine {
    /// Id of the broken item.
    pub id: ItemId,

    /// Whether the broken item is the selected one.
    pub highlighted: bool,

    /// Why the item could not be rendered.
    pub error: CartItemError,
}

impl UnrenderableLine {
    /// Placeholder label shown instead of the item.
    pub fn label(&self) -> String {
        format!("Unavailable item ({})", self.id)
    }
}

/// One line in the rendered cart list.
#[derive(Debug, Clone, PartialEq)]
pub enum CartLine<'a> {
    /// The item rendered normally.
    Rendered(DisplayRepresentation<'a>),

    /// The item could not be decoded and is shown as a placeholder.
    Unrenderable(UnrenderableLine),
}

impl CartLine<'_> {
    /// Label shown for the line.
    pub fn label(&self) -> String {
        match self {
            CartLine::Rendered(display) => display.label.clone(),
            CartLine::Unrenderable(line) => line.label(),
        }
    }

    /// Whether the line is the selected one.
    pub fn highlighted(&self) -> bool {
        match self {
            CartLine::Rendered(display) => display.highlighted,
            CartLine::Unrenderable(line) => line.highlighted,
        }
    }
}

/// Renders decoded cart items.
pub fn render_items<'a>(
    items: &[CartItem<'a>],
    classes: Option<&ClassCatalog>,
    selected_item: Option<&ItemId>,
) -> Vec<DisplayRepresentation<'a>> {
    items
        .iter()
        .map(|item| render(item, classes, selected_item))
        .collect()
}

/// Decodes and renders every wire item independently; a broken item becomes
/// a placeholder line and never hides the rest of the cart.
pub fn render_cart<'a>(
    items: &[RawCartItem],
    classes: Option<&ClassCatalog>,
    selected_item: Option<&ItemId>,
    currency: &'a Currency,
) -> Vec<CartLine<'a>> {
    items
        .iter()
        .map(|raw| match CartItem::try_from_raw(raw.clone(), currency) {
            Ok(item) => CartLine::Rendered(render(&item, classes, selected_item)),
            Err(error) => {
                warn!(item_id = %raw.id, item_type = %raw.item_type, %error, "cart item not renderable");

                CartLine::Unrenderable(UnrenderableLine {
                    highlighted: selected_item == Some(&raw.id),
                    id: raw.id.clone(),
                    error,
                })
            }
        })
        .collect()
}

/// Sums the totals of the rendered lines. Unrenderable lines add nothing.
///
/// # Errors
///
/// Returns [`TotalPriceError::Money`] if a line is priced in another currency.
pub fn rendered_subtotal<'a>(
    lines: &[CartLine<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    lines
        .iter()
        .filter_map(|line| match line {
            CartLine::Rendered(display) => Some(display.quantity.total),
            CartLine::Unrenderable(_) => None,
        })
        .try_fold(Money::from_minor(0, currency), |acc, total| {
            acc.add(total).map_err(TotalPriceError::from)
        })
}
