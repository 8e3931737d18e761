//! Cart

use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    ids::ItemId,
    items::{CartItem, CartItemError, Quantity},
    pricing::{TotalPriceError, total_price},
};

/// Errors related to cart mutation or totals.
#[derive(Debug, Error, PartialEq)]
pub enum CartError {
    /// An item with the same id is already in the cart.
    #[error("item {0} is already in the cart")]
    DuplicateItem(ItemId),

    /// No item with the given id is in the cart.
    #[error("item {0} is not in the cart")]
    ItemNotFound(ItemId),

    /// An item's currency differs from the cart currency (item id, item currency, cart currency).
    #[error("item {0} has currency {1}, but cart has currency {2}")]
    CurrencyMismatch(ItemId, &'static str, &'static str),

    /// The item rejected the change.
    #[error(transparent)]
    Item(#[from] CartItemError),

    /// Totals could not be calculated.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),
}

/// The cart of the current till session.
///
/// Items are added and removed whole; quantity is the only field changed in place.
#[derive(Debug, Clone)]
pub struct Cart<'a> {
    items: Vec<CartItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create an empty cart in the given currency.
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Create a cart with the given items.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if ids repeat or an item is priced in another currency.
    pub fn with_items(
        items: impl IntoIterator<Item = CartItem<'a>>,
        currency: &'static Currency,
    ) -> Result<Self, CartError> {
        let mut cart = Cart::new(currency);

        items
            .into_iter()
            .try_for_each(|item| cart.add_item(item))?;

        Ok(cart)
    }

    /// Add an item to the end of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the id is already present or the currency differs.
    pub fn add_item(&mut self, item: CartItem<'a>) -> Result<(), CartError> {
        if self.get(item.id()).is_some() {
            return Err(CartError::DuplicateItem(item.id().clone()));
        }

        let item_currency = item.unit_price().currency();

        if item_currency != self.currency {
            return Err(CartError::CurrencyMismatch(
                item.id().clone(),
                item_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        self.items.push(item);

        Ok(())
    }

    /// Remove an item, returning it.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ItemNotFound`] if no item has the id.
    pub fn remove_item(&mut self, id: &ItemId) -> Result<CartItem<'a>, CartError> {
        let idx = self.position(id)?;

        Ok(self.items.remove(idx))
    }

    /// Change the quantity of an item.
    ///
    /// # Errors
    ///
    /// Returns a `CartError` if the item is missing or the new line total overflows.
    pub fn set_quantity(&mut self, id: &ItemId, quantity: Quantity) -> Result<(), CartError> {
        let item = self
            .items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or_else(|| CartError::ItemNotFound(id.clone()))?;

        item.set_quantity(quantity)?;

        Ok(())
    }

    /// Empty the cart, e.g. after a successful checkout.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Look up an item by id.
    pub fn get(&self, id: &ItemId) -> Option<&CartItem<'a>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Items in the order they were added.
    pub fn items(&self) -> &[CartItem<'a>] {
        &self.items
    }

    /// Iterate over the items.
    pub fn iter(&self) -> impl Iterator<Item = &CartItem<'a>> {
        self.items.iter()
    }

    /// Calculate the subtotal of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if there was a money arithmetic or currency mismatch error.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        if self.is_empty() {
            return Ok(Money::from_minor(0, self.currency));
        }

        total_price(&self.items)
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn position(&self, id: &ItemId) -> Result<usize, CartError> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or_else(|| CartError::ItemNotFound(id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::items::{CustomCharge, ItemKind, Membership};

    use super::*;

    fn membership(id: &str, minor: i64, currency: &'static Currency) -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            id.into(),
            Quantity::ONE,
            ItemKind::Membership(Membership {
                name: "Yearly".to_string(),
                price: Money::from_minor(minor, currency),
            }),
        )?)
    }

    fn custom(id: &str, minor: i64) -> TestResult<CartItem<'static>> {
        Ok(CartItem::new(
            id.into(),
            Quantity::ONE,
            ItemKind::Custom(CustomCharge {
                product: "Towel".to_string(),
                description: "Rental".to_string(),
                price: Money::from_minor(minor, iso::EUR),
            }),
        )?)
    }

    #[test]
    fn new_with_currency() {
        let cart = Cart::new(iso::EUR);

        assert_eq!(cart.currency(), iso::EUR);
        assert!(cart.is_empty());
    }

    #[test]
    fn with_items_rejects_currency_mismatch() -> TestResult {
        let items = [membership("1", 100, iso::EUR)?, membership("2", 100, iso::GBP)?];

        let result = Cart::with_items(items, iso::EUR);

        assert_eq!(
            result.map(|cart| cart.len()),
            Err(CartError::CurrencyMismatch(
                ItemId::new("2"),
                iso::GBP.iso_alpha_code,
                iso::EUR.iso_alpha_code
            ))
        );

        Ok(())
    }

    #[test]
    fn add_item_rejects_duplicate_ids() -> TestResult {
        let mut cart = Cart::new(iso::EUR);

        cart.add_item(custom("1", 100)?)?;

        assert_eq!(
            cart.add_item(custom("1", 200)?),
            Err(CartError::DuplicateItem(ItemId::new("1")))
        );
        assert_eq!(cart.len(), 1);

        Ok(())
    }

    #[test]
    fn subtotal_honours_quantities() -> TestResult {
        let mut cart = Cart::with_items([custom("1", 100)?, membership("2", 3000, iso::EUR)?], iso::EUR)?;

        cart.set_quantity(&ItemId::new("1"), Quantity::try_from(4_u32)?)?;

        assert_eq!(cart.subtotal()?, Money::from_minor(3400, iso::EUR));

        Ok(())
    }

    #[test]
    fn subtotal_with_no_items() -> TestResult {
        let cart = Cart::new(iso::EUR);

        assert_eq!(cart.subtotal()?, Money::from_minor(0, iso::EUR));

        Ok(())
    }

    #[test]
    fn remove_and_clear() -> TestResult {
        let mut cart = Cart::with_items([custom("1", 100)?, custom("2", 200)?], iso::EUR)?;

        let removed = cart.remove_item(&ItemId::new("1"))?;

        assert_eq!(removed.id(), &ItemId::new("1"));
        assert_eq!(cart.len(), 1);
        assert!(cart.get(&ItemId::new("2")).is_some(), "item 2 stays");
        assert_eq!(
            cart.remove_item(&ItemId::new("1")).map(|item| item.id().clone()),
            Err(CartError::ItemNotFound(ItemId::new("1")))
        );

        cart.clear();

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn set_quantity_on_missing_item() {
        let mut cart = Cart::new(iso::EUR);

        assert_eq!(
            cart.set_quantity(&ItemId::new("9"), Quantity::ONE),
            Err(CartError::ItemNotFound(ItemId::new("9")))
        );
    }
}
