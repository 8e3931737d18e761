//! Fixtures
//!
//! YAML cart and class catalog snapshots, as used by tests and demos.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rusty_money::iso::Currency;
use serde::Deserialize;
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    classes::ClassCatalog,
    ids::{CustomerId, ItemId},
    items::{CartItem, CartItemError, raw::RawCartItem},
    pricing::currency_from_code,
};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// No cart has been loaded
    #[error("No cart loaded")]
    NoCart,

    /// A cart item could not be decoded
    #[error("Invalid cart item {0}: {1}")]
    Item(ItemId, #[source] CartItemError),

    /// The decoded items do not form a valid cart
    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Cart snapshot in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// ISO currency code the cart is priced in
    pub currency: String,

    /// Selected customer, if any
    #[serde(default)]
    pub customer: Option<CustomerId>,

    /// Selected line, if any
    #[serde(default)]
    pub selected: Option<ItemId>,

    /// Items in wire format
    pub items: Vec<RawCartItem>,
}

/// Loaded fixture set
#[derive(Debug)]
pub struct Fixture {
    base_path: PathBuf,
    cart: Option<CartFixture>,
    currency: Option<&'static Currency>,
    classes: Option<ClassCatalog>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            cart: None,
            currency: None,
            classes: None,
        }
    }

    /// Load a cart from `carts/{name}.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an unknown currency.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));

        self.load_cart_file(file_path)
    }

    /// Load a cart from any YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or names an unknown currency.
    pub fn load_cart_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, FixtureError> {
        let contents = fs::read_to_string(path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        let currency = currency_from_code(&fixture.currency)
            .ok_or_else(|| FixtureError::UnknownCurrency(fixture.currency.clone()))?;

        self.currency = Some(currency);
        self.cart = Some(fixture);

        Ok(self)
    }

    /// Load a class catalog from `classes/{name}.yml`
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_classes(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("classes").join(format!("{name}.yml"));

        self.load_classes_file(file_path)
    }

    /// Load a class catalog from any YAML or JSON file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_classes_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        self.classes = Some(serde_norway::from_str(&contents)?);

        Ok(self)
    }

    /// Currency of the loaded cart
    ///
    /// # Errors
    ///
    /// Returns an error if no cart has been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCart)
    }

    /// Wire items of the loaded cart
    pub fn raw_items(&self) -> &[RawCartItem] {
        self.cart
            .as_ref()
            .map(|cart| cart.items.as_slice())
            .unwrap_or_default()
    }

    /// Selected customer of the loaded cart
    pub fn customer(&self) -> Option<&CustomerId> {
        self.cart.as_ref().and_then(|cart| cart.customer.as_ref())
    }

    /// Selected line of the loaded cart
    pub fn selected(&self) -> Option<&ItemId> {
        self.cart.as_ref().and_then(|cart| cart.selected.as_ref())
    }

    /// Loaded class catalog
    pub fn classes(&self) -> Option<&ClassCatalog> {
        self.classes.as_ref()
    }

    /// Decode every item into a cart
    ///
    /// # Errors
    ///
    /// Returns an error if no cart is loaded or any item fails to decode.
    pub fn cart(&self) -> Result<Cart<'static>, FixtureError> {
        let currency = self.currency()?;

        let items = self
            .raw_items()
            .iter()
            .map(|raw| {
                CartItem::try_from_raw(raw.clone(), currency)
                    .map_err(|error| FixtureError::Item(raw.id.clone(), error))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_items(items, currency)?)
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
