//! Typed Ids

use std::{
    borrow::Borrow,
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A string identifier tagged with the kind of record it points at.
///
/// The backend sends ids either as JSON strings or as integers; both forms
/// deserialize to the same textual id.
pub struct TypedId<T>(String, PhantomData<fn() -> T>);

impl<T> TypedId<T> {
    /// Create an id from its textual form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into(), PhantomData)
    }

    /// Borrow the textual form of the id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning its textual form.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Whether the id has no content.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        Self::new(self.0.clone())
    }
}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Borrow<str> for TypedId<T> {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl<T> From<String> for TypedId<T> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<T> From<&str> for TypedId<T> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<T> From<u64> for TypedId<T> {
    fn from(value: u64) -> Self {
        Self::new(value.to_string())
    }
}

impl<T> Serialize for TypedId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de, T> Deserialize<'de> for TypedId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Unsigned(u64),
            Signed(i64),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Text(id) => Self::new(id),
            Repr::Unsigned(id) => Self::new(id.to_string()),
            Repr::Signed(id) => Self::new(id.to_string()),
        })
    }
}

/// Marker for cart line item ids.
#[derive(Debug)]
pub enum CartItemRecord {}

/// Marker for scheduled class ids.
#[derive(Debug)]
pub enum ClassRecord {}

/// Marker for customer ids.
#[derive(Debug)]
pub enum CustomerRecord {}

/// Cart line item id, stable for the lifetime of the cart session.
pub type ItemId = TypedId<CartItemRecord>;

/// Scheduled class id.
pub type ClassId = TypedId<ClassRecord>;

/// Customer id.
pub type CustomerId = TypedId<CustomerRecord>;
