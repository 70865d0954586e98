//! Cart Models

use std::fmt::{Display, Formatter, Result as FmtResult};

use jiff::Timestamp;

use crate::{domain::money::Money, uuids::TypedUuid};

/// Product referenced by a cart item.
#[derive(Debug)]
pub struct Product;

/// Product UUID
pub type ProductUuid = TypedUuid<Product>;

/// Opaque identifier scoping a cart to one customer or session.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OwnerId(String);

impl OwnerId {
    #[must_use]
    pub fn new(owner: impl Into<String>) -> Self {
        Self(owner.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for OwnerId {
    fn from(owner: String) -> Self {
        Self(owner)
    }
}

impl From<&str> for OwnerId {
    fn from(owner: &str) -> Self {
        Self(owner.to_owned())
    }
}

impl Display for OwnerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

/// Cart Model
///
/// The materialised set of items held by one owner. An owner without items has an empty cart.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub owner: OwnerId,
    pub items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn empty(owner: OwnerId) -> Self {
        Self {
            owner,
            items: Vec::new(),
        }
    }
}

/// CartItem Model
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_uuid: ProductUuid,
    pub price: Money,

    /// Assigned by the store on insert; `None` for items not yet persisted.
    pub created_at: Option<Timestamp>,
}
