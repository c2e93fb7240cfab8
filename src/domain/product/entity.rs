//! Product entity

use serde::{Deserialize, Serialize};

/// System-assigned product identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog entry.
///
/// `price` and `quantity` are opaque text as stored; no arithmetic or range
/// invariant is enforced on either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: String,
    quantity: String,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price: price.into(),
            quantity: quantity.into(),
        }
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }
}

/// A product that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl NewProduct {
    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.name, self.price, self.quantity)
    }
}
