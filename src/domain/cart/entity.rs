//! Cart item entity and lookup strategy

use serde::{Deserialize, Serialize};

use crate::domain::product::ProductId;
use crate::domain::user::UserId;

/// System-assigned cart item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(i64);

impl CartItemId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CartItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One line in a user's cart.
///
/// `user_id` and `product_id` name their rows by identifier only; neither is
/// checked to exist, and several lines may share the same pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    id: CartItemId,
    user_id: UserId,
    product_id: ProductId,
    quantity: i32,
}

impl CartItem {
    pub fn new(id: CartItemId, user_id: UserId, product_id: ProductId, quantity: i32) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
        }
    }

    pub fn id(&self) -> CartItemId {
        self.id
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }
}

/// A cart line that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

impl NewCartItem {
    pub fn into_cart_item(self, id: CartItemId) -> CartItem {
        CartItem::new(id, self.user_id, self.product_id, self.quantity)
    }
}

/// Single-row lookup strategy for cart mutations.
///
/// Each variant resolves to the matching line with the lowest identifier, so a
/// mutation through a `CartItemMatch` touches at most one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartItemMatch {
    /// First line holding the product, whichever user owns it
    FirstWithProduct(ProductId),
    /// First line owned by the user
    FirstOwnedBy(UserId),
}

impl CartItemMatch {
    pub fn matches(&self, item: &CartItem) -> bool {
        match self {
            Self::FirstWithProduct(product_id) => item.product_id() == *product_id,
            Self::FirstOwnedBy(user_id) => item.user_id() == *user_id,
        }
    }

    /// Pick the matching row with the lowest identifier, whatever the input order
    pub fn select<'a>(&self, items: impl IntoIterator<Item = &'a CartItem>) -> Option<&'a CartItem> {
        items
            .into_iter()
            .filter(|item| self.matches(item))
            .min_by_key(|item| item.id())
    }
}
