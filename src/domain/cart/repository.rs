//! Cart repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{CartItem, CartItemMatch, NewCartItem};
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Repository trait for cart lines
#[async_trait]
pub trait CartRepository: Send + Sync + Debug {
    /// Insert a cart line unconditionally
    async fn create(&self, item: NewCartItem) -> Result<CartItem, DomainError>;

    /// All lines owned by a user, ordered by identifier
    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError>;

    /// Overwrite the quantity of the selected line; `None` when nothing matched
    async fn update_quantity(
        &self,
        selector: CartItemMatch,
        quantity: i32,
    ) -> Result<Option<CartItem>, DomainError>;

    /// Delete the selected line and return it; `None` when nothing matched
    async fn delete_first(&self, selector: CartItemMatch) -> Result<Option<CartItem>, DomainError>;
}
