//! In-memory cart repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::cart::{CartItem, CartItemId, CartItemMatch, CartRepository, NewCartItem};
use crate::domain::user::UserId;
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct CartTable {
    rows: BTreeMap<CartItemId, CartItem>,
    last_id: i64,
}

impl CartTable {
    fn first_id(&self, selector: CartItemMatch) -> Option<CartItemId> {
        selector.select(self.rows.values()).map(|item| item.id())
    }
}

/// In-memory implementation of CartRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryCartRepository {
    table: Arc<RwLock<CartTable>>,
}

impl InMemoryCartRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CartRepository for InMemoryCartRepository {
    async fn create(&self, item: NewCartItem) -> Result<CartItem, DomainError> {
        let mut table = self.table.write().await;

        table.last_id += 1;
        let item = item.into_cart_item(CartItemId::new(table.last_id));
        table.rows.insert(item.id(), item.clone());

        Ok(item)
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError> {
        let table = self.table.read().await;

        Ok(table
            .rows
            .values()
            .filter(|item| item.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn update_quantity(
        &self,
        selector: CartItemMatch,
        quantity: i32,
    ) -> Result<Option<CartItem>, DomainError> {
        let mut table = self.table.write().await;

        let Some(id) = table.first_id(selector) else {
            return Ok(None);
        };

        Ok(table.rows.get_mut(&id).map(|item| {
            item.set_quantity(quantity);
            item.clone()
        }))
    }

    async fn delete_first(&self, selector: CartItemMatch) -> Result<Option<CartItem>, DomainError> {
        let mut table = self.table.write().await;

        let Some(id) = table.first_id(selector) else {
            return Ok(None);
        };

        Ok(table.rows.remove(&id))
    }
}
