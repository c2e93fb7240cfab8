//! PostgreSQL cart repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::cart::{CartItem, CartItemId, CartItemMatch, CartRepository, NewCartItem};
use crate::domain::product::ProductId;
use crate::domain::user::UserId;
use crate::domain::DomainError;
use crate::infrastructure::storage::storage_error;

/// PostgreSQL implementation of CartRepository.
///
/// First-match mutations lock the chosen row with `FOR UPDATE` inside the
/// statement's transaction, so writers on other rows are not blocked.
#[derive(Debug, Clone)]
pub struct PostgresCartRepository {
    pool: PgPool,
}

impl PostgresCartRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Column and key a selector filters on
fn selector_filter(selector: CartItemMatch) -> (&'static str, i64) {
    match selector {
        CartItemMatch::FirstWithProduct(product_id) => ("product_id", product_id.value()),
        CartItemMatch::FirstOwnedBy(user_id) => ("user_id", user_id.value()),
    }
}

/// Subquery selecting the identifier of the first matching row
fn first_match_subquery(column: &str) -> String {
    format!(
        "SELECT id FROM cart_items WHERE {} = $1 ORDER BY id LIMIT 1 FOR UPDATE",
        column
    )
}

#[async_trait]
impl CartRepository for PostgresCartRepository {
    async fn create(&self, item: NewCartItem) -> Result<CartItem, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(item.user_id.value())
        .bind(item.product_id.value())
        .bind(item.quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(storage_error("Failed to add cart item"))?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit cart item"))?;

        Ok(item.into_cart_item(CartItemId::new(id)))
    }

    async fn list_for_user(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, user_id, product_id, quantity
            FROM cart_items
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(storage_error("Failed to list cart items"))?;

        Ok(rows.iter().map(row_to_cart_item).collect())
    }

    async fn update_quantity(
        &self,
        selector: CartItemMatch,
        quantity: i32,
    ) -> Result<Option<CartItem>, DomainError> {
        let (column, key) = selector_filter(selector);
        let query = format!(
            r#"
            UPDATE cart_items SET quantity = $2
            WHERE id = ({})
            RETURNING id, user_id, product_id, quantity
            "#,
            first_match_subquery(column)
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let row = sqlx::query(&query)
            .bind(key)
            .bind(quantity)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error("Failed to update cart item"))?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit cart update"))?;

        Ok(row.as_ref().map(row_to_cart_item))
    }

    async fn delete_first(&self, selector: CartItemMatch) -> Result<Option<CartItem>, DomainError> {
        let (column, key) = selector_filter(selector);
        let query = format!(
            r#"
            DELETE FROM cart_items
            WHERE id = ({})
            RETURNING id, user_id, product_id, quantity
            "#,
            first_match_subquery(column)
        );

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let row = sqlx::query(&query)
            .bind(key)
            .fetch_optional(&mut *tx)
            .await
            .map_err(storage_error("Failed to delete cart item"))?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit cart delete"))?;

        Ok(row.as_ref().map(row_to_cart_item))
    }
}

fn row_to_cart_item(row: &sqlx::postgres::PgRow) -> CartItem {
    CartItem::new(
        CartItemId::new(row.get("id")),
        UserId::new(row.get("user_id")),
        ProductId::new(row.get("product_id")),
        row.get("quantity"),
    )
}
