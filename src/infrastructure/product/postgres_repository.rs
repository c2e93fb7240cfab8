//! PostgreSQL product repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::product::{NewProduct, Product, ProductId, ProductRepository};
use crate::domain::DomainError;
use crate::infrastructure::storage::{is_unique_violation, storage_error};

/// PostgreSQL implementation of ProductRepository
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (name, price, quantity)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(&product.price)
        .bind(&product.quantity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::conflict(format!("Product '{}' already exists", product.name))
            } else {
                DomainError::storage(format!("Failed to create product: {}", e))
            }
        })?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit product"))?;

        Ok(product.into_product(ProductId::new(id)))
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let rows = sqlx::query("SELECT id, name, price, quantity FROM products ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("Failed to list products"))?;

        Ok(rows
            .iter()
            .map(|row| {
                Product::new(
                    ProductId::new(row.get("id")),
                    row.get::<String, _>("name"),
                    row.get::<String, _>("price"),
                    row.get::<String, _>("quantity"),
                )
            })
            .collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error("Failed to count products"))?;

        Ok(count as usize)
    }
}
