//! In-memory product repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::product::{NewProduct, Product, ProductId, ProductRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct ProductTable {
    rows: BTreeMap<ProductId, Product>,
    last_id: i64,
}

/// In-memory implementation of ProductRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    table: Arc<RwLock<ProductTable>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut table = self.table.write().await;

        if table.rows.values().any(|p| p.name() == product.name) {
            return Err(DomainError::conflict(format!(
                "Product '{}' already exists",
                product.name
            )));
        }

        table.last_id += 1;
        let product = product.into_product(ProductId::new(table.last_id));
        table.rows.insert(product.id(), product.clone());

        Ok(product)
    }

    async fn list(&self) -> Result<Vec<Product>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.table.read().await.rows.len())
    }
}
