//! Product repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{NewProduct, Product};
use crate::domain::DomainError;

/// Repository trait for the product catalog
#[async_trait]
pub trait ProductRepository: Send + Sync + Debug {
    /// Insert a new product, failing with `Conflict` if the name is taken
    async fn create(&self, product: NewProduct) -> Result<Product, DomainError>;

    /// List all products ordered by identifier
    async fn list(&self) -> Result<Vec<Product>, DomainError>;

    /// Count products
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    use crate::domain::product::ProductId;

    /// Mock product repository for testing
    #[derive(Debug, Default)]
    pub struct MockProductRepository {
        products: Arc<RwLock<Vec<Product>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockProductRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
            self.check_should_fail().await?;
            let mut products = self.products.write().await;

            if products.iter().any(|p| p.name() == product.name) {
                return Err(DomainError::conflict(format!(
                    "Product '{}' already exists",
                    product.name
                )));
            }

            let product = product.into_product(ProductId::new(products.len() as i64 + 1));
            products.push(product.clone());
            Ok(product)
        }

        async fn list(&self) -> Result<Vec<Product>, DomainError> {
            self.check_should_fail().await?;
            Ok(self.products.read().await.clone())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            Ok(self.products.read().await.len())
        }
    }
}
