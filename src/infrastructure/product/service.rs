//! Catalog service for listing and adding products

use std::sync::Arc;

use tracing::debug;

use crate::domain::product::{NewProduct, Product, ProductRepository};
use crate::domain::DomainError;

/// Request for adding a product; price and quantity are stored as given
#[derive(Debug, Clone)]
pub struct AddProductRequest {
    pub name: String,
    pub price: String,
    pub quantity: String,
}

#[derive(Debug)]
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Every product in store order
    pub async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        self.repository.list().await
    }

    pub async fn add_product(&self, request: AddProductRequest) -> Result<Product, DomainError> {
        let product = self
            .repository
            .create(NewProduct {
                name: request.name,
                price: request.price,
                quantity: request.quantity,
            })
            .await?;

        debug!(product_id = %product.id(), name = %product.name(), "Added product");
        Ok(product)
    }

    pub async fn count_products(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::MockProductRepository;
    use crate::infrastructure::product::InMemoryProductRepository;

    fn create_service() -> CatalogService<InMemoryProductRepository> {
        CatalogService::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn make_request(name: &str, price: &str, quantity: &str) -> AddProductRequest {
        AddProductRequest {
            name: name.to_string(),
            price: price.to_string(),
            quantity: quantity.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_empty_catalog() {
        let service = create_service();
        assert!(service.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let service = create_service();

        service
            .add_product(make_request("Kettle", "24.99", "10"))
            .await
            .unwrap();
        service
            .add_product(make_request("Mug", "4.50", "120"))
            .await
            .unwrap();

        let products = service.list_products().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name(), "Kettle");
        assert_eq!(products[0].price(), "24.99");
        assert_eq!(products[1].quantity(), "120");
        assert!(products[0].id() < products[1].id());
    }

    #[tokio::test]
    async fn test_price_and_quantity_are_opaque_text() {
        let service = create_service();

        let product = service
            .add_product(make_request("Mystery box", "ask us", "plenty"))
            .await
            .unwrap();

        assert_eq!(product.price(), "ask us");
        assert_eq!(product.quantity(), "plenty");
    }

    #[tokio::test]
    async fn test_duplicate_name_leaves_catalog_unchanged() {
        let service = create_service();

        service
            .add_product(make_request("Kettle", "24.99", "10"))
            .await
            .unwrap();
        let result = service
            .add_product(make_request("Kettle", "19.99", "3"))
            .await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(service.count_products().await.unwrap(), 1);
        assert_eq!(service.list_products().await.unwrap()[0].price(), "24.99");
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let repository = Arc::new(MockProductRepository::new());
        let service = CatalogService::new(repository.clone());
        repository.set_should_fail(true).await;

        assert!(matches!(
            service.list_products().await,
            Err(DomainError::Storage { .. })
        ));
    }
}
