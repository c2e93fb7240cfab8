//! Application state for shared services

use std::sync::Arc;

use crate::domain::{
    CartItem, CartRepository, DomainError, Product, ProductId, ProductRepository, User, UserId,
    UserRepository,
};
use crate::infrastructure::cart::{AddToCartRequest, CartService};
use crate::infrastructure::product::{AddProductRequest, CatalogService};
use crate::infrastructure::user::{AccountService, PasswordHasher, RegisterRequest};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
    pub catalog_service: Arc<dyn CatalogServiceTrait>,
    pub cart_service: Arc<dyn CartServiceTrait>,
}

/// Trait for account operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError>;
    async fn login(&self, username: &str, password: &str) -> Result<User, DomainError>;
    async fn list_users(&self) -> Result<Vec<User>, DomainError>;
    async fn count_users(&self) -> Result<usize, DomainError>;
}

/// Trait for catalog operations
#[async_trait::async_trait]
pub trait CatalogServiceTrait: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, DomainError>;
    async fn add_product(&self, request: AddProductRequest) -> Result<Product, DomainError>;
    async fn count_products(&self) -> Result<usize, DomainError>;
}

/// Trait for cart operations
#[async_trait::async_trait]
pub trait CartServiceTrait: Send + Sync {
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<CartItem, DomainError>;
    async fn update_cart(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, DomainError>;
    async fn list_cart(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError>;
    async fn remove_from_cart(&self, user_id: UserId) -> Result<CartItem, DomainError>;
}

#[async_trait::async_trait]
impl<R: UserRepository + 'static, H: PasswordHasher + 'static> AccountServiceTrait
    for AccountService<R, H>
{
    async fn register(&self, request: RegisterRequest) -> Result<User, DomainError> {
        AccountService::register(self, request).await
    }

    async fn login(&self, username: &str, password: &str) -> Result<User, DomainError> {
        AccountService::login(self, username, password).await
    }

    async fn list_users(&self) -> Result<Vec<User>, DomainError> {
        AccountService::list_users(self).await
    }

    async fn count_users(&self) -> Result<usize, DomainError> {
        AccountService::count_users(self).await
    }
}

#[async_trait::async_trait]
impl<R: ProductRepository + 'static> CatalogServiceTrait for CatalogService<R> {
    async fn list_products(&self) -> Result<Vec<Product>, DomainError> {
        CatalogService::list_products(self).await
    }

    async fn add_product(&self, request: AddProductRequest) -> Result<Product, DomainError> {
        CatalogService::add_product(self, request).await
    }

    async fn count_products(&self) -> Result<usize, DomainError> {
        CatalogService::count_products(self).await
    }
}

#[async_trait::async_trait]
impl<R: CartRepository + 'static> CartServiceTrait for CartService<R> {
    async fn add_to_cart(&self, request: AddToCartRequest) -> Result<CartItem, DomainError> {
        CartService::add_to_cart(self, request).await
    }

    async fn update_cart(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, DomainError> {
        CartService::update_cart(self, product_id, quantity).await
    }

    async fn list_cart(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError> {
        CartService::list_cart(self, user_id).await
    }

    async fn remove_from_cart(&self, user_id: UserId) -> Result<CartItem, DomainError> {
        CartService::remove_from_cart(self, user_id).await
    }
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        account_service: Arc<dyn AccountServiceTrait>,
        catalog_service: Arc<dyn CatalogServiceTrait>,
        cart_service: Arc<dyn CartServiceTrait>,
    ) -> Self {
        Self {
            account_service,
            catalog_service,
            cart_service,
        }
    }

    /// Wire services over one set of repositories
    pub fn from_repositories<U, P, C, H>(users: U, products: P, carts: C, hasher: H) -> Self
    where
        U: UserRepository + 'static,
        P: ProductRepository + 'static,
        C: CartRepository + 'static,
        H: PasswordHasher + 'static,
    {
        Self::new(
            Arc::new(AccountService::new(Arc::new(users), Arc::new(hasher))),
            Arc::new(CatalogService::new(Arc::new(products))),
            Arc::new(CartService::new(Arc::new(carts))),
        )
    }
}
