//! Cart service for adding, updating, listing and removing cart lines

use std::sync::Arc;

use tracing::debug;

use crate::domain::cart::{CartItem, CartItemMatch, CartRepository, NewCartItem};
use crate::domain::product::ProductId;
use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Request for putting a product in a user's cart
#[derive(Debug, Clone)]
pub struct AddToCartRequest {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Cart service.
///
/// Neither the user nor the product referenced by a cart line is checked to
/// exist, and adding the same product twice creates two lines.
#[derive(Debug)]
pub struct CartService<R: CartRepository> {
    repository: Arc<R>,
}

impl<R: CartRepository> CartService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub async fn add_to_cart(&self, request: AddToCartRequest) -> Result<CartItem, DomainError> {
        let item = self
            .repository
            .create(NewCartItem {
                user_id: request.user_id,
                product_id: request.product_id,
                quantity: request.quantity,
            })
            .await?;

        debug!(
            cart_item_id = %item.id(),
            user_id = %item.user_id(),
            product_id = %item.product_id(),
            "Added cart item"
        );
        Ok(item)
    }

    /// Overwrite the quantity of the first cart line holding `product_id`,
    /// whichever user it belongs to
    pub async fn update_cart(
        &self,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItem, DomainError> {
        let item = self
            .repository
            .update_quantity(CartItemMatch::FirstWithProduct(product_id), quantity)
            .await?
            .ok_or_else(|| DomainError::not_found("Product not found in cart"))?;

        debug!(cart_item_id = %item.id(), quantity, "Updated cart item");
        Ok(item)
    }

    pub async fn list_cart(&self, user_id: UserId) -> Result<Vec<CartItem>, DomainError> {
        self.repository.list_for_user(user_id).await
    }

    /// Delete the first cart line owned by `user_id`; other lines stay
    pub async fn remove_from_cart(&self, user_id: UserId) -> Result<CartItem, DomainError> {
        let item = self
            .repository
            .delete_first(CartItemMatch::FirstOwnedBy(user_id))
            .await?
            .ok_or_else(|| DomainError::not_found("Cart item not found"))?;

        debug!(cart_item_id = %item.id(), user_id = %user_id, "Removed cart item");
        Ok(item)
    }
}
