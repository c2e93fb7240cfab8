//! Cart endpoints

use axum::{
    extract::State,
    routing::{delete, get, post, put},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse, Path};
use crate::domain::{CartItem, ProductId, UserId};
use crate::infrastructure::cart::AddToCartRequest;

pub fn create_cart_router() -> Router<AppState> {
    Router::new()
        .route("/add_to_cart", post(add_to_cart))
        .route("/update_cart/{product_id}", put(update_cart))
        .route("/cart_list/{user_id}", get(list_cart))
        .route("/remove_from_cart/{user_id}", delete(remove_from_cart))
}

#[derive(Debug, Deserialize)]
pub struct NewCartItemRequest {
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct CartItemResponse {
    pub id: i64,
    pub product_id: i64,
    pub quantity: i32,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id().value(),
            product_id: item.product_id().value(),
            quantity: item.quantity(),
        }
    }
}

/// POST /add_to_cart
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<NewCartItemRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .cart_service
        .add_to_cart(AddToCartRequest {
            user_id: UserId::new(request.user_id),
            product_id: ProductId::new(request.product_id),
            quantity: request.quantity,
        })
        .await?;

    Ok(Json(MessageResponse::new("Product added to cart successfully")))
}

/// PUT /update_cart/{product_id}
pub async fn update_cart(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .cart_service
        .update_cart(ProductId::new(product_id), request.quantity)
        .await?;

    Ok(Json(MessageResponse::new("Cart item updated successfully")))
}

/// GET /cart_list/{user_id}
pub async fn list_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<Vec<CartItemResponse>>, ApiError> {
    let items = state.cart_service.list_cart(UserId::new(user_id)).await?;
    Ok(Json(items.iter().map(CartItemResponse::from).collect()))
}

/// DELETE /remove_from_cart/{user_id}
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .cart_service
        .remove_from_cart(UserId::new(user_id))
        .await?;

    Ok(Json(MessageResponse::new("Cart item deleted successfully")))
}
