//! Catalog endpoints

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{text_or_number, ApiError, Json, MessageResponse};
use crate::domain::Product;
use crate::infrastructure::product::AddProductRequest;

pub fn create_catalog_router() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/add_product", post(add_product))
}

#[derive(Debug, Deserialize)]
pub struct NewProductRequest {
    pub name: String,
    #[serde(deserialize_with = "text_or_number")]
    pub price: String,
    #[serde(deserialize_with = "text_or_number")]
    pub quantity: String,
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub price: String,
    pub quantity: String,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().value(),
            name: product.name().to_string(),
            price: product.price().to_string(),
            quantity: product.quantity().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub data: Vec<ProductResponse>,
    pub status: &'static str,
}

/// GET /products
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<ProductListResponse>, ApiError> {
    let products = state.catalog_service.list_products().await?;

    Ok(Json(ProductListResponse {
        data: products.iter().map(ProductResponse::from).collect(),
        status: "success",
    }))
}

/// POST /add_product
pub async fn add_product(
    State(state): State<AppState>,
    Json(request): Json<NewProductRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .catalog_service
        .add_product(AddProductRequest {
            name: request.name,
            price: request.price,
            quantity: request.quantity,
        })
        .await?;

    Ok(Json(MessageResponse::new("Product added successfully")))
}
