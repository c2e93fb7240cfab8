//! Account endpoints: registration, login and user listing

use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, MessageResponse};
use crate::domain::User;
use crate::infrastructure::user::RegisterRequest;

pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/users", get(list_users))
}

/// Username and password, as sent to both `/register` and `/login`
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_id: i64,
}

/// Public view of a user; the password hash is never included
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().value(),
            username: user.username().to_string(),
        }
    }
}

/// POST /register
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    state
        .account_service
        .register(RegisterRequest {
            username: request.username,
            password: request.password,
        })
        .await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// POST /login
///
/// Returns the user identifier on success and 401 otherwise.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = state
        .account_service
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id: user.id().value(),
    }))
}

/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    let users = state.account_service.list_users().await?;
    Ok(Json(users.iter().map(UserSummary::from).collect()))
}
