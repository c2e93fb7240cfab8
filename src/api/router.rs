use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::accounts;
use super::cart;
use super::catalog;
use super::health;
use super::middleware::logging_middleware;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        .merge(accounts::create_accounts_router())
        .merge(catalog::create_catalog_router())
        .merge(cart::create_cart_router())
        .with_state(state)
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::api::types::{GENERIC_FAILURE, NO_DATA};
    use crate::infrastructure::cart::InMemoryCartRepository;
    use crate::infrastructure::product::InMemoryProductRepository;
    use crate::infrastructure::user::{Argon2Hasher, InMemoryUserRepository, INVALID_CREDENTIALS};

    fn app() -> Router {
        create_router_with_state(AppState::from_repositories(
            InMemoryUserRepository::new(),
            InMemoryProductRepository::new(),
            InMemoryCartRepository::new(),
            Argon2Hasher::new(),
        ))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    async fn register(app: &Router, username: &str, password: &str) -> (StatusCode, Value) {
        send(
            app,
            Method::POST,
            "/register",
            Some(json!({ "username": username, "password": password })),
        )
        .await
    }

    async fn add_to_cart(app: &Router, user_id: i64, product_id: i64, quantity: i32) {
        let (status, _) = send(
            app,
            Method::POST,
            "/add_to_cart",
            Some(json!({ "user_id": user_id, "product_id": product_id, "quantity": quantity })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");

        let (status, body) = send(&app, Method::GET, "/ready", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["checks"].as_array().unwrap().len(), 2);

        let (status, _) = send(&app, Method::GET, "/live", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let app = app();

        let (status, body) = register(&app, "alice", "secret").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "User registered successfully" }));

        let (status, body) = send(
            &app,
            Method::POST,
            "/login",
            Some(json!({ "username": "alice", "password": "secret" })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Login successful", "user_id": 1 }));
    }

    #[tokio::test]
    async fn test_duplicate_registration_is_rejected() {
        let app = app();

        register(&app, "alice", "secret").await;
        let (status, body) = register(&app, "alice", "other").await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], GENERIC_FAILURE);

        let (_, users) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(users.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_login_failures_share_message() {
        let app = app();
        register(&app, "alice", "secret").await;

        for (username, password) in [("alice", "wrong"), ("nobody", "secret")] {
            let (status, body) = send(
                &app,
                Method::POST,
                "/login",
                Some(json!({ "username": username, "password": password })),
            )
            .await;
            assert_eq!(status, StatusCode::UNAUTHORIZED);
            assert_eq!(body, json!({ "message": INVALID_CREDENTIALS }));
        }
    }

    #[tokio::test]
    async fn test_list_users_hides_password_hash() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));

        register(&app, "alice", "secret").await;
        register(&app, "bob", "secret").await;

        let (_, body) = send(&app, Method::GET, "/users", None).await;
        assert_eq!(
            body,
            json!([
                { "id": 1, "username": "alice" },
                { "id": 2, "username": "bob" }
            ])
        );
    }

    #[tokio::test]
    async fn test_missing_body_reports_no_data() {
        let app = app();

        for uri in ["/register", "/login", "/add_product", "/add_to_cart"] {
            let (status, body) = send(&app, Method::POST, uri, None).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            assert_eq!(body["message"], NO_DATA);
        }

        let (status, body) = send(&app, Method::POST, "/register", Some(json!({}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], NO_DATA);
    }

    #[tokio::test]
    async fn test_incomplete_body_is_invalid() {
        let app = app();

        let (status, body) =
            send(&app, Method::POST, "/register", Some(json!({ "username": "alice" }))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .unwrap()
            .starts_with("Invalid request data"));
    }

    #[tokio::test]
    async fn test_products() {
        let app = app();

        let (status, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "data": [], "status": "success" }));

        let (status, body) = send(
            &app,
            Method::POST,
            "/add_product",
            Some(json!({ "name": "Widget", "price": "9.99", "quantity": 5 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product added successfully" }));

        let (_, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(
            body,
            json!({
                "data": [{ "id": 1, "name": "Widget", "price": "9.99", "quantity": "5" }],
                "status": "success"
            })
        );
    }

    #[tokio::test]
    async fn test_duplicate_product_name_is_rejected() {
        let app = app();
        let product = json!({ "name": "Widget", "price": "1", "quantity": "1" });

        send(&app, Method::POST, "/add_product", Some(product.clone())).await;
        let (status, body) = send(&app, Method::POST, "/add_product", Some(product)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], GENERIC_FAILURE);

        let (_, body) = send(&app, Method::GET, "/products", None).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_add_and_list_cart() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/add_to_cart",
            Some(json!({ "user_id": 1, "product_id": 2, "quantity": 3 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Product added to cart successfully" }));

        let (status, body) = send(&app, Method::GET, "/cart_list/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([{ "id": 1, "product_id": 2, "quantity": 3 }]));

        let (_, body) = send(&app, Method::GET, "/cart_list/2", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn test_update_cart_changes_first_matching_line() {
        let app = app();
        add_to_cart(&app, 1, 2, 3).await;
        add_to_cart(&app, 2, 2, 4).await;

        let (status, body) = send(
            &app,
            Method::PUT,
            "/update_cart/2",
            Some(json!({ "quantity": 9 })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Cart item updated successfully" }));

        let (_, first) = send(&app, Method::GET, "/cart_list/1", None).await;
        let (_, second) = send(&app, Method::GET, "/cart_list/2", None).await;
        assert_eq!(first[0]["quantity"], 9);
        assert_eq!(second[0]["quantity"], 4);
    }

    #[tokio::test]
    async fn test_update_cart_unknown_product() {
        let app = app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/update_cart/99",
            Some(json!({ "quantity": 1 })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Product not found in cart" }));
    }

    #[tokio::test]
    async fn test_remove_from_cart_deletes_one_line_at_a_time() {
        let app = app();
        add_to_cart(&app, 1, 2, 3).await;
        add_to_cart(&app, 1, 5, 1).await;

        let (status, body) = send(&app, Method::DELETE, "/remove_from_cart/1", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "message": "Cart item deleted successfully" }));

        let (_, body) = send(&app, Method::GET, "/cart_list/1", None).await;
        assert_eq!(body, json!([{ "id": 2, "product_id": 5, "quantity": 1 }]));

        send(&app, Method::DELETE, "/remove_from_cart/1", None).await;
        let (status, body) = send(&app, Method::DELETE, "/remove_from_cart/1", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "message": "Cart item not found" }));
    }

    #[tokio::test]
    async fn test_malformed_path_ids_answer_with_message() {
        let app = app();

        let cases = [
            (Method::GET, "/cart_list/abc", None),
            (Method::PUT, "/update_cart/x", Some(json!({ "quantity": 1 }))),
            (Method::DELETE, "/remove_from_cart/99999999999999999999", None),
        ];

        for (method, uri, body) in cases {
            let (status, body) = send(&app, method, uri, body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "uri: {}", uri);
            assert!(body["message"].is_string(), "uri: {}", uri);
        }
    }

    #[tokio::test]
    async fn test_falsy_bodies_report_no_data() {
        let app = app();

        for body in [json!([]), json!(""), json!(0), json!(false)] {
            let (status, response) = send(&app, Method::POST, "/register", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(response["message"], NO_DATA);
        }
    }

    #[tokio::test]
    async fn test_request_id_is_echoed() {
        let request = Request::builder()
            .uri("/live")
            .header("x-request-id", "req-7")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.headers()["x-request-id"], "req-7");
    }
}
