//! Path extractor that answers bad segments with the API error format

use axum::{
    extract::{FromRequestParts, Path as AxumPath},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::domain::DomainError;

/// Path parameter extractor.
///
/// A segment that does not parse into `T`, such as a non-numeric or
/// out-of-range identifier, is rejected as a 400 with a `{message}` body.
#[derive(Debug, Clone, Copy)]
pub struct Path<T>(pub T);

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AxumPath::<T>::from_request_parts(parts, state)
            .await
            .map(|AxumPath(value)| Path(value))
            .map_err(|rejection| DomainError::validation(rejection.body_text()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, routing::get, Router};
    use tower::ServiceExt;

    async fn echo(Path(id): Path<i64>) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/items/{id}", get(echo))
    }

    async fn call(uri: &str) -> axum::response::Response {
        app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_segment() {
        let response = call("/items/42").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_invalid_segments_are_bad_requests() {
        for uri in ["/items/abc", "/items/99999999999999999999"] {
            let response = call(uri).await;
            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "uri: {}", uri);
        }
    }
}
