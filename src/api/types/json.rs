//! JSON extractor that answers bad bodies with the API error format

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

use super::error::{ApiError, NO_DATA};
use crate::domain::DomainError;

/// JSON body extractor and responder.
///
/// A request without a JSON content type, with an empty body, or whose body
/// is falsy (`null`, `false`, `0`, `""`, `[]` or `{}`) is rejected with
/// "No data provided". A body that parses but lacks required fields is
/// rejected as invalid request data.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> std::ops::Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or("").trim();
            mime == "application/json" || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn is_empty_payload(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn no_data() -> ApiError {
    DomainError::validation(NO_DATA).into()
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(no_data());
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| no_data())?;

        if bytes.is_empty() {
            return Err(no_data());
        }

        let value: Value = serde_json::from_slice(&bytes)
            .map_err(|e| DomainError::validation(format!("Invalid JSON syntax: {}", e)))?;

        if is_empty_payload(&value) {
            return Err(no_data());
        }

        serde_json::from_value(value)
            .map(Json)
            .map_err(|e| DomainError::validation(format!("Invalid request data: {}", e)).into())
    }
}

impl<T> IntoResponse for Json<T>
where
    T: serde::Serialize,
{
    fn into_response(self) -> Response {
        AxumJson(self.0).into_response()
    }
}

/// Accept a JSON string or number and keep it as text.
///
/// Product price and stock are opaque text; clients commonly send them as
/// numbers.
pub fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(text),
        Value::Number(number) => Ok(number.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}
