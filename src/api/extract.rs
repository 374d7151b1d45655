//! Extractors whose rejections answer with the API's `{ "error": ... }` body.

use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
};
use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};

/// JSON request body; malformed bodies are a 400.
///
/// The `Content-Type` header is not checked. An empty body reads as
/// `T::default()`, so a missing field reaches the endpoint's own message.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self> {
        let body = Bytes::from_request(req, state).await?;
        parse_body(&body).map(JsonBody)
    }
}

fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T> {
    if body.iter().all(|b| b.is_ascii_whitespace()) {
        return Ok(T::default());
    }
    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))
}

/// Query string; malformed parameters are a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct QueryParams<T>(pub T);

/// Path parameters; a non-UUID id is a 400.
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct PathParam<T>(pub T);

/// Unwrap a required field or fail validation with `message`.
pub fn require<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| ApiError::validation(message))
}

/// Like `require`, but blank strings count as missing.
pub fn require_text(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(ApiError::validation(message)),
    }
}
