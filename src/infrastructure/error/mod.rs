use axum::{
    extract::rejection::{BytesRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::metrics::ErrorMetrics;
use crate::postgres::PostgresPoolError;
use crate::store::StoreError;

/// Errors that abort service startup.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] PostgresPoolError),

    #[error("Unsupported store backend: {0}")]
    UnsupportedBackend(String),

    #[error("Missing setting: {0}")]
    MissingSetting(&'static str),
}

/// Errors surfaced by HTTP handlers.
///
/// `Validation` answers 400 with its message. `Operation` answers 500 with the
/// store error's public message, or the endpoint fallback when it has none.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("{fallback}: {source}")]
    Operation {
        #[source]
        source: StoreError,
        fallback: &'static str,
    },
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::Validation(message.into())
    }

    pub fn operation(source: StoreError, fallback: &'static str) -> Self {
        ApiError::Operation { source, fallback }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Operation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the client.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation(msg) => msg.clone(),
            ApiError::Operation { source, fallback } => source
                .public_message()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| fallback.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let client_message = self.client_message();

        // Always log the detailed error server-side
        match &self {
            ApiError::Validation(msg) => {
                ErrorMetrics::record_validation();
                tracing::warn!(status = %status.as_u16(), message = %msg, "Request rejected");
            }
            ApiError::Operation { source, fallback } => {
                ErrorMetrics::record_operation();
                tracing::error!(
                    status = %status.as_u16(),
                    error = %source,
                    context = %fallback,
                    "Store operation failed"
                );
            }
        }

        let body = ErrorResponse {
            error: client_message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Validation(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Validation(format!("Invalid query string: {}", rejection.body_text()))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(format!("Invalid path parameter: {}", rejection.body_text()))
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
