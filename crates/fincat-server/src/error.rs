//! Error types for the HTTP surface

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

/// Result type alias for handler-level failures
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Failures the direct CRUD routes surface to HTTP clients.
///
/// The chat endpoint never produces these: conflicts, missing targets, and
/// unparseable commands all travel inside its normal `{reply, stocks}` body.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Symbol already tracked
    #[error("Stock already exists")]
    Conflict,

    /// Symbol not tracked
    #[error("Stock not found")]
    NotFound,

    /// Request body failed validation
    #[error("Invalid stock: {0}")]
    Invalid(String),

    /// Store lock poisoned or other server-side failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Conflict => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({ "detail": self.to_string() }));
        (status, body).into_response()
    }
}
