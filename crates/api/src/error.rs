//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::CheckoutError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Missing or invalid customer credentials.
    Unauthenticated,
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Checkout workflow error.
    Checkout(CheckoutError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Unauthenticated => (
                StatusCode::UNAUTHORIZED,
                "missing or invalid customer credentials".to_string(),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Checkout(err) => checkout_error_to_response(err),
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, String) {
    match &err {
        CheckoutError::VariantNotFound { .. }
        | CheckoutError::ChannelNotFound { .. }
        | CheckoutError::CustomerNotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        CheckoutError::MissingChannelContext => (StatusCode::BAD_REQUEST, err.to_string()),
        CheckoutError::MissingDefaultAddress { .. } => {
            (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        CheckoutError::Rejected(_) => (StatusCode::CONFLICT, err.to_string()),
        CheckoutError::Persistence(_) => {
            tracing::error!(error = %err, "checkout persistence failure");
            (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl From<CheckoutError> for ApiError {
    fn from(err: CheckoutError) -> Self {
        ApiError::Checkout(err)
    }
}
