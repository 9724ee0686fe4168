//! Error types for the storefront core
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Store Error Enum ==
/// Unified error type for catalog, cart and storage operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// No product (or other resource) matches the given identifier
    #[error("Not found: {0}")]
    NotFound(String),

    /// Cart index does not refer to an existing item
    #[error("Cart index {index} out of range for {len} item(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No current session
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Durable storage read or write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for StoreError {
    fn into_response(self) -> Response {
        let status = match &self {
            StoreError::NotFound(_) => StatusCode::NOT_FOUND,
            StoreError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
            StoreError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            StoreError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            StoreError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            StoreError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the storefront core.
pub type Result<T> = std::result::Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (StoreError::NotFound("7".into()), StatusCode::NOT_FOUND),
            (
                StoreError::IndexOutOfRange { index: 3, len: 1 },
                StatusCode::NOT_FOUND,
            ),
            (
                StoreError::InvalidRequest("bad".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                StoreError::Unauthorized("no session".into()),
                StatusCode::UNAUTHORIZED,
            ),
            (
                StoreError::Storage("disk".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_index_out_of_range_message() {
        let err = StoreError::IndexOutOfRange { index: 5, len: 2 };
        assert_eq!(err.to_string(), "Cart index 5 out of range for 2 item(s)");
    }
}
