//! Response DTOs for the storefront API
//!
//! Defines the structure of outgoing HTTP response bodies.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::{CartItem, CartStore};

/// Response body for every cart read and mutation
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    /// Items in display order
    pub items: Vec<CartItem>,
    /// Sum of quantities
    pub item_count: u64,
    /// Sum of price times quantity
    pub subtotal: Decimal,
}

impl CartResponse {
    /// Snapshots the current cart state
    pub fn from_store(store: &CartStore) -> Self {
        Self {
            items: store.items().to_vec(),
            item_count: store.item_count(),
            subtotal: store.subtotal(),
        }
    }
}

/// Response body for GET /api/categories
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
