//! API Module
//!
//! HTTP handlers and routing for the storefront REST API.
//!
//! # Endpoints
//! - `GET /api/products` - Filtered product listing
//! - `GET /api/products/:id` - Product detail
//! - `GET /api/categories` - Category labels
//! - `GET /api/cart` / `DELETE /api/cart` - Read or clear the cart
//! - `POST /api/cart/items` - Add an item
//! - `PATCH /api/cart/items/:index` / `DELETE /api/cart/items/:index` - Update or remove a line
//! - `GET /api/cart/summary` - Checkout totals
//! - `GET /api/session` - Current session
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
