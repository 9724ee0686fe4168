//! API Routes
//!
//! Configures the Axum router with all storefront endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_item_handler, cart_summary_handler, categories_handler, clear_cart_handler,
    get_cart_handler, get_product_handler, health_handler, list_products_handler,
    remove_item_handler, session_handler, update_item_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/products", get(list_products_handler))
        .route("/api/products/:id", get(get_product_handler))
        .route("/api/categories", get(categories_handler))
        .route("/api/cart", get(get_cart_handler).delete(clear_cart_handler))
        .route("/api/cart/items", post(add_item_handler))
        .route(
            "/api/cart/items/:index",
            delete(remove_item_handler).patch(update_item_handler),
        )
        .route("/api/cart/summary", get(cart_summary_handler))
        .route("/api/session", get(session_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
