//! API Handlers
//!
//! HTTP request handlers for the catalog, cart and session endpoints.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use tracing::debug;

use crate::cart::{CartItem, CartStore, CheckoutSummary, FileStorage, KeyValueStorage};
use crate::catalog::{Catalog, Product};
use crate::config::{Config, PricingConfig};
use crate::error::{Result, StoreError};
use crate::models::{
    AddItemRequest, CartResponse, CategoriesResponse, HealthResponse, ProductQueryParams,
    UpdateQuantityRequest,
};
use crate::session::{current_session, Session};

/// Application state shared across all handlers.
///
/// The catalog is immutable and shared freely. The cart sits behind an
/// `RwLock`; every mutation holds the write lock across its persist step,
/// so concurrent mutations are applied one at a time. Mutations and session
/// reads touch storage, so they run on the blocking pool.
#[derive(Clone)]
pub struct AppState {
    /// Static product catalog
    pub catalog: Arc<Catalog>,
    /// The active cart
    pub cart: Arc<RwLock<CartStore>>,
    /// Storage substrate shared with the session boundary
    pub storage: Arc<dyn KeyValueStorage>,
    /// Checkout pricing
    pub pricing: PricingConfig,
    /// Artificial delay before catalog responses
    pub query_latency: Duration,
}

impl AppState {
    /// Creates a new AppState, hydrating the cart from `storage`.
    pub fn new(catalog: Catalog, storage: Arc<dyn KeyValueStorage>) -> Self {
        let cart = CartStore::load(storage.clone());
        Self {
            catalog: Arc::new(catalog),
            cart: Arc::new(RwLock::new(cart)),
            storage,
            pricing: PricingConfig::default(),
            query_latency: Duration::ZERO,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses the seed catalog and file storage under `config.storage_dir`.
    pub fn from_config(config: &Config) -> Self {
        let storage = Arc::new(FileStorage::new(config.storage_dir.clone()));
        Self::new(Catalog::seeded(), storage)
            .with_pricing(config.pricing)
            .with_query_latency(Duration::from_millis(config.query_latency_ms))
    }

    pub fn with_pricing(mut self, pricing: PricingConfig) -> Self {
        self.pricing = pricing;
        self
    }

    pub fn with_query_latency(mut self, latency: Duration) -> Self {
        self.query_latency = latency;
        self
    }

    /// Runs `op` against the cart on the blocking pool.
    ///
    /// The owned write guard moves into the blocking task, so mutations stay
    /// serialized while storage I/O runs off the async workers.
    async fn mutate_cart<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut CartStore) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let mut cart = self.cart.clone().write_owned().await;
        tokio::task::spawn_blocking(move || op(&mut *cart))
            .await
            .map_err(|err| StoreError::Internal(format!("cart task failed: {}", err)))?
    }

    async fn simulate_latency(&self) {
        if !self.query_latency.is_zero() {
            tokio::time::sleep(self.query_latency).await;
        }
    }
}

/// Handler for GET /api/products
pub async fn list_products_handler(
    State(state): State<AppState>,
    Query(params): Query<ProductQueryParams>,
) -> Result<Json<Vec<Product>>> {
    let filter = params.to_filter().map_err(StoreError::InvalidRequest)?;

    state.simulate_latency().await;
    Ok(Json(state.catalog.query(&filter)))
}

/// Handler for GET /api/products/:id
pub async fn get_product_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    state.simulate_latency().await;
    Ok(Json(state.catalog.get_by_id(&id)?))
}

/// Handler for GET /api/categories
pub async fn categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: state.catalog.categories(),
    })
}

/// Handler for GET /api/cart
pub async fn get_cart_handler(State(state): State<AppState>) -> Json<CartResponse> {
    let cart = state.cart.read().await;
    Json(CartResponse::from_store(&cart))
}

/// Handler for POST /api/cart/items
///
/// Resolves the product through the catalog and stores a snapshot of it.
pub async fn add_item_handler(
    State(state): State<AppState>,
    Json(req): Json<AddItemRequest>,
) -> Result<Json<CartResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(StoreError::InvalidRequest(error_msg));
    }

    let product = state.catalog.get_by_id(req.product_id.as_str())?;
    let item = CartItem {
        product,
        quantity: req.quantity(),
        color: req.color,
        size: req.size,
    };

    let response = state
        .mutate_cart(move |cart| {
            cart.add_item(item)?;
            Ok(CartResponse::from_store(cart))
        })
        .await?;
    debug!("Added product {} to cart", req.product_id);

    Ok(Json(response))
}

/// Handler for PATCH /api/cart/items/:index
pub async fn update_item_handler(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
    Json(req): Json<UpdateQuantityRequest>,
) -> Result<Json<CartResponse>> {
    let index = parse_index(&raw_index)?;
    let quantity = req.store_quantity().map_err(StoreError::InvalidRequest)?;

    let response = state
        .mutate_cart(move |cart| {
            cart.update_quantity(index, quantity)?;
            Ok(CartResponse::from_store(cart))
        })
        .await?;

    Ok(Json(response))
}

/// Handler for DELETE /api/cart/items/:index
pub async fn remove_item_handler(
    State(state): State<AppState>,
    Path(raw_index): Path<String>,
) -> Result<Json<CartResponse>> {
    let index = parse_index(&raw_index)?;

    let (removed, response) = state
        .mutate_cart(move |cart| {
            let removed = cart.remove_item(index)?;
            Ok((removed, CartResponse::from_store(cart)))
        })
        .await?;
    debug!("Removed product {} from cart", removed.product.id);

    Ok(Json(response))
}

/// Handler for DELETE /api/cart
pub async fn clear_cart_handler(State(state): State<AppState>) -> Result<Json<CartResponse>> {
    let response = state
        .mutate_cart(|cart| {
            cart.clear()?;
            Ok(CartResponse::from_store(cart))
        })
        .await?;

    Ok(Json(response))
}

/// Handler for GET /api/cart/summary
pub async fn cart_summary_handler(State(state): State<AppState>) -> Json<CheckoutSummary> {
    let cart = state.cart.read().await;
    Json(CheckoutSummary::compute(
        cart.item_count(),
        cart.subtotal(),
        &state.pricing,
    ))
}

/// Handler for GET /api/session
pub async fn session_handler(State(state): State<AppState>) -> Result<Json<Session>> {
    let storage = state.storage.clone();
    tokio::task::spawn_blocking(move || current_session(storage.as_ref()))
        .await
        .map_err(|err| StoreError::Internal(format!("session task failed: {}", err)))?
        .map(Json)
        .ok_or_else(|| StoreError::Unauthorized("No active session".to_string()))
}

/// Parses a cart index path segment.
fn parse_index(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|_| StoreError::InvalidRequest(format!("Invalid cart index '{}'", raw)))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
