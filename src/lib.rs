//! Tee Storefront - catalog queries and a durable shopping cart
//!
//! Serves a static product catalog with filtered queries and a cart that is
//! persisted to key-value storage after every change.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, StoreError};
