//! Cart Module
//!
//! Provides the persisted shopping cart, its storage substrate and the
//! checkout totals derived from it.

mod item;
mod storage;
mod store;
mod summary;


// Re-export public types
pub use item::{CartItem, CartItemKey};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, CART_KEY, CURRENT_USER_KEY};
pub use store::CartStore;
pub use summary::CheckoutSummary;
