//! Cart Store Module
//!
//! Single source of truth for the active cart, mirrored to durable storage
//! after every successful mutation.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::cart::item::checked_subtotal;
use crate::cart::{CartItem, KeyValueStorage, CART_KEY};
use crate::error::{Result, StoreError};

// == Cart Store ==
/// Ordered cart items plus the storage they are persisted to.
///
/// Invariant: no two items share the same (product id, color, size) key,
/// every quantity is at least 1, every price is non-negative and the
/// subtotal fits in a `Decimal`.
pub struct CartStore {
    /// Items in display order
    items: Vec<CartItem>,
    /// Durable storage backing the cart
    storage: Arc<dyn KeyValueStorage>,
}

impl std::fmt::Debug for CartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartStore")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}

impl CartStore {
    // == Constructor ==
    /// Rehydrates the cart from `storage`.
    ///
    /// A missing value yields an empty cart. An unreadable or corrupt value
    /// is logged and also yields an empty cart; it is never fatal.
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        let items = match storage.get(CART_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<CartItem>>(&raw) {
                Ok(items) => normalize(items),
                Err(err) => {
                    warn!("Failed to parse persisted cart, starting empty: {}", err);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!("Failed to read persisted cart, starting empty: {}", err);
                Vec::new()
            }
        };

        debug!("Cart hydrated with {} item(s)", items.len());
        Self { items, storage }
    }

    // == Add Item ==
    /// Adds an item, merging it into an existing line with the same key.
    ///
    /// The product snapshot is validated the same way hydration validates
    /// it, so whatever is written can always be read back.
    pub fn add_item(&mut self, mut item: CartItem) -> Result<()> {
        if item.quantity < 1 {
            return Err(StoreError::InvalidRequest(
                "Quantity must be at least 1".to_string(),
            ));
        }
        item.product = item
            .product
            .validated()
            .map_err(StoreError::InvalidRequest)?;

        let mut next = self.items.clone();
        merge_into(&mut next, item)?;
        self.commit(next)
    }

    // == Update Quantity ==
    /// Sets the quantity of the item at `index`.
    ///
    /// A quantity below 1 is ignored without error and without a write.
    pub fn update_quantity(&mut self, index: usize, quantity: u32) -> Result<()> {
        if quantity < 1 {
            debug!("Ignoring quantity update to {} at index {}", quantity, index);
            return Ok(());
        }

        let mut next = self.items.clone();
        let len = next.len();
        let item = next
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })?;
        item.quantity = quantity;
        self.commit(next)
    }

    // == Remove Item ==
    /// Removes the item at `index`, shifting later items down.
    pub fn remove_item(&mut self, index: usize) -> Result<CartItem> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let mut next = self.items.clone();
        let removed = next.remove(index);
        self.commit(next)?;
        Ok(removed)
    }

    // == Clear ==
    /// Empties the cart.
    pub fn clear(&mut self) -> Result<()> {
        self.commit(Vec::new())
    }

    // == Derived Values ==
    /// Items in display order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Sum of all quantities.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity.
    pub fn subtotal(&self) -> Decimal {
        // Committed and hydrated states are checked to fit, see `commit`.
        checked_subtotal(&self.items).unwrap_or(Decimal::MAX)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // == Persistence ==
    /// Writes `next` to storage, then makes it the current state.
    fn commit(&mut self, next: Vec<CartItem>) -> Result<()> {
        if checked_subtotal(&next).is_none() {
            return Err(StoreError::InvalidRequest(
                "Cart total exceeds the supported range".to_string(),
            ));
        }

        let serialized = serde_json::to_string(&next)
            .map_err(|err| StoreError::Internal(format!("cart serialize error: {}", err)))?;

        if let Err(err) = self.storage.set(CART_KEY, &serialized) {
            error!("Failed to persist cart: {}", err);
            return Err(err);
        }

        self.items = next;
        debug!(
            "Cart persisted: {} line(s), {} unit(s)",
            self.items.len(),
            self.item_count()
        );
        Ok(())
    }
}

/// Adds `item` to `items`, incrementing an existing line with the same key.
///
/// Fails without touching `items` if the merged quantity overflows.
fn merge_into(items: &mut Vec<CartItem>, item: CartItem) -> Result<()> {
    match items.iter_mut().find(|existing| existing.key() == item.key()) {
        Some(existing) => {
            existing.quantity = existing
                .quantity
                .checked_add(item.quantity)
                .ok_or_else(|| {
                    StoreError::InvalidRequest(format!(
                        "Quantity for product {} exceeds {}",
                        item.product.id,
                        u32::MAX
                    ))
                })?;
        }
        None => items.push(item),
    }
    Ok(())
}

/// Re-establishes the store invariants on hydrated data.
///
/// Lines that would overflow a quantity or the subtotal are dropped.
fn normalize(raw: Vec<CartItem>) -> Vec<CartItem> {
    let raw_len = raw.len();
    let mut items: Vec<CartItem> = Vec::with_capacity(raw_len);
    for item in raw.into_iter().filter(|i| i.quantity >= 1) {
        let mut candidate = items.clone();
        if let Err(err) = merge_into(&mut candidate, item) {
            warn!("Dropping persisted cart line: {}", err);
            continue;
        }
        if checked_subtotal(&candidate).is_none() {
            warn!("Dropping persisted cart line: subtotal overflow");
            continue;
        }
        items = candidate;
    }
    if items.len() != raw_len {
        warn!(
            "Persisted cart had {} invalid or duplicate line(s)",
            raw_len - items.len()
        );
    }
    items
}
