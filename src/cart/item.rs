//! Cart Item Module
//!
//! A product snapshot with a quantity and the selected options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::{Product, ProductId};

// == Cart Item ==
/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product snapshot taken when the item was added
    pub product: Product,
    /// Always at least 1
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
}

/// Deduplication key: (product id, color, size).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CartItemKey<'a> {
    pub product_id: &'a ProductId,
    pub color: Option<&'a str>,
    pub size: Option<&'a str>,
}

impl CartItem {
    // == Constructor ==
    pub fn new(product: Product, quantity: u32) -> Self {
        Self {
            product,
            quantity,
            color: None,
            size: None,
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    /// Returns the deduplication key of this item.
    pub fn key(&self) -> CartItemKey<'_> {
        CartItemKey {
            product_id: &self.product.id,
            color: self.color.as_deref(),
            size: self.size.as_deref(),
        }
    }

    /// Unit price times quantity, or `None` if it overflows `Decimal`.
    pub fn line_total(&self) -> Option<Decimal> {
        self.product.price.checked_mul(Decimal::from(self.quantity))
    }
}

/// Sum of every line total, or `None` on overflow.
pub(crate) fn checked_subtotal(items: &[CartItem]) -> Option<Decimal> {
    items
        .iter()
        .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new("1", "Classic Drop Shoulder Tee", Decimal::new(2999, 2), "a.png")
    }

    #[test]
    fn test_key_distinguishes_options() {
        let black_m = CartItem::new(tee(), 1).with_color("black").with_size("m");
        let black_l = CartItem::new(tee(), 1).with_color("black").with_size("l");
        let black_m_again = CartItem::new(tee(), 5).with_color("black").with_size("m");

        assert_ne!(black_m.key(), black_l.key());
        assert_eq!(black_m.key(), black_m_again.key());
    }

    #[test]
    fn test_missing_option_differs_from_present() {
        let plain = CartItem::new(tee(), 1);
        let colored = CartItem::new(tee(), 1).with_color("black");
        assert_ne!(plain.key(), colored.key());
    }

    #[test]
    fn test_line_total() {
        let item = CartItem::new(tee(), 3);
        assert_eq!(item.line_total(), Some(Decimal::new(8997, 2)));
    }

    #[test]
    fn test_line_total_overflow_is_none() {
        let huge = Product::new("9", "Gold Tee", Decimal::MAX, "a.png");
        let item = CartItem::new(huge, 2);
        assert!(item.line_total().is_none());
        assert!(checked_subtotal(&[item]).is_none());
    }

    #[test]
    fn test_checked_subtotal() {
        let items = [CartItem::new(tee(), 2), CartItem::new(tee(), 1)];
        assert_eq!(checked_subtotal(&items), Some(Decimal::new(8997, 2)));
        assert_eq!(checked_subtotal(&[]), Some(Decimal::ZERO));
    }

    #[test]
    fn test_deserialize_numeric_product_id() {
        let json = r#"{
            "product": {"id": 1, "name": "Tee", "price": 29.99, "image": "a.png"},
            "quantity": 2,
            "color": "black"
        }"#;
        let item: CartItem = serde_json::from_str(json).unwrap();

        assert_eq!(item.product.id.as_str(), "1");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.color.as_deref(), Some("black"));
        assert!(item.size.is_none());
    }
}
