//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming query strings and request bodies.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::catalog::{ProductFilter, ProductId};

/// Query string for GET /api/products
///
/// Every value arrives as a string: `category` is comma-separated, prices
/// are decimal strings, `featured` is enabled only by the literal `"true"`
/// and `limit` is an integer string. Empty values count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductQueryParams {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub min_price: Option<String>,
    #[serde(default)]
    pub max_price: Option<String>,
    #[serde(default)]
    pub featured: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ProductQueryParams {
    /// Converts the raw parameters into a catalog filter.
    ///
    /// Returns an error message if a numeric parameter cannot be parsed.
    pub fn to_filter(&self) -> Result<ProductFilter, String> {
        let categories = self
            .category
            .as_deref()
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Ok(ProductFilter {
            categories,
            min_price: parse_optional::<Decimal>("minPrice", &self.min_price)?,
            max_price: parse_optional::<Decimal>("maxPrice", &self.max_price)?,
            featured: self.featured.as_deref() == Some("true"),
            limit: parse_optional::<usize>("limit", &self.limit)?,
        })
    }
}

fn parse_optional<T: std::str::FromStr>(
    name: &str,
    raw: &Option<String>,
) -> Result<Option<T>, String> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| format!("Invalid {} value '{}'", name, value)),
    }
}

/// Request body for POST /api/cart/items
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddItemRequest {
    /// Product to add; string or number
    pub product_id: ProductId,
    /// Defaults to 1
    #[serde(default)]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
}

impl AddItemRequest {
    /// Returns the requested quantity, defaulting to 1.
    pub fn quantity(&self) -> u32 {
        self.quantity.unwrap_or(1)
    }

    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.product_id.as_str().is_empty() {
            return Some("Product id cannot be empty".to_string());
        }
        if self.quantity() < 1 {
            return Some("Quantity must be at least 1".to_string());
        }
        None
    }
}

/// Request body for PATCH /api/cart/items/:index
///
/// Signed so that zero and negative quantities reach the store, which ignores
/// them.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

impl UpdateQuantityRequest {
    /// Clamps the quantity into the store's range; anything below 1 maps to 0.
    pub fn store_quantity(&self) -> Result<u32, String> {
        u32::try_from(self.quantity.max(0))
            .map_err(|_| format!("Quantity {} is too large", self.quantity))
    }
}
