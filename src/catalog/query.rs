//! Catalog Query Module
//!
//! Read-only queries over the static product set.

use rust_decimal::Decimal;
use tracing::debug;

use crate::catalog::{seed::seed_products, Product, FEATURED_COUNT};
use crate::error::{Result, StoreError};

// == Product Filter ==
/// Filter options for [`Catalog::query`]. The default filter matches everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    /// Keep products whose category is in this set (empty = no filter)
    pub categories: Vec<String>,
    /// Inclusive lower price bound
    pub min_price: Option<Decimal>,
    /// Inclusive upper price bound
    pub max_price: Option<Decimal>,
    /// Restrict to the featured prefix
    pub featured: bool,
    /// Truncate to at most this many results, applied last
    pub limit: Option<usize>,
}

impl ProductFilter {
    /// Creates a filter that matches every product.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    pub fn min_price(mut self, price: Decimal) -> Self {
        self.min_price = Some(price);
        self
    }

    pub fn max_price(mut self, price: Decimal) -> Self {
        self.max_price = Some(price);
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true if `product` passes the category and price filters.
    pub fn matches(&self, product: &Product) -> bool {
        if !self.categories.is_empty() && !product.in_categories(&self.categories) {
            return false;
        }
        if self.min_price.is_some_and(|min| product.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| product.price > max) {
            return false;
        }
        true
    }
}

// == Catalog ==
/// The static product set, in fixed catalog order.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    // == Constructor ==
    /// Creates a catalog over the given products, keeping their order.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Creates the catalog from the built-in seed data.
    pub fn seeded() -> Self {
        Self::new(seed_products())
    }

    // == Query ==
    /// Answers a filtered query.
    ///
    /// Filters apply in the order category, min price, max price, featured,
    /// limit. Catalog order is preserved throughout.
    pub fn query(&self, filter: &ProductFilter) -> Vec<Product> {
        let mut results: Vec<Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();

        // Placeholder ranking: there is no real "featured" attribute yet.
        if filter.featured {
            results.truncate(FEATURED_COUNT);
        }

        if let Some(limit) = filter.limit {
            results.truncate(limit);
        }

        debug!(
            "Catalog query {:?} returned {} product(s)",
            filter,
            results.len()
        );
        results
    }

    // == Get By Id ==
    /// Looks up a product by id, comparing ids as strings.
    pub fn get_by_id(&self, id: &str) -> Result<Product> {
        self.products
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("Product '{}' not found", id)))
    }

    // == Categories ==
    /// Returns the distinct category labels in catalog order.
    pub fn categories(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for category in self.products.iter().filter_map(|p| p.category.as_ref()) {
            if !seen.contains(category) {
                seen.push(category.clone());
            }
        }
        seen
    }

    /// Returns every product in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::seeded()
    }
}
