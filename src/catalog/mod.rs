//! Catalog Module
//!
//! Provides the static product catalog and its filtered queries.

mod product;
mod query;
mod seed;


// Re-export public types
pub use product::{Product, ProductId};
pub use query::{Catalog, ProductFilter};
pub use seed::seed_products;

// == Public Constants ==
/// Number of leading catalog items treated as featured.
///
/// Placeholder ranking until products carry a real curation flag.
pub const FEATURED_COUNT: usize = 4;
