//! Product Module
//!
//! Defines product records and the canonical product identifier.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// == Product Id ==
/// Canonical product identifier.
///
/// Ids arrive as JSON strings or numbers; both are normalized to the string
/// form so every comparison is a plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawProductId")]
pub struct ProductId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawProductId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl From<RawProductId> for ProductId {
    fn from(raw: RawProductId) -> Self {
        match raw {
            RawProductId::Text(s) => Self(s),
            RawProductId::Signed(n) => Self(n.to_string()),
            RawProductId::Unsigned(n) => Self(n.to_string()),
        }
    }
}

impl ProductId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// == Product ==
/// Immutable catalog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub description: Option<String>,
    /// Primary image reference
    pub image: String,
    /// Gallery; never empty once loaded, falls back to `[image]`
    pub images: Vec<String>,
    pub category: Option<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub features: Vec<String>,
    pub care: Vec<String>,
}

/// Wire shape with every optional field left optional.
#[derive(Deserialize)]
struct RawProduct {
    id: ProductId,
    name: String,
    price: Decimal,
    #[serde(default)]
    description: Option<String>,
    image: String,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    colors: Option<Vec<String>>,
    #[serde(default)]
    sizes: Option<Vec<String>>,
    #[serde(default)]
    features: Option<Vec<String>>,
    #[serde(default)]
    care: Option<Vec<String>>,
}

impl TryFrom<RawProduct> for Product {
    type Error = String;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        Self {
            id: raw.id,
            name: raw.name,
            price: raw.price,
            description: raw.description,
            image: raw.image,
            images: raw.images.unwrap_or_default(),
            category: raw.category,
            colors: raw.colors.unwrap_or_default(),
            sizes: raw.sizes.unwrap_or_default(),
            features: raw.features.unwrap_or_default(),
            care: raw.care.unwrap_or_default(),
        }
        .validated()
    }
}

impl Product {
    // == Constructor ==
    /// Creates a bare product; the gallery starts as `[image]`.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
    ) -> Self {
        let image = image.into();
        Self {
            id: id.into(),
            name: name.into(),
            price,
            description: None,
            images: vec![image.clone()],
            image,
            category: None,
            colors: Vec::new(),
            sizes: Vec::new(),
            features: Vec::new(),
            care: Vec::new(),
        }
    }

    /// Checks the record rules and fills defaults.
    ///
    /// Rejects a negative price; an empty gallery becomes `[image]`. Every
    /// product that enters a cart passes through here, the same as every
    /// product read back from storage.
    pub fn validated(mut self) -> Result<Self, String> {
        if self.price.is_sign_negative() && !self.price.is_zero() {
            return Err(format!("product {} has a negative price", self.id));
        }
        if self.images.is_empty() {
            self.images = vec![self.image.clone()];
        }
        Ok(self)
    }

    /// Sets the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if the product's category is one of `categories`.
    pub fn in_categories(&self, categories: &[String]) -> bool {
        self.category
            .as_ref()
            .is_some_and(|c| categories.iter().any(|wanted| wanted == c))
    }
}
