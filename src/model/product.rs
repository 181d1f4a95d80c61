//! Represents a sellable notebook in the catalog.
//!
//! # Actor Framework
//! This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
//! allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
//!
//! See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
//! - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
//! - Price validation on insert and update

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Category holding the notebooks that consume materials when sold.
pub const NOTEBOOK_CATEGORY: &str = "收纳册";

/// Type-safe identifier for Products.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub stock: u32,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Creates a new Product stamped with the current time.
    ///
    /// # Arguments
    /// * `id` - Unique identifier chosen by the caller
    /// * `name` - Product name, also the key of its consumption rule
    /// * `price` - Unit price, must be finite and non-negative
    /// * `stock` - Units on hand
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            description: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn is_notebook(&self) -> bool {
        self.category == NOTEBOOK_CATEGORY
    }
}

pub fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}

/// Partial update; `None` fields are left as they are.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<u32>,
    pub description: Option<String>,
}

/// Catalog search: case-insensitive substring on name or description, optional exact category.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub text: String,
    pub category: Option<String>,
}

impl ProductFilter {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
        }
    }

    pub fn in_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.text.to_lowercase();
        let text_hit = product.name.to_lowercase().contains(&needle)
            || product
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle));
        let category_hit = self
            .category
            .as_deref()
            .is_none_or(|c| c == product.category);
        text_hit && category_hit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn baguette() -> Product {
        Product::new("1", "法棍收纳册", NOTEBOOK_CATEGORY, 89.0, 50)
            .with_description("经典法棍造型收纳册")
    }

    #[test]
    fn test_filter_matches_name_or_description() {
        let product = baguette();
        assert!(ProductFilter::text("法棍").matches(&product));
        assert!(ProductFilter::text("经典").matches(&product));
        assert!(ProductFilter::default().matches(&product));
        assert!(!ProductFilter::text("TN").matches(&product));
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let product = Product::new("5", "TN收纳册", NOTEBOOK_CATEGORY, 75.0, 60);
        assert!(ProductFilter::text("tn").matches(&product));
    }

    #[test]
    fn test_filter_category_is_exact() {
        let product = baguette();
        assert!(ProductFilter::text("")
            .in_category(NOTEBOOK_CATEGORY)
            .matches(&product));
        assert!(!ProductFilter::text("法棍").in_category("收纳").matches(&product));
    }

    #[test]
    fn test_price_validation() {
        assert!(is_valid_price(0.0));
        assert!(is_valid_price(89.0));
        assert!(!is_valid_price(-1.0));
        assert!(!is_valid_price(f64::NAN));
        assert!(!is_valid_price(f64::INFINITY));
    }
}
