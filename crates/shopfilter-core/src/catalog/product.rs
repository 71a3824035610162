//! Product types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Product status in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    /// Product is in draft mode, not visible to customers.
    Draft,
    /// Product is published and visible.
    #[default]
    Active,
    /// Product is archived, not visible but data preserved.
    Archived,
}

/// Product type classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    /// Simple product with one listed price.
    #[default]
    Simple,
    /// Product with variations, each priced separately.
    Variable,
}

/// A product as the filter sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// URL-friendly slug.
    #[serde(default)]
    pub slug: String,
    /// Product visibility status.
    #[serde(default)]
    pub status: ProductStatus,
    /// Type of product.
    #[serde(default)]
    pub product_type: ProductType,
    /// Listed price. Variable products list their highest variation price here.
    #[serde(default)]
    pub price: Option<Money>,
    /// Lowest variation price of a variable product.
    #[serde(default)]
    pub min_variation_price: Option<Money>,
    /// Category slugs this product is assigned to.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Tag slugs.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Manual sort position.
    #[serde(default)]
    pub menu_order: i32,
    /// Units sold, for popularity ordering.
    #[serde(default)]
    pub sales_count: i64,
    /// Average review rating (0-5).
    #[serde(default)]
    pub average_rating: f64,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}

impl Product {
    /// Create a new simple, unpriced product.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: String::new(),
            status: ProductStatus::Active,
            product_type: ProductType::Simple,
            price: None,
            min_variation_price: None,
            categories: Vec::new(),
            tags: Vec::new(),
            menu_order: 0,
            sales_count: 0,
            average_rating: 0.0,
            created_at: 0,
        }
    }

    /// Builder: set the listed price.
    pub fn with_price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Builder: turn into a variable product with the given variation price span.
    pub fn with_variation_prices(mut self, min: Money, max: Money) -> Self {
        self.product_type = ProductType::Variable;
        self.min_variation_price = Some(min);
        self.price = Some(max);
        self
    }

    /// Add a category to this product.
    pub fn add_category(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if !self.categories.contains(&slug) {
            self.categories.push(slug);
        }
    }

    /// Add a tag to this product.
    pub fn add_tag(&mut self, slug: impl Into<String>) {
        let slug = slug.into();
        if !self.tags.contains(&slug) {
            self.tags.push(slug);
        }
    }

    /// Builder form of [`Product::add_category`].
    pub fn in_category(mut self, slug: impl Into<String>) -> Self {
        self.add_category(slug);
        self
    }

    /// Builder form of [`Product::add_tag`].
    pub fn tagged(mut self, slug: impl Into<String>) -> Self {
        self.add_tag(slug);
        self
    }

    pub fn has_tag(&self, slug: &str) -> bool {
        self.tags.iter().any(|t| t == slug)
    }

    /// Every price this product can be bought at, lowest first.
    pub fn prices(&self) -> impl Iterator<Item = Money> + '_ {
        self.min_variation_price.iter().chain(self.price.iter()).copied()
    }

    /// The lowest price this product can be bought at.
    pub fn lowest_price(&self) -> Option<Money> {
        self.prices().min_by(|a, b| a.cmp_amount(b))
    }
}
