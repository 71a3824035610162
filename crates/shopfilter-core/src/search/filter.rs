//! Product query filters.

use crate::catalog::{Product, ProductStatus, TermTree};
use crate::facet::FacetDimension;
use serde::{Deserialize, Serialize};

/// A product query filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Filter {
    /// Product is in any of these categories or their descendants (OR).
    Categories(Vec<String>),
    /// Product has any of these tags (OR).
    Tags(Vec<String>),
    /// Some price of the product lies in the range, in whole currency units.
    PriceRange { min: Option<f64>, max: Option<f64> },
    /// Case-insensitive match on name or slug.
    Text(String),
    /// Filter by product status.
    Status(ProductStatus),
}

impl Filter {
    /// Create a category filter.
    pub fn categories<'a>(slugs: impl IntoIterator<Item = &'a str>) -> Self {
        Filter::Categories(slugs.into_iter().map(str::to_string).collect())
    }

    /// Create a tag filter.
    pub fn tags<'a>(slugs: impl IntoIterator<Item = &'a str>) -> Self {
        Filter::Tags(slugs.into_iter().map(str::to_string).collect())
    }

    /// Create a price range filter.
    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        Filter::PriceRange { min, max }
    }

    /// Create a text search filter.
    pub fn text(query: impl Into<String>) -> Self {
        Filter::Text(query.into())
    }

    /// The facet dimension this filter comes from, if it is a facet at all.
    pub fn dimension(&self) -> Option<FacetDimension> {
        match self {
            Filter::Categories(_) => Some(FacetDimension::Categories),
            Filter::Tags(_) => Some(FacetDimension::Tags),
            Filter::PriceRange { .. } => Some(FacetDimension::Price),
            Filter::Text(_) | Filter::Status(_) => None,
        }
    }

    /// Evaluate against a product. `categories` resolves category nesting.
    pub fn matches(&self, product: &Product, categories: &TermTree) -> bool {
        match self {
            Filter::Categories(slugs) => product
                .categories
                .iter()
                .any(|own| slugs.iter().any(|wanted| categories.is_within(own, wanted))),
            Filter::Tags(slugs) => slugs.iter().any(|slug| product.has_tag(slug)),
            Filter::PriceRange { min, max } => product.prices().any(|price| {
                let price = price.to_decimal();
                min.map_or(true, |min| price >= min) && max.map_or(true, |max| price <= max)
            }),
            Filter::Text(query) => {
                let query = query.to_lowercase();
                product.name.to_lowercase().contains(&query)
                    || product.slug.to_lowercase().contains(&query)
            }
            Filter::Status(status) => product.status == *status,
        }
    }
}
