//! Product query builder.

use std::cmp::Ordering;

use crate::catalog::{Product, ProductStatus};
use crate::facet::{FacetDimension, FacetState, SortOrder};
use crate::search::Filter;
use serde::{Deserialize, Serialize};

/// A product query: conjunction of filters plus a listing order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProductQuery {
    /// Filters to apply (AND).
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOrder,
}

impl ProductQuery {
    /// Create an empty query matching every product.
    pub fn new() -> Self {
        Self::default()
    }

    /// The storefront query for a facet state: visible products matching every active facet.
    pub fn from_state(state: &FacetState) -> Self {
        let mut query = Self::new()
            .with_filter(Filter::Status(ProductStatus::Active))
            .with_sort(state.sort);

        if !state.categories.is_empty() {
            query = query.with_filter(Filter::categories(state.categories.iter()));
        }
        if !state.tags.is_empty() {
            query = query.with_filter(Filter::tags(state.tags.iter()));
        }
        if state.has_price_range() {
            query = query.with_filter(Filter::price_range(state.price_min, state.price_max));
        }
        if let Some(text) = state.search_query().map(str::trim).filter(|q| !q.is_empty()) {
            query = query.with_filter(Filter::text(text));
        }

        query
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Drop the filters contributed by one facet dimension.
    ///
    /// This is the cross-filter scope for that facet's own option list.
    pub fn excluding(mut self, dimension: FacetDimension) -> Self {
        self.filters.retain(|f| f.dimension() != Some(dimension));
        self
    }

    /// Order two products by this query's sort, breaking ties by ID.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        compare_products(self.sort, a, b).then_with(|| a.id.cmp(&b.id))
    }
}

fn compare_products(sort: SortOrder, a: &Product, b: &Product) -> Ordering {
    match sort {
        SortOrder::Default => a
            .menu_order
            .cmp(&b.menu_order)
            .then_with(|| compare_names(a, b)),
        SortOrder::Popularity => b.sales_count.cmp(&a.sales_count),
        SortOrder::Rating => b.average_rating.total_cmp(&a.average_rating),
        SortOrder::Date => b.created_at.cmp(&a.created_at),
        SortOrder::PriceAsc => compare_prices(a, b),
        SortOrder::PriceDesc => compare_prices(b, a),
        SortOrder::Name => compare_names(a, b),
    }
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    a.name.to_lowercase().cmp(&b.name.to_lowercase())
}

// Unpriced products sort after priced ones.
fn compare_prices(a: &Product, b: &Product) -> Ordering {
    match (a.lowest_price(), b.lowest_price()) {
        (Some(a), Some(b)) => a.cmp_amount(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
