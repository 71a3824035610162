//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;

use shopfilter_core::catalog::PricePoint;
use shopfilter_core::prelude::*;
use shopfilter_observability::{RequestId, StructuredLogger};

pub fn usd(cents: i64) -> Money {
    Money::new(cents, Currency::USD)
}

/// A small store: shoes (with boots below), bags, hats; summer and winter tags.
pub fn store() -> MemoryCatalog {
    MemoryCatalog::new(CatalogSnapshot {
        products: vec![
            Product::new("p1", "Trail Boot")
                .with_price(usd(8999))
                .in_category("boots")
                .tagged("winter"),
            Product::new("p2", "Canvas Sneaker")
                .with_variation_prices(usd(2450), usd(3900))
                .in_category("shoes")
                .tagged("summer"),
            Product::new("p3", "Beach Tote")
                .with_price(usd(4500))
                .in_category("bags")
                .tagged("summer"),
            Product::new("p4", "Wool Beanie")
                .with_price(usd(1500))
                .in_category("hats")
                .tagged("winter"),
        ],
        categories: vec![
            Term::new("c1", "shoes", "Shoes"),
            Term::new("c2", "boots", "Boots").with_parent("c1"),
            Term::new("c3", "bags", "Bags"),
            Term::new("c4", "hats", "Hats"),
        ],
        tags: vec![
            Term::new("t1", "summer", "Summer"),
            Term::new("t2", "winter", "Winter"),
        ],
    })
}

pub fn quiet_logger() -> StructuredLogger {
    let (logger, _) = StructuredLogger::new(RequestId::from_string("test")).capturing();
    logger
}

pub fn pipeline<C: CatalogIndex>(catalog: C, config: FilterConfig) -> FilterPipeline<C> {
    FilterPipeline::new(catalog, config, quiet_logger())
}

/// A catalog whose index is unreachable.
pub struct UnreachableCatalog;

impl CatalogIndex for UnreachableCatalog {
    fn matching_product_ids(
        &self,
        _state: &FacetState,
        _excluding: Option<FacetDimension>,
    ) -> Result<ProductIdSet, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    fn terms(&self, _kind: TermKind) -> Result<Vec<Term>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    fn term_counts(
        &self,
        _kind: TermKind,
        _scope: &ProductIdSet,
    ) -> Result<HashMap<TermId, u64>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }

    fn price_points(&self, _scope: &ProductIdSet) -> Result<Vec<PricePoint>, CatalogError> {
        Err(CatalogError::Unavailable("connection refused".to_string()))
    }
}
