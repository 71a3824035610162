//! Faceted product filtering for storefront sidebars.
//!
//! The active filters of a product listing live entirely in the URL query
//! string. This crate reads them, works out which options each filter can
//! offer against a catalog, and builds the next URL when a shopper changes
//! one filter without losing the others.
//!
//! - **Facet**: facet state, its query string codec, navigation intents and URLs
//! - **Catalog**: products, taxonomy terms, the catalog collaborator trait
//! - **Search**: the product query a facet state stands for
//! - **Resolve**: option lists and price bounds for one request
//! - **Render**: the presentation-agnostic filter payload
//!
//! # Example
//!
//! ```rust
//! use shopfilter_core::prelude::*;
//!
//! let state = decode_query_string("product_categories=shoes&orderby=price");
//! assert_eq!(state.sort, SortOrder::PriceAsc);
//!
//! let url = next_url("/shop/", &state, &NavigationIntent::toggle_category("bags"));
//! assert_eq!(url, "/shop/?product_categories=shoes,bags&orderby=price");
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod facet;
pub mod ids;
pub mod money;
pub mod pipeline;
pub mod render;
pub mod resolve;
pub mod search;

pub use error::{CatalogError, FilterError};
pub use ids::*;
pub use money::{Currency, Money};
pub use pipeline::FilterPipeline;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::{CatalogError, FilterError};
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};
    pub use crate::pipeline::FilterPipeline;

    // Facet state
    pub use crate::facet::{
        decode, decode_query_string, encode, form_action, next_url, page_title, url_for,
        FacetDimension, FacetState, NavigationIntent, QueryParams, SlugSet, SortOrder,
    };

    // Catalog
    pub use crate::catalog::{
        CatalogIndex, CatalogSnapshot, MemoryCatalog, Product, ProductIdSet, Term, TermKind,
    };

    // Configuration
    pub use crate::config::{FilterConfig, TermListConfig, TermOrder};

    // Resolution and rendering
    pub use crate::render::{render, FilterPayload, ResolvedFacets};
    pub use crate::resolve::{
        resolve_category_options, resolve_price_bounds, resolve_tag_options, FacetOption,
        PriceBounds,
    };

    // Search
    pub use crate::search::{Filter, ProductQuery};
}
