//! Filter error types.
//!
//! Malformed query parameters and empty facets are recovered where they
//! occur and never show up here. Only failures of the catalog collaborator,
//! and callers handing in an unusable URL, propagate.

use thiserror::Error;

/// Failures of the catalog/search index collaborator.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The index could not be reached or refused the query.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Snapshot data could not be decoded.
    #[error("Malformed catalog snapshot: {0}")]
    Snapshot(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Snapshot(e.to_string())
    }
}

/// Errors surfaced by a filter request.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Catalog collaborator failure. Fatal for the request.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The current page URL cannot serve as a navigation base.
    #[error("Invalid base URL: {0:?}")]
    InvalidBaseUrl(String),
}
