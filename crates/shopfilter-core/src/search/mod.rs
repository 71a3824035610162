//! Product search.
//!
//! Turns facet state into a product query the catalog can evaluate.

mod filter;
mod query;

pub use filter::Filter;
pub use query::ProductQuery;
