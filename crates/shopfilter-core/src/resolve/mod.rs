//! Facet option resolution: option lists and price bounds for one request.

mod options;
mod price;

pub use options::{
    resolve_category_options, resolve_tag_options, resolve_term_options, FacetOption,
};
pub use price::{bounds_from_points, resolve_price_bounds, PriceBounds};
