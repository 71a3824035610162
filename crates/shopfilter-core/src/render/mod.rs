//! Filter request rendering: resolved options and state in, payload out.

mod build;
mod payload;

pub use build::{render, ResolvedFacets};
pub use payload::{
    ActionsPayload, FilterPayload, HiddenField, OptionPayload, PricePayload, SortChoice,
    SortPayload, TermFacetPayload,
};
