//! Facet state: the selection carried in the URL, its codec, and navigation.

mod codec;
mod intent;
mod navigation;
mod sort;
mod state;
mod title;

pub use codec::{
    decode, decode_query_string, decode_reported, encode, encode_pairs, format_price,
    parse_query_string, Decoded, QueryParams, RejectReason, RejectedParam, CATEGORIES_PARAM,
    MAX_PRICE_PARAM, MIN_PRICE_PARAM, ORDERBY_PARAM, TAGS_PARAM,
};
pub use intent::NavigationIntent;
pub use navigation::{form_action, next_url, query_of, url_for};
pub use sort::SortOrder;
pub use state::{is_preserved_param, FacetDimension, FacetState, SlugSet};
pub use title::page_title;

pub(crate) use state::is_valid_price;
