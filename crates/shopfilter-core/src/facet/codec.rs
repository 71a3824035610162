//! Query string codec for facet state.
//!
//! Decoding is permissive: unknown keys are ignored, and a malformed price
//! or sort value is reported and then treated as unset. Encoding is
//! canonical: `product_categories`, `product_tags`, `min_price`,
//! `max_price`, `orderby`, then pass-through parameters by key. Unset
//! fields are never written.

use std::collections::HashMap;

use url::form_urlencoded;

use super::state::{is_preserved_param, is_valid_price, FacetState, SlugSet};
use super::SortOrder;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

pub const CATEGORIES_PARAM: &str = "product_categories";
pub const TAGS_PARAM: &str = "product_tags";
pub const MIN_PRICE_PARAM: &str = "min_price";
pub const MAX_PRICE_PARAM: &str = "max_price";
pub const ORDERBY_PARAM: &str = "orderby";

/// Why a parameter was ignored while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Price bound that is not a finite non-negative number.
    MalformedPrice,
    /// `orderby` value outside the known sort keys.
    UnknownSort,
}

/// A parameter that decoding dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedParam {
    pub key: String,
    pub value: String,
    pub reason: RejectReason,
}

/// Decoded state plus whatever had to be dropped to produce it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub state: FacetState,
    pub rejected: Vec<RejectedParam>,
}

/// Parse a raw query string (with or without the leading `?`).
///
/// Array-style keys from checkbox forms (`product_categories[]=a&product_categories[]=b`)
/// are folded into one comma-separated value. A plain key repeated takes its
/// last value, and always replaces the array-style values for the same name
/// wherever it appears in the query.
pub fn parse_query_string(qs: &str) -> QueryParams {
    let qs = qs.strip_prefix('?').unwrap_or(qs);
    let mut arrays = QueryParams::new();
    let mut plain = QueryParams::new();

    for (key, value) in form_urlencoded::parse(qs.as_bytes()) {
        match key.strip_suffix("[]") {
            Some(base) => {
                let entry = arrays.entry(base.to_string()).or_default();
                if !entry.is_empty() {
                    entry.push(',');
                }
                entry.push_str(&value);
            }
            None => {
                plain.insert(key.into_owned(), value.into_owned());
            }
        }
    }

    arrays.extend(plain);
    arrays
}

/// Decode facet state from request parameters.
pub fn decode(params: &QueryParams) -> FacetState {
    decode_reported(params).state
}

/// Decode a raw query string.
pub fn decode_query_string(qs: &str) -> FacetState {
    decode(&parse_query_string(qs))
}

/// Decode facet state, reporting every parameter that was dropped.
pub fn decode_reported(params: &QueryParams) -> Decoded {
    let mut decoded = Decoded::default();
    let state = &mut decoded.state;

    if let Some(list) = params.get(CATEGORIES_PARAM) {
        state.categories = SlugSet::parse(list);
    }

    if let Some(list) = params.get(TAGS_PARAM) {
        state.tags = SlugSet::parse(list);
    }

    for (key, slot) in [
        (MIN_PRICE_PARAM, &mut state.price_min),
        (MAX_PRICE_PARAM, &mut state.price_max),
    ] {
        let Some(raw) = params.get(key) else { continue };
        match parse_price(raw) {
            Ok(price) => *slot = price,
            Err(()) => decoded.rejected.push(RejectedParam {
                key: key.to_string(),
                value: raw.clone(),
                reason: RejectReason::MalformedPrice,
            }),
        }
    }

    if let Some(raw) = params.get(ORDERBY_PARAM) {
        if !raw.trim().is_empty() {
            match SortOrder::from_wire(raw) {
                Some(sort) => state.sort = sort,
                None => decoded.rejected.push(RejectedParam {
                    key: ORDERBY_PARAM.to_string(),
                    value: raw.clone(),
                    reason: RejectReason::UnknownSort,
                }),
            }
        }
    }

    for (key, value) in params {
        if is_preserved_param(key) && !value.is_empty() {
            state.preserved.insert(key.clone(), value.clone());
        }
    }

    // Rejections are reported in canonical key order.
    decoded.rejected.sort_by(|a, b| param_rank(&a.key).cmp(&param_rank(&b.key)));
    decoded
}

fn param_rank(key: &str) -> usize {
    [MIN_PRICE_PARAM, MAX_PRICE_PARAM, ORDERBY_PARAM]
        .iter()
        .position(|k| *k == key)
        .unwrap_or(usize::MAX)
}

/// `Ok(None)` for a blank value, `Err` for anything that is not a usable price.
fn parse_price(raw: &str) -> Result<Option<f64>, ()> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(value) if is_valid_price(value) => Ok(Some(value)),
        _ => Err(()),
    }
}

/// Write a price the shortest way that parses back to the same number.
pub fn format_price(value: f64) -> String {
    format!("{}", value)
}

/// The state as unescaped `(key, value)` pairs in canonical order.
///
/// List values are comma-joined. This is also the set of hidden form
/// fields that keeps the other facets alive across a form submit.
pub fn encode_pairs(state: &FacetState) -> Vec<(String, String)> {
    let mut pairs = Vec::new();

    if !state.categories.is_empty() {
        pairs.push((CATEGORIES_PARAM.to_string(), state.categories.join()));
    }
    if !state.tags.is_empty() {
        pairs.push((TAGS_PARAM.to_string(), state.tags.join()));
    }
    if let Some(min) = state.price_min.filter(|v| is_valid_price(*v)) {
        pairs.push((MIN_PRICE_PARAM.to_string(), format_price(min)));
    }
    if let Some(max) = state.price_max.filter(|v| is_valid_price(*v)) {
        pairs.push((MAX_PRICE_PARAM.to_string(), format_price(max)));
    }
    if !state.sort.is_default() {
        pairs.push((ORDERBY_PARAM.to_string(), state.sort.as_str().to_string()));
    }
    for (key, value) in &state.preserved {
        if is_preserved_param(key) && !value.is_empty() {
            pairs.push((key.clone(), value.clone()));
        }
    }

    pairs
}

/// Encode the state as a canonical query string (without the leading `?`).
///
/// Values are percent-encoded; the `,` between list entries is left as is.
pub fn encode(state: &FacetState) -> String {
    encode_pairs(state)
        .iter()
        .map(|(key, value)| {
            let value = if key == CATEGORIES_PARAM || key == TAGS_PARAM {
                value.split(',').map(escape).collect::<Vec<_>>().join(",")
            } else {
                escape(value)
            };
            format!("{}={}", escape(key), value)
        })
        .collect::<Vec<_>>()
        .join("&")
}

fn escape(s: &str) -> String {
    form_urlencoded::byte_serialize(s.as_bytes()).collect()
}
