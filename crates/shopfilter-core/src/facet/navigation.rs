//! Navigation URL construction.
//!
//! All functions here are pure string transforms. The base URL is expected
//! to be a form action as produced by [`form_action`]: no query string,
//! no fragment, no pagination segment.

use super::codec::encode;
use super::intent::NavigationIntent;
use super::state::FacetState;

/// Strip the query string, fragment and `/page/<n>` segment from a page URL.
///
/// A filter change always lands on the first page of results, so the
/// pagination segment must not survive into the next URL.
pub fn form_action(url: &str) -> String {
    let end = url.find(['?', '#']).unwrap_or(url.len());
    strip_pagination(url[..end].trim())
}

fn strip_pagination(path: &str) -> String {
    const SEGMENT: &str = "/page/";
    let mut out = String::with_capacity(path.len());
    let mut rest = path;

    while let Some(at) = rest.find(SEGMENT) {
        let after = &rest[at + SEGMENT.len()..];
        let digits = after.bytes().take_while(u8::is_ascii_digit).count();
        let terminated = after[digits..].is_empty() || after[digits..].starts_with('/');

        if digits > 0 && terminated {
            out.push_str(&rest[..at]);
            rest = &after[digits..];
        } else {
            out.push_str(&rest[..at + SEGMENT.len()]);
            rest = after;
        }
    }
    out.push_str(rest);

    if out.is_empty() {
        out.push('/');
    }
    out
}

/// The query string of a URL, without the `?` and fragment.
pub fn query_of(url: &str) -> &str {
    let url = url.split('#').next().unwrap_or(url);
    url.split_once('?').map_or("", |(_, query)| query)
}

/// The URL that renders `state` from `base`.
pub fn url_for(base: &str, state: &FacetState) -> String {
    let query = encode(state);
    if query.is_empty() {
        base.to_string()
    } else {
        format!("{}?{}", base, query)
    }
}

/// The URL reached by applying `intent` to `state`.
///
/// A reset yields `base` with no query string.
pub fn next_url(base: &str, state: &FacetState, intent: &NavigationIntent) -> String {
    match intent {
        NavigationIntent::Reset => base.to_string(),
        _ => url_for(base, &state.apply(intent)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::{decode_query_string, SortOrder};

    #[test]
    fn test_form_action_strips_query_and_pagination() {
        assert_eq!(
            form_action("https://shop.test/shop/page/3/?orderby=price#top"),
            "https://shop.test/shop/"
        );
        assert_eq!(
            form_action("https://shop.test/category/page/12"),
            "https://shop.test/category"
        );
        assert_eq!(form_action("/shop/?s=boots"), "/shop/");
    }

    #[test]
    fn test_form_action_keeps_lookalike_segments() {
        assert_eq!(form_action("/page/about/"), "/page/about/");
        assert_eq!(form_action("/pages/2/"), "/pages/2/");
        assert_eq!(form_action("/page/2x"), "/page/2x");
    }

    #[test]
    fn test_form_action_of_bare_query() {
        assert_eq!(form_action("?min_price=5"), "/");
    }

    #[test]
    fn test_query_of() {
        assert_eq!(query_of("/shop/?a=1&b=2#x"), "a=1&b=2");
        assert_eq!(query_of("/shop/#x?y"), "");
        assert_eq!(query_of("/shop/"), "");
    }

    #[test]
    fn test_next_url_toggles_category() {
        let state = decode_query_string("product_categories=shoes&orderby=price");
        assert_eq!(state.sort, SortOrder::PriceAsc);

        let url = next_url(
            "https://shop.test/shop/",
            &state,
            &NavigationIntent::toggle_category("bags"),
        );
        assert_eq!(
            url,
            "https://shop.test/shop/?product_categories=shoes,bags&orderby=price"
        );
    }

    #[test]
    fn test_next_url_reset() {
        let state = decode_query_string("product_tags=sale&s=boots");
        assert_eq!(
            next_url("/shop/", &state, &NavigationIntent::Reset),
            "/shop/"
        );
    }

    #[test]
    fn test_url_for_empty_state_has_no_query() {
        assert_eq!(url_for("/shop/", &FacetState::new()), "/shop/");
    }
}
