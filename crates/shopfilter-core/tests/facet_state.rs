//! Codec and navigation behaviour through the public API.

use shopfilter_core::facet::query_of;
use shopfilter_core::prelude::*;

fn states() -> Vec<FacetState> {
    vec![
        FacetState::new(),
        FacetState::new().with_categories(["shoes"]),
        FacetState::new()
            .with_categories(["shoes", "bags"])
            .with_tags(["summer"])
            .with_sort(SortOrder::PriceAsc),
        FacetState::new()
            .with_price_range(Some(10.0), Some(99.99))
            .with_sort(SortOrder::Popularity),
        FacetState::new()
            .with_price_range(None, Some(0.5))
            .with_preserved("s", "red & blue")
            .with_preserved("filter_color", "red,blue")
            .with_preserved("query_type_color", "or"),
        FacetState::new()
            .with_tags(["men's", "50%-off"])
            .with_sort(SortOrder::Name)
            .with_preserved("post_type", "product"),
        FacetState::new()
            .with_categories(["boots"])
            .with_preserved("filter_color[]", "red")
            .with_preserved("filter_[]", "blue"),
    ]
}

fn intents() -> Vec<NavigationIntent> {
    vec![
        NavigationIntent::toggle_category("bags"),
        NavigationIntent::toggle_category("shoes"),
        NavigationIntent::toggle_tag("winter"),
        NavigationIntent::SetCategories {
            slugs: vec!["hats".to_string()],
        },
        NavigationIntent::SetTags { slugs: vec![] },
        NavigationIntent::price_range(Some(5.0), Some(25.0)),
        NavigationIntent::ClearPriceRange,
        NavigationIntent::sort(SortOrder::Date),
        NavigationIntent::sort(SortOrder::Default),
    ]
}

fn decode_url(url: &str) -> FacetState {
    decode_query_string(query_of(url))
}

#[test]
fn round_trip_preserves_state() {
    for state in states() {
        assert_eq!(decode_query_string(&encode(&state)), state, "{:?}", state);
    }
}

#[test]
fn array_style_keys_are_not_preserved() {
    let state = FacetState::new()
        .with_preserved("filter_color[]", "red")
        .with_preserved("filter_[]", "blue");
    assert!(state.preserved.is_empty());

    let decoded = decode_query_string("filter_color[]=red&filter_color[]=blue&s=hat");
    assert_eq!(decoded.preserved.get("filter_color").map(String::as_str), Some("red,blue"));
    assert_eq!(decode_query_string(&encode(&decoded)), decoded);
}

#[test]
fn distinct_states_encode_distinctly() {
    let encoded: Vec<String> = states().iter().map(encode).collect();
    for (i, a) in encoded.iter().enumerate() {
        for b in &encoded[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn navigation_keeps_untargeted_dimensions() {
    for state in states() {
        for intent in intents() {
            let next = decode_url(&next_url("/shop/", &state, &intent));
            let target = intent.target();

            if target != Some(FacetDimension::Categories) {
                assert_eq!(next.categories, state.categories, "{:?}", intent);
            }
            if target != Some(FacetDimension::Tags) {
                assert_eq!(next.tags, state.tags, "{:?}", intent);
            }
            if target != Some(FacetDimension::Price) {
                assert_eq!(next.price_min, state.price_min, "{:?}", intent);
                assert_eq!(next.price_max, state.price_max, "{:?}", intent);
            }
            if target != Some(FacetDimension::Sort) {
                assert_eq!(next.sort, state.sort, "{:?}", intent);
            }
            assert_eq!(next.preserved, state.preserved, "{:?}", intent);
        }
    }
}

#[test]
fn toggling_through_urls_never_duplicates() {
    let start = decode_query_string("product_categories=shoes");
    let on = decode_url(&next_url("/shop/", &start, &NavigationIntent::toggle_category("bags")));
    assert_eq!(on.categories.len(), 2);

    let again = on.apply(&NavigationIntent::SetCategories {
        slugs: vec!["shoes".into(), "bags".into(), "bags".into()],
    });
    assert_eq!(again.categories.len(), 2);

    let off = decode_url(&next_url("/shop/", &on, &NavigationIntent::toggle_category("bags")));
    assert_eq!(off, start);
}

#[test]
fn scenario_toggle_category_keeps_sort() {
    let state = decode_query_string("?product_categories=shoes&orderby=price");
    assert_eq!(state.categories.as_slice(), &["shoes".to_string()]);
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
fn scenario_malformed_price_is_unset() {
    let state = decode_query_string("min_price=abc&max_price=80");
    assert_eq!(state.price_min, None);
    assert_eq!(state.price_max, Some(80.0));
}

#[test]
fn reset_drops_the_query() {
    let state = decode_query_string("product_tags=summer&s=boots&orderby=rating");
    let base = form_action("https://shop.test/shop/page/4/?product_tags=summer");
    assert_eq!(
        next_url(&base, &state, &NavigationIntent::Reset),
        "https://shop.test/shop/"
    );
}

#[test]
fn page_title_from_url() {
    let state = decode_query_string("product_categories=mens-shoes,bags");
    assert_eq!(page_title(&state).as_deref(), Some("Mens Shoes and Bags"));
}
