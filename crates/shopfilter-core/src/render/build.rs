use crate::catalog::TermKind;
use crate::config::{FilterConfig, TermListConfig};
use crate::facet::{
    encode_pairs, next_url, page_title, url_for, FacetState, NavigationIntent, SortOrder,
    CATEGORIES_PARAM, MAX_PRICE_PARAM, MIN_PRICE_PARAM, ORDERBY_PARAM, TAGS_PARAM,
};
use crate::render::{
    ActionsPayload, FilterPayload, HiddenField, OptionPayload, PricePayload, SortChoice,
    SortPayload, TermFacetPayload,
};
use crate::resolve::{FacetOption, PriceBounds};

/// Resolved inputs of one render pass.
///
/// A `None` option list means the facet was not resolved (its widget is
/// disabled); an empty one means nothing is selectable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedFacets {
    pub categories: Option<Vec<FacetOption>>,
    pub tags: Option<Vec<FacetOption>>,
    pub price: Option<PriceBounds>,
}

/// Build the payload for `state`.
///
/// `form_action` is the page URL with query and pagination stripped. Empty
/// option lists, missing price bounds and disabled widgets leave their
/// control out.
pub fn render(
    resolved: &ResolvedFacets,
    state: &FacetState,
    config: &FilterConfig,
    form_action: &str,
) -> FilterPayload {
    FilterPayload {
        categories: term_facet(
            TermKind::Category,
            resolved.categories.as_deref(),
            state,
            &config.categories,
            form_action,
        ),
        tags: term_facet(
            TermKind::Tag,
            resolved.tags.as_deref(),
            state,
            &config.tags,
            form_action,
        ),
        price: resolved
            .price
            .filter(|_| config.price.enabled)
            .map(|bounds| price_control(bounds, state, config, form_action)),
        sort: Some(sort_control(state, form_action)),
        actions: config.submit.enabled.then(|| ActionsPayload {
            title: config.submit.title.clone(),
            search_url: url_for(form_action, state),
            reset_url: form_action.to_string(),
        }),
        page_title: page_title(state),
    }
}

fn term_facet(
    kind: TermKind,
    options: Option<&[FacetOption]>,
    state: &FacetState,
    config: &TermListConfig,
    form_action: &str,
) -> Option<TermFacetPayload> {
    let options = options.filter(|o| config.enabled && !o.is_empty())?;

    let (param, toggle): (&str, fn(String) -> NavigationIntent) = match kind {
        TermKind::Category => (CATEGORIES_PARAM, |slug| NavigationIntent::ToggleCategory { slug }),
        TermKind::Tag => (TAGS_PARAM, |slug| NavigationIntent::ToggleTag { slug }),
    };

    Some(TermFacetPayload {
        param: param.to_string(),
        title: config.title_for(kind).to_string(),
        show_count: config.count,
        options: options
            .iter()
            .map(|option| OptionPayload {
                label: option.label.clone(),
                value: option.slug.clone(),
                selected: option.selected,
                count: option.product_count,
                is_parent_level: option.is_parent_level,
                toggle_url: next_url(form_action, state, &toggle(option.slug.clone())),
            })
            .collect(),
    })
}

fn price_control(
    bounds: PriceBounds,
    state: &FacetState,
    config: &FilterConfig,
    form_action: &str,
) -> PricePayload {
    let hidden_fields = encode_pairs(state)
        .into_iter()
        .filter(|(name, _)| name != MIN_PRICE_PARAM && name != MAX_PRICE_PARAM)
        .map(|(name, value)| HiddenField { name, value })
        .collect();

    PricePayload {
        title: config.price.title.clone(),
        current_min: state.price_min,
        current_max: state.price_max,
        bound_min: bounds.min,
        bound_max: bounds.max,
        currency_symbol: config.currency.symbol().to_string(),
        form_action: form_action.to_string(),
        hidden_fields,
        clear_url: next_url(form_action, state, &NavigationIntent::ClearPriceRange),
    }
}

fn sort_control(state: &FacetState, form_action: &str) -> SortPayload {
    SortPayload {
        param: ORDERBY_PARAM.to_string(),
        active: state.sort,
        choices: SortOrder::ALL
            .iter()
            .map(|&order| SortChoice {
                value: order.as_str().to_string(),
                label: order.display_name().to_string(),
                selected: order == state.sort,
                url: next_url(form_action, state, &NavigationIntent::sort(order)),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::TermId;

    fn option(slug: &str, count: u64, selected: bool) -> FacetOption {
        FacetOption {
            id: TermId::new(slug),
            slug: slug.to_string(),
            label: slug.to_uppercase(),
            product_count: count,
            selected,
            is_parent_level: true,
        }
    }

    fn resolved() -> ResolvedFacets {
        ResolvedFacets {
            categories: Some(vec![option("shoes", 3, true), option("bags", 0, false)]),
            tags: Some(vec![]),
            price: Some(PriceBounds { min: 5, max: 120 }),
        }
    }

    #[test]
    fn test_render_full_payload() {
        let state = FacetState::new()
            .with_categories(["shoes"])
            .with_price_range(Some(10.0), None)
            .with_sort(SortOrder::PriceAsc);

        let payload = render(&resolved(), &state, &FilterConfig::default(), "/shop/");

        let categories = payload.categories.as_ref().unwrap();
        assert_eq!(categories.param, "product_categories");
        assert_eq!(categories.title, "Product Categories");
        assert_eq!(categories.selected().count(), 1);
        assert_eq!(
            categories.options[1].toggle_url,
            "/shop/?product_categories=shoes,bags&min_price=10&orderby=price"
        );

        assert!(payload.tags.is_none());

        let price = payload.price.as_ref().unwrap();
        assert_eq!((price.bound_min, price.bound_max), (5, 120));
        assert_eq!(price.current_min, Some(10.0));
        assert_eq!(price.currency_symbol, "$");
        assert_eq!(
            price.hidden_fields,
            vec![
                HiddenField {
                    name: "product_categories".to_string(),
                    value: "shoes".to_string()
                },
                HiddenField {
                    name: "orderby".to_string(),
                    value: "price".to_string()
                },
            ]
        );
        assert_eq!(price.clear_url, "/shop/?product_categories=shoes&orderby=price");

        let sort = payload.sort.as_ref().unwrap();
        assert_eq!(sort.choices.len(), 7);
        assert!(sort.choices.iter().any(|c| c.selected && c.value == "price"));

        let actions = payload.actions.as_ref().unwrap();
        assert_eq!(actions.reset_url, "/shop/");
        assert_eq!(
            actions.search_url,
            "/shop/?product_categories=shoes&min_price=10&orderby=price"
        );

        assert_eq!(payload.page_title.as_deref(), Some("Shoes"));
    }

    #[test]
    fn test_missing_bounds_omit_price() {
        let resolved = ResolvedFacets {
            price: None,
            ..resolved()
        };
        let payload = render(&resolved, &FacetState::new(), &FilterConfig::default(), "/");
        assert!(payload.price.is_none());
        assert!(payload.categories.is_some());
    }

    #[test]
    fn test_disabled_widgets_are_omitted() {
        let mut config = FilterConfig::default();
        config.categories.enabled = false;
        config.price.enabled = false;
        config.submit.enabled = false;

        let payload = render(&resolved(), &FacetState::new(), &config, "/");
        assert!(payload.categories.is_none());
        assert!(payload.price.is_none());
        assert!(payload.actions.is_none());
        assert_eq!(payload.control_count(), 1);
    }

    #[test]
    fn test_payload_json_skips_absent_controls() {
        let json = serde_json::to_value(FilterPayload::empty()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }
}
