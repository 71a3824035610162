//! Server-rendered filter sidebar.

use shopfilter_core::facet::format_price;
use shopfilter_core::render::{
    ActionsPayload, FilterPayload, PricePayload, SortPayload, TermFacetPayload,
};

/// Render the whole sidebar. An empty payload renders nothing.
pub fn render_sidebar(payload: &FilterPayload) -> String {
    if payload.is_empty() {
        return String::new();
    }

    let sections: Vec<String> = [
        payload.categories.as_ref().map(render_term_facet),
        payload.tags.as_ref().map(render_term_facet),
        payload.price.as_ref().map(render_price),
        payload.sort.as_ref().map(render_sort),
        payload.actions.as_ref().map(render_actions),
    ]
    .into_iter()
    .flatten()
    .collect();

    let heading = payload
        .page_title
        .as_deref()
        .map(|t| format!("\n    <h2 class=\"filters-title\">{}</h2>", html_escape(t)))
        .unwrap_or_default();

    format!(
        r#"<aside class="filters-sidebar" data-section="filters">{heading}
    {}
</aside>"#,
        sections.join("\n    ")
    )
}

fn render_term_facet(facet: &TermFacetPayload) -> String {
    let options_html: String = facet
        .options
        .iter()
        .map(|o| {
            let checked = if o.selected { " checked" } else { "" };
            let class = if o.is_parent_level {
                "facet-option cat-parent"
            } else {
                "facet-option"
            };
            let count = if facet.show_count {
                format!(r#" <span class="count">({})</span>"#, o.count)
            } else {
                String::new()
            };
            format!(
                r#"
            <li class="{class}"><label><input type="checkbox" value="{}"{checked} data-href="{}"> <a href="{}">{}</a>{count}</label></li>"#,
                html_escape(&o.value),
                html_escape(&o.toggle_url),
                html_escape(&o.toggle_url),
                html_escape(&o.label),
            )
        })
        .collect();

    format!(
        r#"<div class="facet-group" data-facet="{}">
        <h3 class="facet-title">{}</h3>
        <ul class="facet-options">{}
        </ul>
    </div>"#,
        html_escape(&facet.param),
        html_escape(&facet.title),
        options_html
    )
}

fn render_price(price: &PricePayload) -> String {
    let value = |v: Option<f64>| v.map(format_price).unwrap_or_default();

    let hidden: String = price
        .hidden_fields
        .iter()
        .map(|f| {
            format!(
                r#"
            <input type="hidden" name="{}" value="{}">"#,
                html_escape(&f.name),
                html_escape(&f.value)
            )
        })
        .collect();

    format!(
        r#"<div class="facet-group price-filter" data-facet="price">
        <h3 class="facet-title">{title}</h3>
        <form method="get" action="{action}">
            <input type="text" name="min_price" value="{min}" data-min="{bound_min}" placeholder="Min price">
            <input type="text" name="max_price" value="{max}" data-max="{bound_max}" placeholder="Max price">
            <span class="price-label">{symbol}{bound_min} &mdash; {symbol}{bound_max}</span>
            <button type="submit" class="button">Filter</button>{hidden}
        </form>
        <a class="clear-price" href="{clear}">Clear</a>
    </div>"#,
        title = html_escape(&price.title),
        action = html_escape(&price.form_action),
        min = value(price.current_min),
        max = value(price.current_max),
        bound_min = price.bound_min,
        bound_max = price.bound_max,
        symbol = html_escape(&price.currency_symbol),
        clear = html_escape(&price.clear_url),
    )
}

fn render_sort(sort: &SortPayload) -> String {
    let options: String = sort
        .choices
        .iter()
        .map(|c| {
            let selected = if c.selected { " selected" } else { "" };
            format!(
                r#"
            <option value="{}" data-href="{}"{selected}>{}</option>"#,
                html_escape(&c.value),
                html_escape(&c.url),
                html_escape(&c.label)
            )
        })
        .collect();

    format!(
        r#"<div class="facet-group sort" data-facet="sort">
        <select name="{}" class="orderby">{}
        </select>
    </div>"#,
        html_escape(&sort.param),
        options
    )
}

fn render_actions(actions: &ActionsPayload) -> String {
    let title = if actions.title.is_empty() {
        String::new()
    } else {
        format!(r#"<h3 class="facet-title">{}</h3>"#, html_escape(&actions.title))
    };

    format!(
        r#"<div class="facet-group search-reset">{title}
        <a class="button default" href="{}">Search</a>
        <a class="button alt" href="{}">Reset</a>
    </div>"#,
        html_escape(&actions.search_url),
        html_escape(&actions.reset_url)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfilter_core::render::{HiddenField, OptionPayload};

    fn categories() -> TermFacetPayload {
        TermFacetPayload {
            param: "product_categories".to_string(),
            title: "Product Categories".to_string(),
            show_count: true,
            options: vec![OptionPayload {
                label: "Bags & Totes".to_string(),
                value: "bags".to_string(),
                selected: true,
                count: 3,
                is_parent_level: true,
                toggle_url: "/shop/?product_tags=sale&orderby=price".to_string(),
            }],
        }
    }

    #[test]
    fn test_empty_payload_renders_nothing() {
        assert_eq!(render_sidebar(&FilterPayload::empty()), "");
    }

    #[test]
    fn test_term_facet_markup() {
        let html = render_term_facet(&categories());
        assert!(html.contains("Bags &amp; Totes"));
        assert!(html.contains(" checked"));
        assert!(html.contains("cat-parent"));
        assert!(html.contains(r#"<span class="count">(3)</span>"#));
        assert!(html.contains("/shop/?product_tags=sale&amp;orderby=price"));
    }

    #[test]
    fn test_price_form_keeps_hidden_fields() {
        let html = render_price(&PricePayload {
            title: "Filter by price".to_string(),
            current_min: Some(10.0),
            current_max: None,
            bound_min: 5,
            bound_max: 120,
            currency_symbol: "$".to_string(),
            form_action: "/shop/".to_string(),
            hidden_fields: vec![HiddenField {
                name: "product_categories".to_string(),
                value: "shoes,bags".to_string(),
            }],
            clear_url: "/shop/?product_categories=shoes,bags".to_string(),
        });
        assert!(html.contains(r#"name="min_price" value="10""#));
        assert!(html.contains(r#"name="max_price" value="""#));
        assert!(html.contains(r#"<input type="hidden" name="product_categories" value="shoes,bags">"#));
        assert!(html.contains("$5 &mdash; $120"));
    }

    #[test]
    fn test_sidebar_includes_title() {
        let payload = FilterPayload {
            categories: Some(categories()),
            page_title: Some("Bags".to_string()),
            ..FilterPayload::empty()
        };
        let html = render_sidebar(&payload);
        assert!(html.starts_with("<aside"));
        assert!(html.contains(r#"<h2 class="filters-title">Bags</h2>"#));
        assert!(html.contains(r#"data-facet="product_categories""#));
    }
}
