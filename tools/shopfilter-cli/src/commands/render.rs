//! Render the filter sidebar for a request.

use anyhow::Result;
use shopfilter_core::render::{FilterPayload, TermFacetPayload};
use shopfilter_core::FilterPipeline;

use super::{RenderArgs, RenderFormat};
use crate::context::Context;
use crate::output::{checkbox, format_bound};
use crate::sections::render_sidebar;

/// Run the render command.
pub fn run(args: RenderArgs, ctx: &Context) -> Result<()> {
    let url = ctx.request_url(&args.url);
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let pipeline = FilterPipeline::new(catalog, ctx.config.filters.clone(), ctx.logger(&url));

    // A failed request shows no filters rather than a partial sidebar.
    let payload = match pipeline.render_url(&url) {
        Ok(payload) => payload,
        Err(e) => {
            ctx.output.warn(&format!("Filters omitted: {}", e));
            FilterPayload::empty()
        }
    };

    let format = if ctx.output.is_json() {
        RenderFormat::Json
    } else {
        args.format
    };

    match format {
        RenderFormat::Json => ctx.output.json(&payload),
        RenderFormat::Html => ctx.output.raw(&render_sidebar(&payload)),
        RenderFormat::Text => print_summary(&payload, ctx),
    }
    Ok(())
}

fn print_summary(payload: &FilterPayload, ctx: &Context) {
    if payload.is_empty() {
        ctx.output.info("No filters to show");
        return;
    }

    if let Some(title) = &payload.page_title {
        ctx.output.header(title);
    }

    for facet in [&payload.categories, &payload.tags].into_iter().flatten() {
        print_term_facet(facet, ctx);
    }

    if let Some(price) = &payload.price {
        ctx.output.header(&price.title);
        ctx.output.kv(
            "range",
            &format!(
                "{}{} .. {}{}",
                price.currency_symbol, price.bound_min, price.currency_symbol, price.bound_max
            ),
        );
        ctx.output.kv(
            "selected",
            &format!(
                "{} .. {}",
                format_bound(price.current_min),
                format_bound(price.current_max)
            ),
        );
        ctx.output.kv("form action", &price.form_action);
        for field in &price.hidden_fields {
            ctx.output.kv(&format!("hidden {}", field.name), &field.value);
        }
        ctx.output.kv("clear", &price.clear_url);
    }

    if let Some(sort) = &payload.sort {
        ctx.output.header("Sort");
        for choice in &sort.choices {
            ctx.output
                .list_item(&format!("{} {}", checkbox(choice.selected), choice.label));
            ctx.output.debug(&choice.url);
        }
    }

    if let Some(actions) = &payload.actions {
        ctx.output.header(if actions.title.is_empty() {
            "Actions"
        } else {
            actions.title.as_str()
        });
        ctx.output.kv("search", &actions.search_url);
        ctx.output.kv("reset", &actions.reset_url);
    }
}

fn print_term_facet(facet: &TermFacetPayload, ctx: &Context) {
    ctx.output.header(&facet.title);
    for option in &facet.options {
        let indent = if option.is_parent_level { "" } else { "  " };
        let count = if facet.show_count {
            format!(" ({})", option.count)
        } else {
            String::new()
        };
        ctx.output.list_item(&format!(
            "{}{} {}{}",
            indent,
            checkbox(option.selected),
            option.label,
            count
        ));
        ctx.output.debug(&option.toggle_url);
    }
}
