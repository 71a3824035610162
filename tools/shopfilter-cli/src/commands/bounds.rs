//! Show the price slider bounds for a request.

use anyhow::Result;
use serde_json::json;
use shopfilter_core::catalog::CatalogIndex;
use shopfilter_core::facet::{decode_query_string, query_of, FacetDimension};
use shopfilter_core::resolve::resolve_price_bounds;

use super::BoundsArgs;
use crate::context::Context;

/// Run the bounds command.
pub fn run(args: BoundsArgs, ctx: &Context) -> Result<()> {
    let url = ctx.request_url(&args.url);
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;
    let state = decode_query_string(query_of(&url));

    let scope = catalog.matching_product_ids(&state, Some(FacetDimension::Price))?;
    let bounds = resolve_price_bounds(&catalog, &scope)?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "products": scope.len(),
            "bounds": bounds,
        }));
        return Ok(());
    }

    ctx.output.kv("products in scope", &scope.len().to_string());
    match bounds {
        Some(bounds) => {
            let symbol = ctx.config.filters.currency.symbol();
            ctx.output.kv(
                "bounds",
                &format!("{}{} .. {}{}", symbol, bounds.min, symbol, bounds.max),
            );
        }
        None => ctx.output.info("No price range: the price filter is hidden"),
    }
    Ok(())
}
