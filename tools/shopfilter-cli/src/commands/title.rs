//! Print the listing title for a query.

use anyhow::Result;
use serde_json::json;
use shopfilter_core::facet::{decode_query_string, page_title};

use super::{query_part, TitleArgs};
use crate::context::Context;

/// Run the title command.
pub fn run(args: TitleArgs, ctx: &Context) -> Result<()> {
    let state = decode_query_string(query_part(&args.query));
    let title = page_title(&state);

    if ctx.output.is_json() {
        ctx.output.json(&json!({ "title": title }));
        return Ok(());
    }

    match title {
        Some(title) => ctx.output.raw(&title),
        None => ctx.output.info("No category selected"),
    }
    Ok(())
}
