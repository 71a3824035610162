//! Decode a query string into facet state.

use anyhow::Result;
use serde_json::json;
use shopfilter_core::facet::{
    decode_reported, encode, parse_query_string, page_title, RejectReason,
};

use super::{query_part, DecodeArgs};
use crate::context::Context;
use crate::output::format_bound;

/// Run the decode command.
pub fn run(args: DecodeArgs, ctx: &Context) -> Result<()> {
    let params = parse_query_string(query_part(&args.query));
    let decoded = decode_reported(&params);
    let state = &decoded.state;

    if ctx.output.is_json() {
        let rejected: Vec<_> = decoded
            .rejected
            .iter()
            .map(|r| {
                json!({
                    "param": r.key,
                    "value": r.value,
                    "reason": reason(r.reason),
                })
            })
            .collect();
        ctx.output.json(&json!({
            "state": state,
            "canonical": encode(state),
            "title": page_title(state),
            "rejected": rejected,
        }));
        return Ok(());
    }

    ctx.output.header("Facet state");
    ctx.output.kv("categories", &list(&state.categories.join()));
    ctx.output.kv("tags", &list(&state.tags.join()));
    ctx.output.kv(
        "price",
        &format!(
            "{} .. {}",
            format_bound(state.price_min),
            format_bound(state.price_max)
        ),
    );
    ctx.output.kv(
        "orderby",
        &format!("{} ({})", state.sort.as_str(), state.sort.display_name()),
    );
    for (key, value) in &state.preserved {
        ctx.output.kv(key, value);
    }
    if let Some(title) = page_title(state) {
        ctx.output.kv("title", &title);
    }

    ctx.output.header("Canonical query");
    ctx.output.raw(&encode(state));

    if !decoded.rejected.is_empty() {
        ctx.output.header("Ignored parameters");
        for r in &decoded.rejected {
            ctx.output
                .list_item(&format!("{}={} ({})", r.key, r.value, reason(r.reason)));
        }
    }

    Ok(())
}

fn reason(reason: RejectReason) -> &'static str {
    match reason {
        RejectReason::MalformedPrice => "malformed price",
        RejectReason::UnknownSort => "unknown sort key",
    }
}

fn list(joined: &str) -> String {
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.to_string()
    }
}
