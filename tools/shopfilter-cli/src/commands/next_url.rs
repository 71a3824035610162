//! Build the URL a filter change leads to.

use anyhow::{bail, Result};
use serde_json::json;
use shopfilter_core::facet::{
    decode_query_string, form_action, next_url, query_of, NavigationIntent, SortOrder,
};

use super::{IntentCommand, NextUrlArgs};
use crate::context::Context;

/// Run the next-url command.
pub fn run(args: NextUrlArgs, ctx: &Context) -> Result<()> {
    let url = ctx.request_url(&args.url);
    let intent = intent(args.intent)?;

    let state = decode_query_string(query_of(&url));
    let base = form_action(&url);
    let next = next_url(&base, &state, &intent);

    ctx.output.debug(&format!("base: {}", base));
    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "from": url,
            "intent": intent,
            "url": next,
        }));
    } else {
        ctx.output.raw(&next);
    }
    Ok(())
}

fn intent(command: IntentCommand) -> Result<NavigationIntent> {
    Ok(match command {
        IntentCommand::ToggleCategory { slug } => NavigationIntent::ToggleCategory { slug },
        IntentCommand::ToggleTag { slug } => NavigationIntent::ToggleTag { slug },
        IntentCommand::SetCategories { slugs } => NavigationIntent::SetCategories { slugs },
        IntentCommand::SetTags { slugs } => NavigationIntent::SetTags { slugs },
        IntentCommand::Price { min, max } => NavigationIntent::SetPriceRange { min, max },
        IntentCommand::ClearPrice => NavigationIntent::ClearPriceRange,
        IntentCommand::Sort { key } => match SortOrder::from_wire(&key) {
            Some(sort) => NavigationIntent::SetSort { sort },
            None => {
                let known: Vec<&str> = SortOrder::ALL.iter().map(|s| s.as_str()).collect();
                bail!("Unknown sort key '{}'. Expected one of: {}", key, known.join(", "))
            }
        },
        IntentCommand::Reset => NavigationIntent::Reset,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_is_parsed() {
        let intent = intent(IntentCommand::Sort {
            key: "price-desc".to_string(),
        })
        .unwrap();
        assert_eq!(
            intent,
            NavigationIntent::SetSort {
                sort: SortOrder::PriceDesc
            }
        );
    }

    #[test]
    fn test_unknown_sort_key_is_rejected() {
        let err = intent(IntentCommand::Sort {
            key: "cheapest".to_string(),
        })
        .unwrap_err();
        assert!(err.to_string().contains("menu_order"));
    }
}
