//! Listing titles for category selections.

use super::state::FacetState;

/// Listing title derived from the selected categories.
///
/// `mens-shoes,bags` becomes `Mens Shoes and Bags`. `None` when no category is selected.
pub fn page_title(state: &FacetState) -> Option<String> {
    if state.categories.is_empty() {
        return None;
    }

    let names: Vec<String> = state.categories.iter().map(humanize_slug).collect();
    Some(names.join(" and "))
}

fn humanize_slug(slug: &str) -> String {
    slug.split(['-', ' '])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
