//! Selectable options of the category and tag facets.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogIndex, ProductIdSet, Term, TermKind};
use crate::config::{TermListConfig, TermOrder};
use crate::error::CatalogError;
use crate::facet::{FacetState, SlugSet};
use crate::ids::TermId;

/// One selectable category or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetOption {
    pub id: TermId,
    pub slug: String,
    pub label: String,
    /// Matching products within the cross-filter scope.
    pub product_count: u64,
    pub selected: bool,
    /// Root of the taxonomy, when the list is hierarchical.
    pub is_parent_level: bool,
}

/// Build the option list for one taxonomy.
///
/// Terms are filtered by the include list, ordered, restricted to top-level
/// terms when `show_children_only` is set, and finally stripped of empty
/// options when `hide_empty` is set.
pub fn resolve_term_options(
    kind: TermKind,
    terms: &[Term],
    counts: &HashMap<TermId, u64>,
    selected: &SlugSet,
    config: &TermListConfig,
) -> Vec<FacetOption> {
    let mut terms: Vec<&Term> = terms
        .iter()
        .filter(|t| config.admits(t.id.as_str(), &t.slug))
        .collect();

    terms.sort_by(|a, b| compare_terms(config.orderby, a, b));

    if config.show_children_only {
        terms.retain(|t| t.is_root());
    }

    let hierarchical = config.is_hierarchical(kind);

    terms
        .into_iter()
        .map(|term| FacetOption {
            id: term.id.clone(),
            slug: term.slug.clone(),
            label: term.name.clone(),
            product_count: counts.get(&term.id).copied().unwrap_or(0),
            selected: selected.contains(&term.slug),
            is_parent_level: hierarchical && term.is_root(),
        })
        .filter(|option| !config.hide_empty || option.product_count > 0)
        .collect()
}

fn compare_terms(order: TermOrder, a: &Term, b: &Term) -> Ordering {
    let by_name = || {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.slug.cmp(&b.slug))
    };
    match order {
        TermOrder::Name => by_name(),
        TermOrder::Order => a.position.cmp(&b.position).then_with(by_name),
    }
}

/// Category options counted over `scope`.
///
/// `scope` should exclude the category facet itself so that categories
/// outside the current selection stay visible.
pub fn resolve_category_options<C: CatalogIndex>(
    catalog: &C,
    scope: &ProductIdSet,
    state: &FacetState,
    config: &TermListConfig,
) -> Result<Vec<FacetOption>, CatalogError> {
    resolve_options(catalog, TermKind::Category, scope, &state.categories, config)
}

/// Tag options counted over `scope`.
pub fn resolve_tag_options<C: CatalogIndex>(
    catalog: &C,
    scope: &ProductIdSet,
    state: &FacetState,
    config: &TermListConfig,
) -> Result<Vec<FacetOption>, CatalogError> {
    resolve_options(catalog, TermKind::Tag, scope, &state.tags, config)
}

fn resolve_options<C: CatalogIndex>(
    catalog: &C,
    kind: TermKind,
    scope: &ProductIdSet,
    selected: &SlugSet,
    config: &TermListConfig,
) -> Result<Vec<FacetOption>, CatalogError> {
    let terms = catalog.terms(kind)?;
    let counts = if scope.is_empty() {
        HashMap::new()
    } else {
        catalog.term_counts(kind, scope)?
    };
    Ok(resolve_term_options(kind, &terms, &counts, selected, config))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms() -> Vec<Term> {
        vec![
            Term::new("1", "shoes", "Shoes").with_position(2),
            Term::new("2", "boots", "boots").with_parent("1").with_position(3),
            Term::new("3", "bags", "Bags").with_position(1),
            Term::new("4", "hats", "Hats").with_position(0),
        ]
    }

    fn counts() -> HashMap<TermId, u64> {
        [("1", 4), ("2", 1), ("3", 2)]
            .into_iter()
            .map(|(id, n)| (TermId::new(id), n))
            .collect()
    }

    fn slugs(options: &[FacetOption]) -> Vec<&str> {
        options.iter().map(|o| o.slug.as_str()).collect()
    }

    #[test]
    fn test_name_order_is_case_insensitive() {
        let options = resolve_term_options(
            TermKind::Category,
            &terms(),
            &counts(),
            &SlugSet::new(),
            &TermListConfig::default(),
        );
        assert_eq!(slugs(&options), vec!["bags", "boots", "hats", "shoes"]);
    }

    #[test]
    fn test_manual_order() {
        let config = TermListConfig {
            orderby: TermOrder::Order,
            ..TermListConfig::default()
        };
        let options =
            resolve_term_options(TermKind::Category, &terms(), &counts(), &SlugSet::new(), &config);
        assert_eq!(slugs(&options), vec!["hats", "bags", "shoes", "boots"]);
    }

    #[test]
    fn test_selected_counts_and_parent_flags() {
        let options = resolve_term_options(
            TermKind::Category,
            &terms(),
            &counts(),
            &SlugSet::parse("boots"),
            &TermListConfig::default(),
        );
        let boots = options.iter().find(|o| o.slug == "boots").unwrap();
        assert!(boots.selected);
        assert!(!boots.is_parent_level);
        assert_eq!(boots.product_count, 1);

        let hats = options.iter().find(|o| o.slug == "hats").unwrap();
        assert_eq!(hats.product_count, 0);
        assert!(hats.is_parent_level);
    }

    #[test]
    fn test_tags_are_flat_by_default() {
        let options = resolve_term_options(
            TermKind::Tag,
            &terms(),
            &counts(),
            &SlugSet::new(),
            &TermListConfig::default(),
        );
        assert!(options.iter().all(|o| !o.is_parent_level));
    }

    #[test]
    fn test_hide_empty() {
        let config = TermListConfig {
            hide_empty: true,
            ..TermListConfig::default()
        };
        let options =
            resolve_term_options(TermKind::Category, &terms(), &counts(), &SlugSet::new(), &config);
        assert_eq!(slugs(&options), vec!["bags", "boots", "shoes"]);
    }

    #[test]
    fn test_show_children_only_keeps_roots() {
        let config = TermListConfig {
            show_children_only: true,
            ..TermListConfig::default()
        };
        let options =
            resolve_term_options(TermKind::Category, &terms(), &counts(), &SlugSet::new(), &config);
        assert_eq!(slugs(&options), vec!["bags", "hats", "shoes"]);
    }

    #[test]
    fn test_include_list() {
        let config = TermListConfig {
            only: vec!["shoes".to_string(), "3".to_string()],
            ..TermListConfig::default()
        };
        let options =
            resolve_term_options(TermKind::Category, &terms(), &counts(), &SlugSet::new(), &config);
        assert_eq!(slugs(&options), vec!["bags", "shoes"]);
    }
}
