//! Facet state carried between requests in the query string.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::SortOrder;

/// A facet dimension a navigation can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FacetDimension {
    Categories,
    Tags,
    Price,
    Sort,
}

impl FacetDimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            FacetDimension::Categories => "categories",
            FacetDimension::Tags => "tags",
            FacetDimension::Price => "price",
            FacetDimension::Sort => "sort",
        }
    }
}

/// An insertion-ordered set of term slugs.
///
/// Members keep the order the shopper selected them in, so the same
/// selection made in a different order encodes to a different URL
/// (`shoes,bags` and `bags,shoes`).
///
/// Every member is non-empty, has no surrounding whitespace and contains no
/// `,` (the list separator on the wire), so any set can be written to a
/// query string and read back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SlugSet(Vec<String>);

impl SlugSet {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Normalise a candidate slug, or `None` if it cannot be a member.
    fn normalize(slug: &str) -> Option<&str> {
        let slug = slug.trim();
        if slug.is_empty() || slug.contains(',') {
            None
        } else {
            Some(slug)
        }
    }

    /// Parse a comma-separated list, trimming entries and dropping empty ones.
    pub fn parse(list: &str) -> Self {
        list.split(',').collect()
    }

    /// Add a slug. Returns `false` if it was already present or unusable.
    pub fn insert(&mut self, slug: &str) -> bool {
        match Self::normalize(slug) {
            Some(slug) if !self.contains(slug) => {
                self.0.push(slug.to_string());
                true
            }
            _ => false,
        }
    }

    /// Remove a slug. Returns `false` if it was not present.
    pub fn remove(&mut self, slug: &str) -> bool {
        let slug = slug.trim();
        let before = self.0.len();
        self.0.retain(|s| s != slug);
        self.0.len() != before
    }

    /// Remove the slug if present, add it otherwise.
    pub fn toggle(&mut self, slug: &str) {
        if !self.remove(slug) {
            self.insert(slug);
        }
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.0.iter().any(|s| s == slug)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join members with `,` as they appear on the wire (unescaped).
    pub fn join(&self) -> String {
        self.0.join(",")
    }
}

impl<'a> FromIterator<&'a str> for SlugSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = SlugSet::new();
        for slug in iter {
            set.insert(slug);
        }
        set
    }
}

impl From<Vec<String>> for SlugSet {
    fn from(slugs: Vec<String>) -> Self {
        slugs.iter().map(String::as_str).collect()
    }
}

impl From<SlugSet> for Vec<String> {
    fn from(set: SlugSet) -> Self {
        set.0
    }
}

/// Whether a query parameter is carried through navigation untouched.
///
/// Covers the free-text search, the post type the search is scoped to, and
/// layered attribute filters owned by other widgets.
pub fn is_preserved_param(key: &str) -> bool {
    // `key[]` is folded into `key` when parsed, so it can never be read back.
    if key.ends_with("[]") {
        return false;
    }
    matches!(key, "s" | "post_type")
        || key.strip_prefix("filter_").is_some_and(|a| !a.is_empty())
        || key.strip_prefix("query_type_").is_some_and(|a| !a.is_empty())
}

/// The active facets of one request.
///
/// Changes are applied by deriving a new value (see [`FacetState::apply`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacetState {
    /// Selected category slugs.
    pub categories: SlugSet,
    /// Selected tag slugs.
    pub tags: SlugSet,
    /// Lower price bound, if any.
    pub price_min: Option<f64>,
    /// Upper price bound, if any.
    pub price_max: Option<f64>,
    /// Listing sort order.
    pub sort: SortOrder,
    /// Pass-through parameters, keyed by name.
    pub preserved: BTreeMap<String, String>,
}

impl FacetState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<'a>(mut self, slugs: impl IntoIterator<Item = &'a str>) -> Self {
        self.categories = slugs.into_iter().collect();
        self
    }

    pub fn with_tags<'a>(mut self, slugs: impl IntoIterator<Item = &'a str>) -> Self {
        self.tags = slugs.into_iter().collect();
        self
    }

    /// Set the price range. Bounds that are not finite non-negative numbers are treated as unset.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.price_min = min.filter(|v| is_valid_price(*v));
        self.price_max = max.filter(|v| is_valid_price(*v));
        self
    }

    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Add a pass-through parameter. Keys that are not preserved and empty values are ignored.
    pub fn with_preserved(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        if is_preserved_param(&key) && !value.is_empty() {
            self.preserved.insert(key, value);
        }
        self
    }

    /// The free-text search query, if any.
    pub fn search_query(&self) -> Option<&str> {
        self.preserved.get("s").map(String::as_str)
    }

    pub fn has_price_range(&self) -> bool {
        self.price_min.is_some() || self.price_max.is_some()
    }

    /// Whether no facet is active and nothing is preserved.
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
            && self.tags.is_empty()
            && !self.has_price_range()
            && self.sort.is_default()
            && self.preserved.is_empty()
    }
}

pub(crate) fn is_valid_price(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
