//! Navigation intents: one proposed change to the facet state.

use serde::{Deserialize, Serialize};

use super::state::{FacetDimension, FacetState, SlugSet};
use super::SortOrder;

/// A change to exactly one facet dimension, or a full reset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavigationIntent {
    /// Add the category if absent, remove it if present.
    ToggleCategory { slug: String },
    /// Add the tag if absent, remove it if present.
    ToggleTag { slug: String },
    /// Replace the whole category selection.
    SetCategories { slugs: Vec<String> },
    /// Replace the whole tag selection.
    SetTags { slugs: Vec<String> },
    /// Replace both price bounds.
    SetPriceRange { min: Option<f64>, max: Option<f64> },
    ClearPriceRange,
    SetSort { sort: SortOrder },
    /// Drop every facet and pass-through parameter.
    Reset,
}

impl NavigationIntent {
    pub fn toggle_category(slug: impl Into<String>) -> Self {
        NavigationIntent::ToggleCategory { slug: slug.into() }
    }

    pub fn toggle_tag(slug: impl Into<String>) -> Self {
        NavigationIntent::ToggleTag { slug: slug.into() }
    }

    pub fn price_range(min: Option<f64>, max: Option<f64>) -> Self {
        NavigationIntent::SetPriceRange { min, max }
    }

    pub fn sort(sort: SortOrder) -> Self {
        NavigationIntent::SetSort { sort }
    }

    /// The dimension this intent changes. `None` for a reset, which changes all of them.
    pub fn target(&self) -> Option<FacetDimension> {
        match self {
            NavigationIntent::ToggleCategory { .. } | NavigationIntent::SetCategories { .. } => {
                Some(FacetDimension::Categories)
            }
            NavigationIntent::ToggleTag { .. } | NavigationIntent::SetTags { .. } => {
                Some(FacetDimension::Tags)
            }
            NavigationIntent::SetPriceRange { .. } | NavigationIntent::ClearPriceRange => {
                Some(FacetDimension::Price)
            }
            NavigationIntent::SetSort { .. } => Some(FacetDimension::Sort),
            NavigationIntent::Reset => None,
        }
    }
}

impl FacetState {
    /// Derive the state that results from applying `intent`.
    ///
    /// Only the targeted dimension differs from `self`.
    pub fn apply(&self, intent: &NavigationIntent) -> FacetState {
        let mut next = self.clone();
        match intent {
            NavigationIntent::ToggleCategory { slug } => next.categories.toggle(slug),
            NavigationIntent::ToggleTag { slug } => next.tags.toggle(slug),
            NavigationIntent::SetCategories { slugs } => {
                next.categories = SlugSet::from(slugs.clone());
            }
            NavigationIntent::SetTags { slugs } => next.tags = SlugSet::from(slugs.clone()),
            NavigationIntent::SetPriceRange { min, max } => {
                next = next.with_price_range(*min, *max);
            }
            NavigationIntent::ClearPriceRange => {
                next.price_min = None;
                next.price_max = None;
            }
            NavigationIntent::SetSort { sort } => next.sort = *sort,
            NavigationIntent::Reset => next = FacetState::default(),
        }
        next
    }
}
