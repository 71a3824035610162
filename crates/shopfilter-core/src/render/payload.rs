//! Presentation-agnostic filter payload.
//!
//! A front end turns this into markup or feeds it to a client-side widget.
//! Absent controls are `None` and skipped when serialized.

use serde::{Deserialize, Serialize};

use crate::facet::SortOrder;

/// Everything the filter sidebar shows for one request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<TermFacetPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TermFacetPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<PricePayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<SortPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<ActionsPayload>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
}

impl FilterPayload {
    /// A payload with no controls at all.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_none()
            && self.tags.is_none()
            && self.price.is_none()
            && self.sort.is_none()
            && self.actions.is_none()
    }

    /// Number of controls present.
    pub fn control_count(&self) -> usize {
        [
            self.categories.is_some(),
            self.tags.is_some(),
            self.price.is_some(),
            self.sort.is_some(),
            self.actions.is_some(),
        ]
        .iter()
        .filter(|present| **present)
        .count()
    }
}

/// A checkbox list for categories or tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermFacetPayload {
    /// Query parameter the selection is written to.
    pub param: String,
    pub title: String,
    /// Whether counts should be displayed.
    pub show_count: bool,
    pub options: Vec<OptionPayload>,
}

impl TermFacetPayload {
    pub fn selected(&self) -> impl Iterator<Item = &OptionPayload> {
        self.options.iter().filter(|o| o.selected)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionPayload {
    pub label: String,
    /// Term slug.
    pub value: String,
    pub selected: bool,
    pub count: u64,
    pub is_parent_level: bool,
    /// URL with this option toggled and every other facet kept.
    pub toggle_url: String,
}

/// The price slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePayload {
    pub title: String,
    pub current_min: Option<f64>,
    pub current_max: Option<f64>,
    pub bound_min: i64,
    pub bound_max: i64,
    pub currency_symbol: String,
    /// Where the price form submits to.
    pub form_action: String,
    /// Other active parameters the form must resubmit.
    pub hidden_fields: Vec<HiddenField>,
    /// URL with the price range removed.
    pub clear_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// The sort dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortPayload {
    pub param: String,
    pub active: SortOrder,
    pub choices: Vec<SortChoice>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortChoice {
    /// `orderby` wire value.
    pub value: String,
    pub label: String,
    pub selected: bool,
    pub url: String,
}

/// The search and reset buttons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionsPayload {
    pub title: String,
    /// The current selection, canonically encoded.
    pub search_url: String,
    /// The listing with no filters.
    pub reset_url: String,
}
