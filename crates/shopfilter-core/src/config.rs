//! Widget configuration.
//!
//! The widget host decides where and whether each filter renders. Every
//! field has the default the stock widgets ship with, so an empty table
//! (or no table at all) yields the stock sidebar.

use serde::{Deserialize, Serialize};

use crate::catalog::TermKind;
use crate::money::Currency;

/// How a term list is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TermOrder {
    /// Alphabetical by name, case-insensitive.
    #[default]
    Name,
    /// The store's manual term order.
    Order,
}

/// Settings of a category or tag list widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermListConfig {
    pub enabled: bool,
    /// Widget title. Unset means the stock title for the taxonomy.
    pub title: Option<String>,
    pub orderby: TermOrder,
    /// Show product counts next to each option.
    pub count: bool,
    /// Flag root terms as parent level. Unset means on for categories, off for tags.
    pub hierarchical: Option<bool>,
    /// List top-level terms only.
    pub show_children_only: bool,
    /// Drop options with no matching product.
    pub hide_empty: bool,
    /// Include list of term slugs or IDs. Empty means every term.
    pub only: Vec<String>,
}

impl Default for TermListConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: None,
            orderby: TermOrder::Name,
            count: false,
            hierarchical: None,
            show_children_only: false,
            hide_empty: false,
            only: Vec::new(),
        }
    }
}

impl TermListConfig {
    pub fn title_for(&self, kind: TermKind) -> &str {
        match (&self.title, kind) {
            (Some(title), _) => title,
            (None, TermKind::Category) => "Product Categories",
            (None, TermKind::Tag) => "Product Tags",
        }
    }

    pub fn is_hierarchical(&self, kind: TermKind) -> bool {
        self.hierarchical.unwrap_or(kind == TermKind::Category)
    }

    /// Whether the include list admits a term.
    pub fn admits(&self, id: &str, slug: &str) -> bool {
        self.only.is_empty() || self.only.iter().any(|o| o.trim() == id || o.trim() == slug)
    }
}

/// Settings of the price slider widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceFilterConfig {
    pub enabled: bool,
    pub title: String,
}

impl Default for PriceFilterConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: "Filter by price".to_string(),
        }
    }
}

/// Settings of the search and reset buttons widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    pub enabled: bool,
    pub title: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            title: String::new(),
        }
    }
}

/// The whole filter sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub categories: TermListConfig,
    pub tags: TermListConfig,
    pub price: PriceFilterConfig,
    pub submit: SubmitConfig,
    /// Store currency, shown on the price control.
    pub currency: Currency,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_defaults() {
        let config = FilterConfig::default();
        assert_eq!(config.categories.title_for(TermKind::Category), "Product Categories");
        assert_eq!(config.tags.title_for(TermKind::Tag), "Product Tags");
        assert!(config.categories.is_hierarchical(TermKind::Category));
        assert!(!config.tags.is_hierarchical(TermKind::Tag));
        assert_eq!(config.price.title, "Filter by price");
        assert!(config.submit.title.is_empty());
        assert_eq!(config.currency, Currency::USD);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: FilterConfig = serde_json::from_str(
            r#"{"categories":{"orderby":"order","hide_empty":true},"currency":"EUR"}"#,
        )
        .unwrap();
        assert_eq!(config.categories.orderby, TermOrder::Order);
        assert!(config.categories.hide_empty);
        assert!(config.categories.enabled);
        assert!(config.tags.enabled);
        assert_eq!(config.currency, Currency::EUR);
    }

    #[test]
    fn test_include_list() {
        let config = TermListConfig {
            only: vec!["shoes".to_string(), " 12 ".to_string()],
            ..TermListConfig::default()
        };
        assert!(config.admits("3", "shoes"));
        assert!(config.admits("12", "bags"));
        assert!(!config.admits("4", "hats"));
        assert!(TermListConfig::default().admits("4", "hats"));
    }
}
