//! Catalog sort order.

use serde::{Deserialize, Serialize};

/// Sort order for the product listing, carried in the `orderby` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Store-defined menu order. Never written to the URL.
    #[default]
    Default,
    /// Best selling first.
    Popularity,
    /// Highest average rating first.
    Rating,
    /// Newest first.
    Date,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Product name, A-Z.
    Name,
}

impl SortOrder {
    /// Every order, in the order a sort dropdown lists them.
    pub const ALL: [SortOrder; 7] = [
        SortOrder::Default,
        SortOrder::Popularity,
        SortOrder::Rating,
        SortOrder::Date,
        SortOrder::PriceAsc,
        SortOrder::PriceDesc,
        SortOrder::Name,
    ];

    /// The `orderby` wire value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "menu_order",
            SortOrder::Popularity => "popularity",
            SortOrder::Rating => "rating",
            SortOrder::Date => "date",
            SortOrder::PriceAsc => "price",
            SortOrder::PriceDesc => "price-desc",
            SortOrder::Name => "title",
        }
    }

    /// Parse an `orderby` wire value. Unknown keys yield `None`.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s.trim() {
            "menu_order" => Some(SortOrder::Default),
            "popularity" => Some(SortOrder::Popularity),
            "rating" => Some(SortOrder::Rating),
            "date" => Some(SortOrder::Date),
            "price" => Some(SortOrder::PriceAsc),
            "price-desc" => Some(SortOrder::PriceDesc),
            "title" => Some(SortOrder::Name),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default sorting",
            SortOrder::Popularity => "Sort by popularity",
            SortOrder::Rating => "Sort by average rating",
            SortOrder::Date => "Sort by latest",
            SortOrder::PriceAsc => "Sort by price: low to high",
            SortOrder::PriceDesc => "Sort by price: high to low",
            SortOrder::Name => "Sort by name",
        }
    }

    pub fn is_default(&self) -> bool {
        *self == SortOrder::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_parse_back() {
        for order in SortOrder::ALL {
            assert_eq!(SortOrder::from_wire(order.as_str()), Some(order));
        }
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(SortOrder::from_wire("cheapest"), None);
        assert_eq!(SortOrder::from_wire(""), None);
    }
}
