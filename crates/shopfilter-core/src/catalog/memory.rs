//! In-memory catalog over a JSON snapshot.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{
    CatalogIndex, PricePoint, Product, ProductIdSet, Term, TermKind, TermTree,
};
use crate::error::CatalogError;
use crate::facet::{FacetDimension, FacetState};
use crate::ids::{ProductId, TermId};
use crate::search::ProductQuery;

/// Products and taxonomies exported from the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Term>,
    #[serde(default)]
    pub tags: Vec<Term>,
}

/// A [`CatalogIndex`] evaluated in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    snapshot: CatalogSnapshot,
    category_tree: TermTree,
    by_id: HashMap<ProductId, usize>,
}

impl MemoryCatalog {
    pub fn new(snapshot: CatalogSnapshot) -> Self {
        let category_tree = TermTree::new(&snapshot.categories);
        let by_id = snapshot
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Self {
            snapshot,
            category_tree,
            by_id,
        }
    }

    /// Load a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let snapshot: CatalogSnapshot = serde_json::from_str(json)?;
        Ok(Self::new(snapshot))
    }

    pub fn snapshot(&self) -> &CatalogSnapshot {
        &self.snapshot
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.snapshot.products[i])
    }

    /// Products matching `query`, in its sort order.
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .snapshot
            .products
            .iter()
            .filter(|p| {
                query
                    .filters
                    .iter()
                    .all(|f| f.matches(p, &self.category_tree))
            })
            .collect();
        products.sort_by(|a, b| query.compare(a, b));
        products
    }

    fn in_scope<'a>(&'a self, scope: &'a ProductIdSet) -> impl Iterator<Item = &'a Product> + 'a {
        scope.iter().filter_map(|id| self.product(id))
    }
}

impl CatalogIndex for MemoryCatalog {
    fn matching_product_ids(
        &self,
        state: &FacetState,
        excluding: Option<FacetDimension>,
    ) -> Result<ProductIdSet, CatalogError> {
        let mut query = ProductQuery::from_state(state);
        if let Some(dimension) = excluding {
            query = query.excluding(dimension);
        }
        Ok(self.search(&query).into_iter().map(|p| p.id.clone()).collect())
    }

    fn terms(&self, kind: TermKind) -> Result<Vec<Term>, CatalogError> {
        Ok(match kind {
            TermKind::Category => self.snapshot.categories.clone(),
            TermKind::Tag => self.snapshot.tags.clone(),
        })
    }

    /// Category counts include products filed under descendant categories.
    fn term_counts(
        &self,
        kind: TermKind,
        scope: &ProductIdSet,
    ) -> Result<HashMap<TermId, u64>, CatalogError> {
        let mut counts = HashMap::new();

        let terms = match kind {
            TermKind::Category => &self.snapshot.categories,
            TermKind::Tag => &self.snapshot.tags,
        };

        for term in terms {
            let count = self
                .in_scope(scope)
                .filter(|p| match kind {
                    TermKind::Category => p
                        .categories
                        .iter()
                        .any(|own| self.category_tree.is_within(own, &term.slug)),
                    TermKind::Tag => p.has_tag(&term.slug),
                })
                .count() as u64;

            if count > 0 {
                counts.insert(term.id.clone(), count);
            }
        }

        Ok(counts)
    }

    fn price_points(&self, scope: &ProductIdSet) -> Result<Vec<PricePoint>, CatalogError> {
        Ok(self
            .in_scope(scope)
            .map(|p| PricePoint {
                listed: p.price,
                min_variation: p.min_variation_price,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductStatus;
    use crate::facet::SortOrder;
    use crate::money::{Currency, Money};

    fn usd(cents: i64) -> Money {
        Money::new(cents, Currency::USD)
    }

    fn catalog() -> MemoryCatalog {
        let mut draft = Product::new("p4", "Hidden").with_price(usd(100)).in_category("shoes");
        draft.status = ProductStatus::Draft;

        MemoryCatalog::new(CatalogSnapshot {
            products: vec![
                Product::new("p1", "Boot")
                    .with_price(usd(8000))
                    .in_category("boots")
                    .tagged("winter"),
                Product::new("p2", "Sandal")
                    .with_price(usd(3000))
                    .in_category("shoes")
                    .tagged("summer"),
                Product::new("p3", "Tote")
                    .with_price(usd(4500))
                    .in_category("bags")
                    .tagged("summer"),
                draft,
            ],
            categories: vec![
                Term::new("c1", "shoes", "Shoes"),
                Term::new("c2", "boots", "Boots").with_parent("c1"),
                Term::new("c3", "bags", "Bags"),
            ],
            tags: vec![
                Term::new("t1", "summer", "Summer"),
                Term::new("t2", "winter", "Winter"),
            ],
        })
    }

    fn ids(set: &ProductIdSet) -> Vec<&str> {
        set.iter().map(ProductId::as_str).collect()
    }

    #[test]
    fn test_matching_ids_skip_drafts() {
        let catalog = catalog();
        let all = catalog
            .matching_product_ids(&FacetState::new(), None)
            .unwrap();
        assert_eq!(ids(&all), vec!["p1", "p2", "p3"]);
    }

    #[test]
    fn test_matching_ids_with_exclusion() {
        let catalog = catalog();
        let state = FacetState::new()
            .with_categories(["shoes"])
            .with_tags(["summer"]);

        let both = catalog.matching_product_ids(&state, None).unwrap();
        assert_eq!(ids(&both), vec!["p2"]);

        let without_categories = catalog
            .matching_product_ids(&state, Some(FacetDimension::Categories))
            .unwrap();
        assert_eq!(ids(&without_categories), vec!["p2", "p3"]);
    }

    #[test]
    fn test_category_counts_roll_up() {
        let catalog = catalog();
        let scope = catalog
            .matching_product_ids(&FacetState::new(), None)
            .unwrap();
        let counts = catalog.term_counts(TermKind::Category, &scope).unwrap();

        assert_eq!(counts[&TermId::new("c1")], 2);
        assert_eq!(counts[&TermId::new("c2")], 1);
        assert_eq!(counts[&TermId::new("c3")], 1);
    }

    #[test]
    fn test_zero_counts_are_absent() {
        let catalog = catalog();
        let state = FacetState::new().with_tags(["winter"]);
        let scope = catalog.matching_product_ids(&state, None).unwrap();
        let counts = catalog.term_counts(TermKind::Tag, &scope).unwrap();
        assert!(!counts.contains_key(&TermId::new("t1")));
        assert_eq!(counts[&TermId::new("t2")], 1);
    }

    #[test]
    fn test_search_sorted() {
        let catalog = catalog();
        let query = ProductQuery::new().with_sort(SortOrder::PriceAsc);
        let names: Vec<&str> = catalog
            .search(&query)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Hidden", "Sandal", "Tote", "Boot"]);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = MemoryCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Snapshot(_)));
    }

    #[test]
    fn test_price_points() {
        let catalog = catalog();
        let scope: ProductIdSet = [ProductId::new("p2"), ProductId::new("missing")]
            .into_iter()
            .collect();
        let points = catalog.price_points(&scope).unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].listed, Some(usd(3000)));
    }
}
