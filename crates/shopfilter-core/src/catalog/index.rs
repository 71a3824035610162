//! The catalog collaborator interface.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::catalog::{Term, TermKind};
use crate::error::CatalogError;
use crate::facet::{FacetDimension, FacetState};
use crate::ids::{ProductId, TermId};
use crate::money::Money;

/// A set of product identifiers, as returned by the catalog.
pub type ProductIdSet = BTreeSet<ProductId>;

/// The prices one product contributes to the price bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Listed price.
    pub listed: Option<Money>,
    /// Lowest variation price, for variable products.
    pub min_variation: Option<Money>,
}

/// Read-only catalog and search index.
///
/// Calls block and return complete results. The index is treated as
/// consistent at call time.
pub trait CatalogIndex {
    /// Visible products matching every active facet except `excluding`.
    fn matching_product_ids(
        &self,
        state: &FacetState,
        excluding: Option<FacetDimension>,
    ) -> Result<ProductIdSet, CatalogError>;

    /// Every term of a taxonomy.
    fn terms(&self, kind: TermKind) -> Result<Vec<Term>, CatalogError>;

    /// Per-term product counts within `scope`. Terms with no product are absent.
    fn term_counts(
        &self,
        kind: TermKind,
        scope: &ProductIdSet,
    ) -> Result<HashMap<TermId, u64>, CatalogError>;

    /// Price points of the products in `scope`.
    fn price_points(&self, scope: &ProductIdSet) -> Result<Vec<PricePoint>, CatalogError>;
}

impl<T: CatalogIndex + ?Sized> CatalogIndex for &T {
    fn matching_product_ids(
        &self,
        state: &FacetState,
        excluding: Option<FacetDimension>,
    ) -> Result<ProductIdSet, CatalogError> {
        (**self).matching_product_ids(state, excluding)
    }

    fn terms(&self, kind: TermKind) -> Result<Vec<Term>, CatalogError> {
        (**self).terms(kind)
    }

    fn term_counts(
        &self,
        kind: TermKind,
        scope: &ProductIdSet,
    ) -> Result<HashMap<TermId, u64>, CatalogError> {
        (**self).term_counts(kind, scope)
    }

    fn price_points(&self, scope: &ProductIdSet) -> Result<Vec<PricePoint>, CatalogError> {
        (**self).price_points(scope)
    }
}
