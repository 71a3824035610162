//! Aggregate price bounds of the price slider.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogIndex, PricePoint, ProductIdSet};
use crate::error::CatalogError;
use crate::money::Money;

/// Whole-unit range the price slider spans. Always `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBounds {
    pub min: i64,
    pub max: i64,
}

/// Fold price points into slider bounds.
///
/// The low end is the lowest listed or minimum variation price, rounded
/// down. The high end is the highest listed price, rounded up; variation
/// prices stand in only when nothing carries a listed price. `None` when
/// nothing is priced or every price is the same.
pub fn bounds_from_points(points: &[PricePoint]) -> Option<PriceBounds> {
    let low = points
        .iter()
        .flat_map(|p| p.listed.iter().chain(p.min_variation.iter()))
        .min_by(|a, b| a.cmp_amount(b))?;

    let high = max_price(points.iter().filter_map(|p| p.listed.as_ref()))
        .or_else(|| max_price(points.iter().filter_map(|p| p.min_variation.as_ref())))?;

    if low.amount_cents == high.amount_cents {
        return None;
    }

    Some(PriceBounds {
        min: low.floor_units(),
        max: high.ceil_units(),
    })
}

fn max_price<'a>(prices: impl Iterator<Item = &'a Money>) -> Option<&'a Money> {
    prices.max_by(|a, b| a.cmp_amount(b))
}

/// Price bounds over `scope`, or `None` when the price facet should not render.
pub fn resolve_price_bounds<C: CatalogIndex>(
    catalog: &C,
    scope: &ProductIdSet,
) -> Result<Option<PriceBounds>, CatalogError> {
    if scope.is_empty() {
        return Ok(None);
    }
    Ok(bounds_from_points(&catalog.price_points(scope)?))
}
