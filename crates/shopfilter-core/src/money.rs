//! Catalog prices.
//!
//! Prices are held in the smallest unit of their currency, so the whole-unit
//! floor and ceiling used for price slider bounds are exact.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Store currency, written by ISO code in snapshots and config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    JPY,
    CAD,
    AUD,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
        }
    }

    /// Symbol shown next to the price slider.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::JPY => "\u{00a5}",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
        }
    }

    /// Minor units in one whole unit (100 cents, or 1 for yen).
    pub fn minor_per_unit(&self) -> i64 {
        match self {
            Currency::JPY => 1,
            _ => 100,
        }
    }
}

/// A price in minor units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., cents).
    pub amount_cents: i64,
    #[serde(default)]
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// The amount in whole units, as a query string price would carry it.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / self.currency.minor_per_unit() as f64
    }

    /// Largest whole unit not above this amount.
    pub fn floor_units(&self) -> i64 {
        self.amount_cents.div_euclid(self.currency.minor_per_unit())
    }

    /// Smallest whole unit not below this amount.
    pub fn ceil_units(&self) -> i64 {
        let per_unit = self.currency.minor_per_unit();
        let whole = self.amount_cents.div_euclid(per_unit);
        if self.amount_cents.rem_euclid(per_unit) == 0 {
            whole
        } else {
            whole + 1
        }
    }

    /// Compare amounts. A catalog is priced in one store currency.
    pub fn cmp_amount(&self, other: &Money) -> Ordering {
        self.amount_cents.cmp(&other.amount_cents)
    }
}
