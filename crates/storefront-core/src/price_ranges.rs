//! The fixed table of named price brackets offered by the price filter.
//!
//! Brackets are inclusive on the lower bound and exclusive on the upper bound.
//! The top bracket is open-ended (`max == f64::INFINITY`) and only checks the
//! lower bound.

use serde::Serialize;

/// A named price bracket, e.g. `"10-50"` covering `[10, 50)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub id: &'static str,
    pub label: &'static str,
    pub min: f64,
    /// Exclusive upper bound; `f64::INFINITY` for the open top bracket.
    pub max: f64,
}

impl PriceRange {
    /// Returns `true` when `price` falls inside this bracket.
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        if self.is_open_ended() {
            return price >= self.min;
        }
        price >= self.min && price < self.max
    }

    #[must_use]
    pub fn is_open_ended(&self) -> bool {
        self.max.is_infinite()
    }
}

pub const PRICE_RANGES: [PriceRange; 3] = [
    PriceRange {
        id: "10-50",
        label: "$10 – $50",
        min: 10.0,
        max: 50.0,
    },
    PriceRange {
        id: "50-100",
        label: "$50 – $100",
        min: 50.0,
        max: 100.0,
    },
    PriceRange {
        id: "100+",
        label: "$100+",
        min: 100.0,
        max: f64::INFINITY,
    },
];

/// Looks up a bracket by its identifier.
#[must_use]
pub fn find_price_range(id: &str) -> Option<&'static PriceRange> {
    PRICE_RANGES.iter().find(|range| range.id == id)
}
