//! Price quote entity
//!
//! The result of one pricing pass. Nothing here is stored; a quote is
//! recreated from the form every time.

use serde::Serialize;

use crate::domain::value_objects::Amount;

/// How thoroughly the participant covers the offered events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Coverage {
    /// No events registered, or at least one event without participation
    None,
    /// Every event has at least one participation
    Single,
    /// Every event has at least two participations
    Double,
}

/// Which bonus rule produced a discount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountKind {
    /// Two free seats for double coverage
    DoubleBonus,
    /// One free seat for single coverage
    SeriesBonus,
}

/// Discount granted on the new selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Discount {
    pub kind: Option<DiscountKind>,
    pub amount: Amount,
}

impl Discount {
    pub const NONE: Discount = Discount {
        kind: None,
        amount: Amount::ZERO,
    };

    pub fn is_active(&self) -> bool {
        !self.amount.is_zero()
    }
}

/// Aggregate outcome of one pricing pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceQuote {
    /// Sum of all new selections before discount
    pub total: Amount,
    /// Prices of new selections, sorted ascending
    pub selection: Vec<Amount>,
    pub coverage: Coverage,
    pub discount: Discount,
    pub final_price: Amount,
    /// Number of locked items on the form (including ones without an id)
    pub locked_count: usize,
    /// Number of distinct events the form offers
    pub event_count: usize,
}

impl PriceQuote {
    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selection_count(&self) -> usize {
        self.selection.len()
    }
}
