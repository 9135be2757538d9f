//! Discount Policy
//!
//! Loyalty bonuses for participants who cover the whole series of events.
//! Rules are mutually exclusive and checked in priority order:
//!
//! 1. Double coverage (every event at least twice): the two cheapest new
//!    selections are free (or the only one, if there is just one).
//! 2. Single coverage (every event at least once): the cheapest new
//!    selection is free.
//! 3. Otherwise no discount.
//!
//! Bonuses always go to the cheapest selections. Locked participations count
//! towards coverage but are never discounted, since they are already paid.

use crate::domain::entities::{Coverage, Discount, DiscountKind, ParticipationLedger};
use crate::domain::value_objects::Amount;

/// Number of free seats granted by the double bonus.
pub const DOUBLE_BONUS_SEATS: usize = 2;

/// Series bonus policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DiscountPolicy;

impl DiscountPolicy {
    /// Classify how well the ledger covers its registered events.
    pub fn coverage(&self, ledger: &ParticipationLedger) -> Coverage {
        if ledger.all_reach(2) {
            Coverage::Double
        } else if ledger.all_reach(1) {
            Coverage::Single
        } else {
            Coverage::None
        }
    }

    /// Pick the discount for a coverage level. `sorted_prices` must be the
    /// new-selection prices in ascending order.
    pub fn evaluate(&self, coverage: Coverage, sorted_prices: &[Amount]) -> Discount {
        debug_assert!(sorted_prices.windows(2).all(|w| w[0] <= w[1]));

        if sorted_prices.is_empty() {
            return Discount::NONE;
        }

        match coverage {
            Coverage::Double => {
                let seats = sorted_prices.len().min(DOUBLE_BONUS_SEATS);
                Discount {
                    kind: Some(DiscountKind::DoubleBonus),
                    amount: sorted_prices[..seats].iter().sum(),
                }
            }
            Coverage::Single => Discount {
                kind: Some(DiscountKind::SeriesBonus),
                amount: sorted_prices[0],
            },
            Coverage::None => Discount::NONE,
        }
    }
}
