//! Pricing service
//!
//! One pass over the form: locked items, then ticket inputs, then no-ticket
//! inputs. The pass builds a fresh ledger and selection list every time, so
//! quoting the same snapshot twice gives the same result.

use crate::domain::entities::{FormSnapshot, ParticipationLedger, PriceQuote, SelectionInput, SelectionKind};
use crate::domain::policies::DiscountPolicy;
use crate::domain::value_objects::Amount;

/// Unit prices for new selections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tariff {
    pub ticket: Amount,
    pub no_ticket: Amount,
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            ticket: Amount::from_units(23),
            no_ticket: Amount::from_units(27),
        }
    }
}

impl Tariff {
    pub fn price_of(&self, kind: SelectionKind) -> Amount {
        match kind {
            SelectionKind::Ticket => self.ticket,
            SelectionKind::NoTicket => self.no_ticket,
        }
    }
}

/// Computes price quotes from form snapshots.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    tariff: Tariff,
    policy: DiscountPolicy,
}

impl PricingEngine {
    pub fn new(tariff: Tariff) -> Self {
        Self {
            tariff,
            policy: DiscountPolicy,
        }
    }

    pub fn tariff(&self) -> &Tariff {
        &self.tariff
    }

    pub fn quote(&self, form: &FormSnapshot) -> PriceQuote {
        let mut ledger = ParticipationLedger::new();
        let mut selection: Vec<Amount> = Vec::new();

        for item in &form.locked {
            match &item.event_id {
                Some(id) => ledger.record(id),
                None => tracing::warn!("locked item without event id skipped"),
            }
        }

        for input in form.selections() {
            self.apply_selection(input, &mut ledger, &mut selection);
        }

        let total: Amount = selection.iter().sum();
        selection.sort();

        let coverage = self.policy.coverage(&ledger);
        let discount = self.policy.evaluate(coverage, &selection);
        let final_price = total.saturating_sub(discount.amount);

        tracing::debug!(
            events = ledger.len(),
            selected = selection.len(),
            locked = form.locked.len(),
            %total,
            discount = %discount.amount,
            %final_price,
            ?coverage,
            "recomputed price"
        );

        PriceQuote {
            total,
            selection,
            coverage,
            discount,
            final_price,
            locked_count: form.locked.len(),
            event_count: ledger.len(),
        }
    }

    fn apply_selection(
        &self,
        input: &SelectionInput,
        ledger: &mut ParticipationLedger,
        selection: &mut Vec<Amount>,
    ) {
        let Some(event_id) = &input.event_id else {
            tracing::warn!(name = %input.name, value = %input.value, "input without event id skipped");
            return;
        };

        ledger.register(event_id);
        if input.checked {
            ledger.record(event_id);
            selection.push(self.tariff.price_of(input.kind));
        }
    }
}
