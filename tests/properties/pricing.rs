use proptest::prelude::*;
use tally::domain::entities::{Coverage, DiscountKind, FormSnapshot};
use tally::domain::services::{PanelLabels, PanelState, PricingEngine, Tariff};
use tally::Amount;

/// One event on a generated form.
#[derive(Debug, Clone)]
struct EventPlan {
    locked: usize,
    tickets: Vec<bool>,
    no_ticket: Option<bool>,
}

fn event_plan() -> impl Strategy<Value = EventPlan> {
    (
        0usize..3,
        prop::collection::vec(any::<bool>(), 0..4),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(locked, tickets, no_ticket)| EventPlan {
            locked,
            tickets,
            no_ticket,
        })
}

fn any_form() -> impl Strategy<Value = Vec<EventPlan>> {
    prop::collection::vec(event_plan(), 0..6)
}

fn tariff() -> impl Strategy<Value = Tariff> {
    (0u64..10_000, 0u64..10_000).prop_map(|(ticket, no_ticket)| Tariff {
        ticket: Amount::from_cents(ticket),
        no_ticket: Amount::from_cents(no_ticket),
    })
}

fn snapshot(events: &[EventPlan]) -> FormSnapshot {
    let mut form = FormSnapshot::new();
    for (i, event) in events.iter().enumerate() {
        let id = (i + 1).to_string();
        for _ in 0..event.locked {
            form = form.with_locked(&id);
        }
        for &checked in &event.tickets {
            form = form.with_ticket(&id, checked);
        }
        if let Some(checked) = event.no_ticket {
            form = form.with_no_ticket(&id, checked);
        }
    }
    form
}

fn participations(event: &EventPlan) -> usize {
    event.locked
        + event.tickets.iter().filter(|c| **c).count()
        + usize::from(event.no_ticket == Some(true))
}

/// Every event reaches `min` participations, topped up with locked items.
fn covered_form(min: usize) -> impl Strategy<Value = Vec<EventPlan>> {
    prop::collection::vec(event_plan(), 1..6).prop_map(move |mut events| {
        for event in events.iter_mut() {
            event.locked += min.saturating_sub(participations(event));
        }
        events
    })
}

/// Any form plus one offered event nobody picked.
fn uncovered_form() -> impl Strategy<Value = Vec<EventPlan>> {
    any_form().prop_map(|mut events| {
        events.push(EventPlan {
            locked: 0,
            tickets: vec![false],
            no_ticket: None,
        });
        events
    })
}

proptest! {
    #[test]
    fn final_price_is_total_minus_discount(events in any_form(), tariff in tariff()) {
        let quote = PricingEngine::new(tariff).quote(&snapshot(&events));
        prop_assert!(quote.discount.amount <= quote.total);
        prop_assert_eq!(quote.final_price, quote.total.saturating_sub(quote.discount.amount));
        prop_assert_eq!(quote.total, quote.selection.iter().copied().sum::<Amount>());
    }

    #[test]
    fn quoting_is_idempotent(events in any_form(), tariff in tariff()) {
        let engine = PricingEngine::new(tariff);
        let form = snapshot(&events);
        prop_assert_eq!(engine.quote(&form), engine.quote(&form));
    }

    #[test]
    fn panel_is_hidden_exactly_when_nothing_is_selected(events in any_form()) {
        let form = snapshot(&events);
        let quote = PricingEngine::default().quote(&form);
        let panel = PanelState::compose(&quote, &PanelLabels::english());
        prop_assert_eq!(panel == PanelState::Hidden, form.checked_count() == 0);
    }

    #[test]
    fn locked_items_never_add_to_the_price(events in any_form(), extra in 1usize..3) {
        let engine = PricingEngine::default();
        let before = engine.quote(&snapshot(&events));

        let mut more_locked = events.clone();
        for event in more_locked.iter_mut() {
            event.locked += extra;
        }
        let after = engine.quote(&snapshot(&more_locked));

        prop_assert_eq!(before.total, after.total);
        prop_assert_eq!(before.selection, after.selection);
        prop_assert!(after.final_price <= before.final_price);
    }

    #[test]
    fn uncovered_event_means_no_discount(events in uncovered_form()) {
        let quote = PricingEngine::default().quote(&snapshot(&events));
        prop_assert_eq!(quote.coverage, Coverage::None);
        prop_assert_eq!(quote.discount.kind, None);
        prop_assert_eq!(quote.final_price, quote.total);
    }

    #[test]
    fn double_coverage_takes_priority(events in covered_form(2)) {
        let quote = PricingEngine::default().quote(&snapshot(&events));
        prop_assert_eq!(quote.coverage, Coverage::Double);
        if quote.has_selection() {
            let seats = quote.selection.len().min(2);
            let cheapest: Amount = quote.selection[..seats].iter().copied().sum();
            prop_assert_eq!(quote.discount.kind, Some(DiscountKind::DoubleBonus));
            prop_assert_eq!(quote.discount.amount, cheapest);
        }
    }

    #[test]
    fn single_coverage_frees_the_cheapest_selection(mut events in covered_form(1)) {
        // one event booked exactly once keeps coverage below double
        events.push(EventPlan {
            locked: 1,
            tickets: Vec::new(),
            no_ticket: None,
        });

        let quote = PricingEngine::default().quote(&snapshot(&events));
        prop_assert_eq!(quote.coverage, Coverage::Single);
        if let Some(cheapest) = quote.selection.first() {
            prop_assert_eq!(quote.discount.kind, Some(DiscountKind::SeriesBonus));
            prop_assert_eq!(quote.discount.amount, *cheapest);
        }
    }
}
