#![no_main]

use libfuzzer_sys::fuzz_target;
use tally::domain::entities::FormConventions;
use tally::{FormDocument, PanelLabels, PanelState, PricingEngine, Tariff};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(form) = toml::from_str::<FormDocument>(content) else {
        return;
    };

    let snapshot = form.snapshot(&FormConventions::default());
    let quote = PricingEngine::new(Tariff::default()).quote(&snapshot);
    assert!(quote.discount.amount <= quote.total);
    assert_eq!(quote.final_price, quote.total.saturating_sub(quote.discount.amount));

    let panel = PanelState::compose(&quote, &PanelLabels::default());
    assert_eq!(panel.is_visible(), quote.has_selection());
});
