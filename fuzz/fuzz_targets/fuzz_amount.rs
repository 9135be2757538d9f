#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(amount) = tally::Amount::parse(raw) {
            // Display output parses back to the same amount while f64 is exact
            if amount.cents() >= 1 << 50 {
                return;
            }
            let shown = amount.to_string();
            assert_eq!(tally::Amount::parse(&shown).ok(), Some(amount));
        }
    }
});
