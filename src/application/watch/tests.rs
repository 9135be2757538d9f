//! Tests for the watch module

use super::event::{WatchEvent, WatchOptions};
use super::use_case::WatchUseCase;
use std::fs;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tempfile::tempdir;

use crate::domain::entities::Coverage;
use crate::domain::services::PanelState;
use crate::domain::value_objects::Amount;

const FORM: &str = r#"
[[locked]]
event_id = "1"

[[inputs]]
name = "group_1"
value = "t-1"
checked = true
"#;

// === WatchEvent tests ===

#[test]
fn test_watch_event_to_json_started() {
    let event = WatchEvent::WatchStarted {
        form: "forms/alice.toml".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"watch_started\""));
    assert!(json.contains("\"command\":\"watch\""));
    assert!(json.contains("\"form\":\"forms/alice.toml\""));
}

#[test]
fn test_watch_event_to_json_recomputed() {
    let event = WatchEvent::Recomputed {
        panel: PanelState::Hidden,
        total: Amount::from_units(46),
        discount: Amount::from_units(23),
        final_price: Amount::from_cents(2350),
        coverage: Coverage::Single,
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"recomputed\""));
    assert!(json.contains("\"panel\":{\"panel\":\"hidden\"}"));
    assert!(json.contains("\"total\":46"));
    assert!(json.contains("\"final_price\":23.5"));
    assert!(json.contains("\"coverage\":\"single\""));
}

#[test]
fn test_watch_event_to_json_error() {
    let event = WatchEvent::Error {
        message: "Something \"failed\"".to_string(),
    };
    let json = event.to_json();
    assert!(json.contains("\"event\":\"error\""));
    assert!(json.contains("Something \\\"failed\\\""));
}

#[test]
fn test_watch_event_to_json_shutdown() {
    let json = WatchEvent::Shutdown { dirty: true }.to_json();
    assert!(json.contains("\"event\":\"shutdown\""));
    assert!(json.contains("\"dirty\":true"));
}

#[test]
fn test_watch_initial_render() {
    let dir = tempdir().unwrap();
    let form = dir.path().join("form.toml");
    fs::write(&form, FORM).unwrap();

    let use_case = WatchUseCase::new(WatchOptions::new(form));
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = Arc::clone(&events);

    let running = Arc::new(AtomicBool::new(false)); // Stop immediately
    use_case
        .start(running, |event| {
            events_clone.lock().unwrap().push(event);
        })
        .unwrap();

    let events = events.lock().unwrap();
    assert!(matches!(events[0], WatchEvent::WatchStarted { .. }));
    match &events[1] {
        WatchEvent::Recomputed {
            final_price,
            coverage,
            ..
        } => {
            assert_eq!(*final_price, Amount::ZERO);
            assert_eq!(*coverage, Coverage::Double);
        }
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(events.last(), Some(&WatchEvent::Shutdown { dirty: false }));
    assert!(!events
        .iter()
        .any(|e| matches!(e, WatchEvent::UnsavedChanges { .. })));
}

#[test]
fn test_watch_invalid_form_fails_to_start() {
    let dir = tempdir().unwrap();
    let form = dir.path().join("form.toml");
    fs::write(&form, "[[inputs]\n").unwrap();

    let use_case = WatchUseCase::new(WatchOptions::new(form));
    let running = Arc::new(AtomicBool::new(false));
    assert!(use_case.start(running, |_| {}).is_err());
}

#[test]
fn test_watch_options_builder() {
    let options = WatchOptions::new("form.toml".into()).with_json(true);
    assert!(options.json);
    assert_eq!(options.form.to_str(), Some("form.toml"));
}
