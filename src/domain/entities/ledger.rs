//! Participation ledger
//!
//! Counts participations per event for one recomputation. Events are
//! registered even when nothing is checked for them: coverage is judged
//! against every event the form offers, not only the chosen ones.

use std::collections::BTreeMap;

use crate::domain::value_objects::EventId;

/// Per-event participation counts, rebuilt on every recomputation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParticipationLedger {
    counts: BTreeMap<EventId, u32>,
}

impl ParticipationLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the event known without counting a participation.
    pub fn register(&mut self, event_id: &EventId) {
        self.counts.entry(event_id.clone()).or_insert(0);
    }

    /// Register the event and count one participation for it.
    pub fn record(&mut self, event_id: &EventId) {
        *self.counts.entry(event_id.clone()).or_insert(0) += 1;
    }

    pub fn count(&self, event_id: &EventId) -> u32 {
        self.counts.get(event_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// True when at least one event is registered and every registered event
    /// has `min` or more participations. An empty ledger never qualifies.
    pub fn all_reach(&self, min: u32) -> bool {
        !self.counts.is_empty() && self.counts.values().all(|&count| count >= min)
    }

    /// Lowest count among registered events.
    pub fn min_count(&self) -> Option<u32> {
        self.counts.values().copied().min()
    }
}
