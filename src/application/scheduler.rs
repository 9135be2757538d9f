//! Deferred recompute scheduling
//!
//! Triggers do not recompute right away: they schedule a recompute a short
//! delay later, so the read sees the mutation that caused it. Triggers that
//! arrive before the deadline are coalesced into a single recompute whose
//! deadline is the latest requested one.
//!
//! Time is passed in explicitly; the scheduler never reads the clock.

use std::time::{Duration, Instant};

use crate::config::ScheduleConfig;

/// Delays per trigger kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleDelays {
    /// After a checkbox change
    pub change: Duration,
    /// After a label click
    pub label: Duration,
    /// Settle pass after the form loads
    pub settle: Duration,
}

impl Default for ScheduleDelays {
    fn default() -> Self {
        Self {
            change: Duration::from_millis(10),
            label: Duration::from_millis(50),
            settle: Duration::from_millis(500),
        }
    }
}

impl From<&ScheduleConfig> for ScheduleDelays {
    fn from(config: &ScheduleConfig) -> Self {
        Self {
            change: Duration::from_millis(config.change_delay_ms),
            label: Duration::from_millis(config.label_delay_ms),
            settle: Duration::from_millis(config.settle_delay_ms),
        }
    }
}

/// Debounced recompute deadline
#[derive(Debug, Default)]
pub struct RecomputeScheduler {
    deadline: Option<Instant>,
    coalesced: usize,
}

impl RecomputeScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request a recompute `delay` after `now`. Returns the effective deadline.
    pub fn schedule(&mut self, now: Instant, delay: Duration) -> Instant {
        let due = now + delay;
        let deadline = match self.deadline {
            Some(current) => {
                self.coalesced += 1;
                current.max(due)
            }
            None => due,
        };
        self.deadline = Some(deadline);
        deadline
    }

    /// True (and clears the deadline) when a recompute is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                if self.coalesced > 0 {
                    tracing::trace!(coalesced = self.coalesced, "coalesced recompute triggers");
                }
                self.deadline = None;
                self.coalesced = 0;
                true
            }
            _ => false,
        }
    }

    /// Drop any pending deadline; true if one was pending.
    pub fn take_pending(&mut self) -> bool {
        self.coalesced = 0;
        self.deadline.take().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left until the pending deadline (zero when overdue).
    pub fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
