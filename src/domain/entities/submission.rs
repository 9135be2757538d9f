//! Submission entity
//!
//! What the form posts when it is saved: the chosen ticket ids across all
//! event groups, and the chosen no-ticket event ids.

use serde::Serialize;

use crate::domain::entities::FormSnapshot;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    /// Values of all checked ticket inputs
    pub tickets: Vec<String>,
    /// Values of all checked no-ticket inputs
    pub no_ticket_events: Vec<String>,
}

impl Submission {
    pub fn from_snapshot(snapshot: &FormSnapshot) -> Self {
        let checked_values = |inputs: &[crate::domain::entities::SelectionInput]| {
            inputs
                .iter()
                .filter(|i| i.checked)
                .map(|i| i.value.clone())
                .collect::<Vec<_>>()
        };
        Self {
            tickets: checked_values(&snapshot.tickets),
            no_ticket_events: checked_values(&snapshot.no_tickets),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.no_ticket_events.is_empty()
    }
}
