//! Form snapshot entity
//!
//! A typed, point-in-time reading of the participation form. The form layer
//! only knows about element names, values and attributes; by the time the
//! engine sees the form every element has been classified and carries its
//! event id (or `None` when the markup had none).

use serde::Serialize;

use crate::domain::value_objects::EventId;

/// A previously confirmed participation. Counts towards coverage, never
/// towards the price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedItem {
    pub event_id: Option<EventId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl LockedItem {
    pub fn new(event_id: Option<EventId>) -> Self {
        Self {
            event_id,
            label: None,
        }
    }
}

/// Which price applies to a selectable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// Participation with a physical ticket
    Ticket,
    /// Participation without a ticket
    NoTicket,
}

/// A checkbox the user can toggle in this session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionInput {
    pub kind: SelectionKind,
    pub event_id: Option<EventId>,
    /// Raw form name of the checkbox (`group_4`, `no_ticket_events_dynamic`)
    pub name: String,
    /// Submitted value (ticket id for tickets, event id for no-ticket inputs)
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub checked: bool,
}

/// Which navigation controls the form has. Hooks for absent controls are
/// skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormControls {
    pub submit: bool,
    pub cancel: bool,
}

impl Default for FormControls {
    fn default() -> Self {
        Self {
            submit: true,
            cancel: false,
        }
    }
}

/// Everything the pricing engine reads from the form, in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FormSnapshot {
    pub locked: Vec<LockedItem>,
    pub tickets: Vec<SelectionInput>,
    pub no_tickets: Vec<SelectionInput>,
    pub controls: FormControls,
}

impl FormSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_locked(mut self, event_id: &str) -> Self {
        self.locked.push(LockedItem::new(EventId::parse(event_id)));
        self
    }

    pub fn with_ticket(mut self, event_id: &str, checked: bool) -> Self {
        let value = format!("ticket-{}-{}", event_id, self.tickets.len());
        self.tickets.push(SelectionInput {
            kind: SelectionKind::Ticket,
            event_id: EventId::parse(event_id),
            name: format!("group_{}", event_id),
            value,
            label: None,
            checked,
        });
        self
    }

    pub fn with_no_ticket(mut self, event_id: &str, checked: bool) -> Self {
        self.no_tickets.push(SelectionInput {
            kind: SelectionKind::NoTicket,
            event_id: EventId::parse(event_id),
            name: "no_ticket_events_dynamic".to_string(),
            value: event_id.to_string(),
            label: None,
            checked,
        });
        self
    }

    /// All selectable inputs, tickets first.
    pub fn selections(&self) -> impl Iterator<Item = &SelectionInput> {
        self.tickets.iter().chain(self.no_tickets.iter())
    }

    /// Number of currently checked selectable inputs (with or without an id).
    pub fn checked_count(&self) -> usize {
        self.selections().filter(|s| s.checked).count()
    }
}
