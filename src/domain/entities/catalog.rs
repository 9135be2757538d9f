//! Participant catalog entity
//!
//! Input to the form builder: the events on offer, the participant's tickets,
//! and which participations are already booked.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::EventId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEvent {
    pub id: EventId,
    pub name: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogTicket {
    /// Ticket identifier (submitted as the checkbox value)
    pub id: String,
    pub event_id: EventId,
    /// Name printed on the ticket
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    /// A participation with this ticket is already booked
    #[serde(default)]
    pub booked: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub participant: Option<String>,
    #[serde(default)]
    pub events: Vec<CatalogEvent>,
    #[serde(default)]
    pub tickets: Vec<CatalogTicket>,
    /// Events the participant already attends without a ticket
    #[serde(default)]
    pub booked_without_ticket: Vec<EventId>,
}

impl Catalog {
    /// Events ordered by date, then name.
    pub fn events_by_date(&self) -> Vec<&CatalogEvent> {
        let mut events: Vec<_> = self.events.iter().collect();
        events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.name.cmp(&b.name)));
        events
    }

    pub fn tickets_for<'a>(&'a self, event_id: &'a EventId) -> impl Iterator<Item = &'a CatalogTicket> {
        self.tickets.iter().filter(move |t| &t.event_id == event_id)
    }
}
