//! Form builder service
//!
//! Lays out the participation form for one participant:
//! - one group per event the participant holds tickets for, where booked
//!   tickets are locked and the rest are selectable `<prefix>_<eventId>`
//!   checkboxes;
//! - a no-ticket entry for every event the participant has no ticket for,
//!   locked when already booked.
//!
//! Events are laid out by date, then name.

use std::collections::HashSet;

use crate::domain::entities::{
    Catalog, CatalogEvent, CatalogTicket, CheckboxElement, ControlsSection, FormConventions,
    FormDocument, LockedElement,
};
use crate::domain::value_objects::EventId;

#[derive(Debug, Clone, Default)]
pub struct FormBuilder {
    conventions: FormConventions,
}

impl FormBuilder {
    pub fn new(conventions: FormConventions) -> Self {
        Self { conventions }
    }

    pub fn build(&self, catalog: &Catalog) -> FormDocument {
        let events = catalog.events_by_date();
        let booked_without_ticket: HashSet<&EventId> = catalog.booked_without_ticket.iter().collect();

        let mut locked = Vec::new();
        let mut inputs = Vec::new();

        for event in &events {
            for ticket in catalog.tickets_for(&event.id) {
                if ticket.booked {
                    locked.push(LockedElement {
                        event_id: event.id.to_string(),
                        label: Some(ticket_label(ticket)),
                    });
                } else {
                    inputs.push(CheckboxElement {
                        name: self.conventions.ticket_field(&event.id),
                        value: ticket.id.clone(),
                        label: Some(ticket_label(ticket)),
                        checked: false,
                    });
                }
            }
        }

        for event in events
            .iter()
            .filter(|e| catalog.tickets_for(&e.id).next().is_none())
        {
            if booked_without_ticket.contains(&event.id) {
                locked.push(LockedElement {
                    event_id: event.id.to_string(),
                    label: Some(event_label(event)),
                });
            } else {
                inputs.push(CheckboxElement {
                    name: self.conventions.no_ticket_field.clone(),
                    value: event.id.to_string(),
                    label: Some(event_label(event)),
                    checked: false,
                });
            }
        }

        tracing::debug!(
            events = events.len(),
            locked = locked.len(),
            inputs = inputs.len(),
            "built participation form"
        );

        FormDocument {
            title: catalog.participant.clone(),
            controls: ControlsSection {
                submit: true,
                cancel: true,
            },
            locked,
            inputs,
        }
    }
}

fn ticket_label(ticket: &CatalogTicket) -> String {
    match ticket.comment.as_deref().map(str::trim) {
        Some(comment) if !comment.is_empty() => format!("{} ({})", ticket.name, comment),
        _ => ticket.name.clone(),
    }
}

fn event_label(event: &CatalogEvent) -> String {
    format!("{} ({})", event.name, event.date.format("%d.%m.%Y"))
}
