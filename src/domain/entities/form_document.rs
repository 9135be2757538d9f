//! Form document entity
//!
//! The raw shape of the participation form as the rendering layer produces
//! it: locked elements with an event-id attribute, and checkboxes with a
//! name, a value and a checked state. [`FormDocument::snapshot`] turns this
//! into the typed [`FormSnapshot`] the engine works on.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    FormControls, FormSnapshot, LockedItem, SelectionInput, SelectionKind,
};
use crate::domain::value_objects::EventId;
use crate::error::{TallyError, TallyResult};

/// Naming conventions used by the form layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormConventions {
    /// Ticket checkboxes are named `<ticket_prefix>_<eventId>`
    pub ticket_prefix: String,
    /// Shared name of the no-ticket checkboxes (value = event id)
    pub no_ticket_field: String,
}

impl Default for FormConventions {
    fn default() -> Self {
        Self {
            ticket_prefix: "group".to_string(),
            no_ticket_field: "no_ticket_events_dynamic".to_string(),
        }
    }
}

impl FormConventions {
    pub fn ticket_field(&self, event_id: &EventId) -> String {
        format!("{}_{}", self.ticket_prefix, event_id)
    }

    fn is_ticket_field(&self, name: &str) -> bool {
        name.strip_prefix(self.ticket_prefix.as_str())
            .is_some_and(|rest| rest.starts_with('_'))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsSection {
    #[serde(default = "default_true")]
    pub submit: bool,
    #[serde(default)]
    pub cancel: bool,
}

impl Default for ControlsSection {
    fn default() -> Self {
        Self {
            submit: true,
            cancel: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// An already booked participation element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockedElement {
    #[serde(default)]
    pub event_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A checkbox input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxElement {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default)]
    pub checked: bool,
}

/// The whole form as written by the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub controls: ControlsSection,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locked: Vec<LockedElement>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<CheckboxElement>,
}

impl FormDocument {
    /// Classify every element once. Checkboxes that are neither ticket nor
    /// no-ticket inputs are not part of the pricing and are left out.
    pub fn snapshot(&self, conventions: &FormConventions) -> FormSnapshot {
        let locked = self
            .locked
            .iter()
            .map(|el| LockedItem {
                event_id: EventId::parse(&el.event_id),
                label: el.label.clone(),
            })
            .collect();

        let mut tickets = Vec::new();
        let mut no_tickets = Vec::new();
        for input in &self.inputs {
            if conventions.is_ticket_field(&input.name) {
                tickets.push(selection(
                    input,
                    SelectionKind::Ticket,
                    EventId::from_grouped_name(&input.name, &conventions.ticket_prefix),
                ));
            } else if input.name == conventions.no_ticket_field {
                no_tickets.push(selection(
                    input,
                    SelectionKind::NoTicket,
                    EventId::parse(&input.value),
                ));
            }
        }

        FormSnapshot {
            locked,
            tickets,
            no_tickets,
            controls: FormControls {
                submit: self.controls.submit,
                cancel: self.controls.cancel,
            },
        }
    }

    /// Flip the checkbox identified by `name` and `value`, returning its new
    /// state.
    pub fn toggle(&mut self, name: &str, value: &str) -> TallyResult<bool> {
        let input = self
            .inputs
            .iter_mut()
            .find(|i| i.name == name && i.value == value)
            .ok_or_else(|| TallyError::UnknownInput {
                name: name.to_string(),
                value: value.to_string(),
            })?;
        input.checked = !input.checked;
        Ok(input.checked)
    }

    pub fn find(&self, name: &str, value: &str) -> Option<&CheckboxElement> {
        self.inputs
            .iter()
            .find(|i| i.name == name && i.value == value)
    }
}

fn selection(input: &CheckboxElement, kind: SelectionKind, event_id: Option<EventId>) -> SelectionInput {
    SelectionInput {
        kind,
        event_id,
        name: input.name.clone(),
        value: input.value.clone(),
        label: input.label.clone(),
        checked: input.checked,
    }
}
