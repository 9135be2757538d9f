//! Session event and outcome types

use serde::Serialize;

use crate::domain::entities::{CancelDecision, Submission, UnloadDecision};

/// Something that happened on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormEvent {
    /// A checkbox changed state
    CheckboxChanged,
    /// A form-check label was clicked
    LabelClicked,
    /// The submit control was activated
    SubmitClicked,
    /// The form was submitted
    FormSubmitted,
    /// The cancel control was activated
    CancelClicked,
    /// The user is leaving the page
    BeforeUnload,
}

/// Why an event had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoredReason {
    NoSubmitControl,
    NoCancelControl,
}

/// Result of dispatching one event
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SessionOutcome {
    /// A recompute is pending
    RecomputeScheduled { delay_ms: u64 },
    /// Submission started from the submit control
    SubmitStarted,
    /// The form was posted
    Submitted { submission: Submission },
    Unload { decision: UnloadDecision },
    Cancel { decision: CancelDecision },
    /// The event targets a control the form does not have
    Ignored { reason: IgnoredReason },
}

impl SessionOutcome {
    pub fn is_ignored(&self) -> bool {
        matches!(self, SessionOutcome::Ignored { .. })
    }
}
