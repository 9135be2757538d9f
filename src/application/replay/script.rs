//! Replay script format
//!
//! ```toml
//! confirm = false
//!
//! [[steps]]
//! action = "toggle"
//! name = "group_4"
//! value = "t-1"
//!
//! [[steps]]
//! action = "wait"
//! ms = 20
//!
//! [[steps]]
//! action = "cancel"
//! confirm = true
//! ```

use serde::{Deserialize, Serialize};

use crate::application::session::FormEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Answer to confirm prompts when a step does not give one
    #[serde(default)]
    pub confirm: bool,
    #[serde(default)]
    pub steps: Vec<ReplayStep>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ReplayStep {
    /// Flip a checkbox
    Toggle { name: String, value: String },
    /// Click a form-check label
    Label,
    /// Activate the submit control
    Submit,
    /// Submit the form
    FormSubmit,
    /// Activate the cancel control
    Cancel {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        confirm: Option<bool>,
    },
    /// Try to leave the page
    Unload,
    /// Let time pass
    Wait { ms: u64 },
}

impl ReplayStep {
    /// The form event this step fires, if it maps to one directly.
    pub fn form_event(&self) -> Option<FormEvent> {
        match self {
            ReplayStep::Label => Some(FormEvent::LabelClicked),
            ReplayStep::Submit => Some(FormEvent::SubmitClicked),
            ReplayStep::FormSubmit => Some(FormEvent::FormSubmitted),
            ReplayStep::Cancel { .. } => Some(FormEvent::CancelClicked),
            ReplayStep::Unload => Some(FormEvent::BeforeUnload),
            ReplayStep::Toggle { .. } | ReplayStep::Wait { .. } => None,
        }
    }
}
