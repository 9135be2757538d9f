//! Exit guard entity
//!
//! Session-scoped unsaved-changes state. Both flags start out false and only
//! ever flip to true; a fresh session (page load) is a fresh guard.

use serde::Serialize;

/// What should happen when the user tries to leave the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UnloadDecision {
    /// Ask the user to confirm leaving
    Prompt,
    /// Leave silently
    Proceed,
}

/// What should happen after the cancel control is activated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelDecision {
    /// Follow the cancel link
    Navigate,
    /// Stay on the form (the user declined to discard changes)
    Abort,
}

/// Tracks modifications and submission for one form session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExitGuard {
    is_dirty: bool,
    is_submitting: bool,
}

impl ExitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A checkbox changed or a form-check label was clicked.
    pub fn mark_dirty(&mut self) {
        if !self.is_dirty {
            tracing::info!("form has unsaved changes");
        }
        self.is_dirty = true;
    }

    /// The submit control was activated or the form was submitted.
    pub fn mark_submitting(&mut self) {
        if !self.is_submitting {
            tracing::info!("form submission started");
        }
        self.is_submitting = true;
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    pub fn on_before_unload(&self) -> UnloadDecision {
        if self.is_dirty && !self.is_submitting {
            UnloadDecision::Prompt
        } else {
            UnloadDecision::Proceed
        }
    }

    /// Decide a cancel action. `confirm_discard` is only consulted when the
    /// form is dirty.
    pub fn on_cancel(&self, confirm_discard: impl FnOnce() -> bool) -> CancelDecision {
        if self.is_dirty && !confirm_discard() {
            CancelDecision::Abort
        } else {
            CancelDecision::Navigate
        }
    }
}
