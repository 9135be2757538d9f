//! Terminal Confirm Prompt
//!
//! Asks exit-guard questions on the terminal via `dialoguer`.

use dialoguer::Confirm;

use crate::domain::ports::{ConfirmPrompt, PromptContext};

/// Interactive prompt. A failed read (no terminal, interrupted) counts as
/// "no", which keeps the form and its changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialoguerPrompt;

impl DialoguerPrompt {
    pub fn new() -> Self {
        Self
    }
}

impl ConfirmPrompt for DialoguerPrompt {
    fn confirm(&self, context: &PromptContext) -> bool {
        match Confirm::new()
            .with_prompt(context.message)
            .default(false)
            .interact()
        {
            Ok(answer) => answer,
            Err(e) => {
                tracing::warn!(reason = ?context.reason, error = %e, "confirm prompt failed");
                false
            }
        }
    }
}
