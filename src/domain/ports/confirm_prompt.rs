//! Confirm Prompt Port
//!
//! Blocking yes/no questions asked by the exit guard. Implementations can be
//! interactive (asking the user) or fixed (always answering the same way).

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Why the guard is asking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptReason {
    /// The cancel control was activated on a dirty form
    DiscardChanges,
    /// The user is leaving a dirty form that is not being submitted
    LeaveWithChanges,
}

/// Question handed to the prompt
#[derive(Debug, Clone, Copy)]
pub struct PromptContext<'a> {
    pub reason: PromptReason,
    pub message: &'a str,
}

/// Trait for answering exit-guard confirmations.
///
/// Implementations:
/// - `DialoguerPrompt`: asks on the terminal
/// - `AlwaysConfirm`: answers yes (non-interactive `--yes`)
/// - `NeverConfirm`: answers no (keeps the form)
/// - `ScriptedPrompt`: answers from a queue (replays and tests)
pub trait ConfirmPrompt {
    /// Returns true when the user agrees to lose the changes.
    fn confirm(&self, context: &PromptContext) -> bool;
}

impl<P: ConfirmPrompt + ?Sized> ConfirmPrompt for Rc<P> {
    fn confirm(&self, context: &PromptContext) -> bool {
        (**self).confirm(context)
    }
}

pub struct AlwaysConfirm;

impl ConfirmPrompt for AlwaysConfirm {
    fn confirm(&self, _context: &PromptContext) -> bool {
        true
    }
}

pub struct NeverConfirm;

impl ConfirmPrompt for NeverConfirm {
    fn confirm(&self, _context: &PromptContext) -> bool {
        false
    }
}

/// Answers from a queue; once empty, falls back to `default`.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    answers: RefCell<VecDeque<bool>>,
    asked: RefCell<Vec<PromptReason>>,
    default: bool,
}

impl ScriptedPrompt {
    pub fn new(default: bool) -> Self {
        Self {
            default,
            ..Self::default()
        }
    }

    pub fn push_answer(&self, answer: bool) {
        self.answers.borrow_mut().push_back(answer);
    }

    /// Reasons of all questions asked so far
    pub fn asked(&self) -> Vec<PromptReason> {
        self.asked.borrow().clone()
    }
}

impl ConfirmPrompt for ScriptedPrompt {
    fn confirm(&self, context: &PromptContext) -> bool {
        self.asked.borrow_mut().push(context.reason);
        self.answers.borrow_mut().pop_front().unwrap_or(self.default)
    }
}
