//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! The form layer and the terminal provide concrete implementations.

pub mod confirm_prompt;
pub mod form_source;
pub mod price_view;

pub use confirm_prompt::{
    AlwaysConfirm, ConfirmPrompt, NeverConfirm, PromptContext, PromptReason, ScriptedPrompt,
};
pub use form_source::{FormSource, InMemoryFormSource};
pub use price_view::{PanelNodes, PriceView};
