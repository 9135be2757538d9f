//! Domain Entities
//!
//! - `FormDocument` - The raw form as the rendering layer writes it
//! - `FormSnapshot` - Typed reading of the form the engine prices
//! - `ParticipationLedger` - Per-event participation counts
//! - `PriceQuote` - Outcome of one pricing pass
//! - `ExitGuard` - Unsaved-changes state of a session
//! - `Catalog` / `Submission` - Form builder input and saved output

mod catalog;
mod exit_guard;
mod form_document;
mod form_snapshot;
mod ledger;
mod quote;
mod submission;

pub use catalog::{Catalog, CatalogEvent, CatalogTicket};
pub use exit_guard::{CancelDecision, ExitGuard, UnloadDecision};
pub use form_document::{
    CheckboxElement, ControlsSection, FormConventions, FormDocument, LockedElement,
};
pub use form_snapshot::{FormControls, FormSnapshot, LockedItem, SelectionInput, SelectionKind};
pub use ledger::ParticipationLedger;
pub use quote::{Coverage, Discount, DiscountKind, PriceQuote};
pub use submission::Submission;
