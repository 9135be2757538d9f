//! Form Session
//!
//! One open form: the exit guard, the deferred recompute and the price view,
//! driven by form events. A session starts clean when the form loads; nothing
//! outlives it.
//!
//! ## Flow
//!
//! 1. `load` reads which controls exist and schedules the settle recompute
//! 2. `dispatch` feeds checkbox, label, submit, cancel and unload events
//! 3. `poll` runs the recompute once its deadline has passed

mod event;
mod use_case;


pub use event::{FormEvent, IgnoredReason, SessionOutcome};
pub use use_case::FormSession;
