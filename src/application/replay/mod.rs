//! Replay Use Case
//!
//! Drives a form session from a recorded script of user actions on a
//! virtual clock, so deferred recomputes land at deterministic points.

mod script;
mod use_case;


pub use script::{ReplayScript, ReplayStep};
pub use use_case::{ReplayEvent, ReplayUseCase};
