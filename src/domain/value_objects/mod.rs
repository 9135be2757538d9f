//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod amount;
mod event_id;
mod hash;

pub use amount::Amount;
pub use event_id::EventId;
pub use hash::ContentHash;
