//! Watch Use Case
//!
//! Keeps the price panel live while the form document is edited on disk.
//! It orchestrates:
//! - File system monitoring (via `notify` crate)
//! - Content-hash deduplication (editor save noise is dropped)
//! - Deferred, coalesced recompute through a `FormSession`
//! - The unsaved-changes check when the watch ends
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new(form_path).with_json(true);
//! let use_case = WatchUseCase::new(options);
//! use_case.start(running, |event| { ... });
//! ```

mod event;
mod use_case;

#[cfg(test)]
mod tests;

pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL_MS};
pub use use_case::WatchUseCase;
