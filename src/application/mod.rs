//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RecomputeUseCase` - Read the form, price it, render the panel
//! - `FormSession` - Exit guard plus deferred recompute for one open form
//! - `WatchUseCase` - Live recompute while the form file is edited
//! - `ReplayUseCase` - Drive a session from a recorded script
//!
//! ## Services
//!
//! - `RecomputeScheduler` - Coalescing deadline for deferred recomputes

pub mod recompute;
pub mod replay;
pub mod scheduler;
pub mod session;
pub mod watch;

pub use recompute::{RecomputeUseCase, Recomputed};
pub use replay::{ReplayEvent, ReplayScript, ReplayStep, ReplayUseCase};
pub use scheduler::{RecomputeScheduler, ScheduleDelays};
pub use session::{FormEvent, FormSession, IgnoredReason, SessionOutcome};
pub use watch::{WatchEvent, WatchOptions, WatchUseCase, POLL_INTERVAL_MS};
