//! Domain Layer
//!
//! This is the core of Tally - pure pricing and guard logic without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Form snapshot, ledger, quote, exit guard
//! - `value_objects/` - Immutable value types (EventId, Amount, ContentHash)
//! - `services/` - Pricing engine, panel composition, form builder
//! - `policies/` - Discount rules
//! - `ports/` - Interface definitions for the form layer and prompts
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or terminal directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
