//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod form_builder;
mod panel;
mod pricing;

pub use form_builder::FormBuilder;
pub use panel::{PanelLabels, PanelState};
pub use pricing::{PricingEngine, Tariff};
