//! Configuration module for Tally
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (TALLY_*)
//! 3. Project config (./tally.toml, or `--config PATH`)
//! 4. User config (<config dir>/tally/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{
    ColorMode, Config, FormConfig, LabelsConfig, Locale, OutputConfig, PricingConfig,
    ScheduleConfig,
};
