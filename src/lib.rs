//! Tally - participation pricing for event registration forms
//!
//! Tally prices a registration form in which a participant picks events to
//! attend, with or without a ticket. Attending every event of the series more
//! than once earns a discount, which the price panel shows next to the total.
//!
//! ## Architecture
//!
//! - `domain` - Entities, pricing rules and the ports the engine talks through
//! - `application` - Recompute, session, watch and replay use cases
//! - `infrastructure` - TOML documents on disk and terminal prompts
//! - `presentation` - CLI definition and use case wiring
//! - `config` - Layered configuration (`tally.toml`, user config, `TALLY_*`)

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Re-exports for convenience
pub use application::{
    FormEvent, FormSession, RecomputeUseCase, Recomputed, ReplayUseCase, SessionOutcome,
    WatchEvent, WatchOptions, WatchUseCase,
};
pub use config::Config;
pub use domain::entities::{FormDocument, FormSnapshot, PriceQuote};
pub use domain::services::{PanelLabels, PanelState, PricingEngine, Tariff};
pub use domain::value_objects::Amount;
pub use error::{TallyError, TallyResult};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "TALLY_LOG";

/// Initialize tracing/logging on stderr
///
/// `TALLY_LOG` wins when set; otherwise each `-v` raises the level one step
/// from `warn`. Calling this twice is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
