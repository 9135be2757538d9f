//! Watch event types and options

use std::path::PathBuf;

use crate::application::recompute::{RecomputeUseCase, Recomputed};
use crate::application::scheduler::ScheduleDelays;
use crate::domain::entities::{Coverage, FormConventions};
use crate::domain::services::PanelState;
use crate::domain::value_objects::Amount;

/// Upper bound for one wait on the event channel
pub const POLL_INTERVAL_MS: u64 = 50;

/// Watch options
#[derive(Debug, Clone)]
pub struct WatchOptions {
    /// Path to the form document
    pub form: PathBuf,
    pub conventions: FormConventions,
    pub recompute: RecomputeUseCase,
    pub delays: ScheduleDelays,
    /// Output as NDJSON
    pub json: bool,
}

impl WatchOptions {
    /// Create new watch options with default pricing and delays
    pub fn new(form: PathBuf) -> Self {
        Self {
            form,
            conventions: FormConventions::default(),
            recompute: RecomputeUseCase::default(),
            delays: ScheduleDelays::default(),
            json: false,
        }
    }

    pub fn with_conventions(mut self, conventions: FormConventions) -> Self {
        self.conventions = conventions;
        self
    }

    pub fn with_recompute(mut self, recompute: RecomputeUseCase) -> Self {
        self.recompute = recompute;
        self
    }

    pub fn with_delays(mut self, delays: ScheduleDelays) -> Self {
        self.delays = delays;
        self
    }

    /// Set JSON output mode
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }
}

/// Watch event types for NDJSON output
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum WatchEvent {
    /// Watch started
    WatchStarted { form: String },
    /// The form content changed
    FormChanged { hash: String },
    /// The panel was recomputed
    Recomputed {
        panel: PanelState,
        total: Amount,
        discount: Amount,
        final_price: Amount,
        coverage: Coverage,
    },
    /// Error occurred
    Error { message: String },
    /// The watch ended while the form had unsaved changes
    UnsavedChanges { message: String },
    /// Watch stopped
    Shutdown { dirty: bool },
}

impl WatchEvent {
    pub fn recomputed(recomputed: &Recomputed) -> Self {
        WatchEvent::Recomputed {
            panel: recomputed.panel.clone(),
            total: recomputed.quote.total,
            discount: recomputed.quote.discount.amount,
            final_price: recomputed.quote.final_price,
            coverage: recomputed.quote.coverage,
        }
    }

    /// Convert to JSON string with "command": "watch" field included
    pub fn to_json(&self) -> String {
        let mut value =
            serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({"event": "error"}));
        if let Some(obj) = value.as_object_mut() {
            obj.insert("command".to_string(), serde_json::json!("watch"));
        }
        serde_json::to_string(&value).unwrap_or_else(|_| "{}".to_string())
    }
}
