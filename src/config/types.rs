//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::entities::FormConventions;
use crate::domain::services::{PanelLabels, Tariff};
use crate::domain::value_objects::Amount;
use crate::error::TallyResult;

use super::loader::{self, ConfigWarning};

/// Pricing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default = "default_ticket_price")]
    pub ticket_price: Amount,

    #[serde(default = "default_no_ticket_price")]
    pub no_ticket_price: Amount,

    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            ticket_price: default_ticket_price(),
            no_ticket_price: default_no_ticket_price(),
            currency: default_currency(),
        }
    }
}

fn default_ticket_price() -> Amount {
    Amount::from_units(23)
}

fn default_no_ticket_price() -> Amount {
    Amount::from_units(27)
}

fn default_currency() -> String {
    "€".to_string()
}

/// Form naming conventions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_ticket_prefix")]
    pub ticket_prefix: String,

    #[serde(default = "default_no_ticket_field")]
    pub no_ticket_field: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            ticket_prefix: default_ticket_prefix(),
            no_ticket_field: default_no_ticket_field(),
        }
    }
}

fn default_ticket_prefix() -> String {
    "group".to_string()
}

fn default_no_ticket_field() -> String {
    "no_ticket_events_dynamic".to_string()
}

/// Label locale preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    De,
}

impl Locale {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "de" | "german" | "deutsch" => Some(Locale::De),
            _ => None,
        }
    }
}

/// Panel and prompt texts. Unset fields fall back to the locale preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LabelsConfig {
    #[serde(default)]
    pub locale: Locale,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_bonus: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_bonus: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub already_booked: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items_selected: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discard_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_prompt: Option<String>,
}

/// Recompute delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    #[serde(default = "default_change_delay")]
    pub change_delay_ms: u64,

    #[serde(default = "default_label_delay")]
    pub label_delay_ms: u64,

    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            change_delay_ms: default_change_delay(),
            label_delay_ms: default_label_delay(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

fn default_change_delay() -> u64 {
    10
}

fn default_label_delay() -> u64 {
    50
}

fn default_settle_delay() -> u64 {
    500
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            unicode: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub pricing: PricingConfig,

    #[serde(default)]
    pub form: FormConfig,

    #[serde(default)]
    pub labels: LabelsConfig,

    #[serde(default)]
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> TallyResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> TallyResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Resolve the config the CLI should use: an explicit file must load,
    /// otherwise the first of project and user config that exists.
    pub fn discover(
        explicit: Option<&Path>,
        project_root: Option<&Path>,
    ) -> TallyResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(explicit, project_root)
    }

    /// Apply environment variable overrides (TALLY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn tariff(&self) -> Tariff {
        Tariff {
            ticket: self.pricing.ticket_price,
            no_ticket: self.pricing.no_ticket_price,
        }
    }

    pub fn conventions(&self) -> FormConventions {
        FormConventions {
            ticket_prefix: self.form.ticket_prefix.clone(),
            no_ticket_field: self.form.no_ticket_field.clone(),
        }
    }

    /// Locale preset with the configured currency and overrides applied
    pub fn panel_labels(&self) -> PanelLabels {
        let mut labels = match self.labels.locale {
            Locale::En => PanelLabels::english(),
            Locale::De => PanelLabels::german(),
        };
        labels.currency = self.pricing.currency.clone();

        let overrides = [
            (&self.labels.double_bonus, &mut labels.double_bonus),
            (&self.labels.series_bonus, &mut labels.series_bonus),
            (&self.labels.regular, &mut labels.regular),
            (&self.labels.discount, &mut labels.discount),
            (&self.labels.already_booked, &mut labels.already_booked),
            (&self.labels.items_selected, &mut labels.items_selected),
            (&self.labels.discard_prompt, &mut labels.discard_prompt),
            (&self.labels.leave_prompt, &mut labels.leave_prompt),
        ];
        for (value, slot) in overrides {
            if let Some(value) = value {
                *slot = value.clone();
            }
        }
        labels
    }
}
