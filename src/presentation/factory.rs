//! Use Case Factory
//!
//! Creates use cases with configuration and infrastructure wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use crate::application::{
    FormSession, RecomputeUseCase, ReplayUseCase, ScheduleDelays, WatchOptions, WatchUseCase,
};
use crate::config::Config;
use crate::domain::ports::{ConfirmPrompt, InMemoryFormSource, PriceView};
use crate::domain::services::{FormBuilder, PricingEngine};
use crate::error::TallyResult;
use crate::infrastructure::{load_form, FileFormSource};

/// Create the recompute use case for the configured tariff and labels
pub fn create_recompute_use_case(config: &Config) -> RecomputeUseCase {
    RecomputeUseCase::new(PricingEngine::new(config.tariff()), config.panel_labels())
}

/// Create a form source that reads `form` from disk
pub fn create_form_source(config: &Config, form: &Path) -> FileFormSource {
    FileFormSource::new(form, config.conventions())
}

pub fn create_watch_use_case(config: &Config, form: PathBuf, json: bool) -> WatchUseCase {
    let options = WatchOptions::new(form)
        .with_conventions(config.conventions())
        .with_recompute(create_recompute_use_case(config))
        .with_delays(ScheduleDelays::from(&config.schedule))
        .with_json(json);
    WatchUseCase::new(options)
}

pub fn create_replay_use_case(config: &Config) -> ReplayUseCase {
    ReplayUseCase::new(
        create_recompute_use_case(config),
        ScheduleDelays::from(&config.schedule),
        config.conventions(),
    )
}

/// Load `form` into an interactive session
pub fn create_session<V: PriceView>(
    config: &Config,
    form: &Path,
    view: V,
    prompt: Box<dyn ConfirmPrompt>,
) -> TallyResult<FormSession<InMemoryFormSource, V>> {
    let document = load_form(form)?;
    let source = InMemoryFormSource::new(document, config.conventions());
    Ok(
        FormSession::new(source, view, create_recompute_use_case(config))
            .with_delays(ScheduleDelays::from(&config.schedule))
            .with_prompt(prompt),
    )
}

pub fn create_form_builder(config: &Config) -> FormBuilder {
    FormBuilder::new(config.conventions())
}
