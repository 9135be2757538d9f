use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use tally::application::WatchEvent;
use tally::config::Config;
use tally::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::watch::{render_watch_event, render_watch_header};

pub fn cmd_watch(form: &Path, config: &Config, ui: &UiContext) -> Result<()> {
    let use_case = factory::create_watch_use_case(config, form.to_path_buf(), ui.json);
    let currency = config.panel_labels().currency;

    // Set up Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();
    ctrlc::set_handler(move || {
        running_clone.store(false, Ordering::SeqCst);
    })
    .context("Error setting Ctrl+C handler")?;

    if !ui.json {
        print!(
            "{}",
            render_watch_header(
                &form.display().to_string(),
                config.schedule.settle_delay_ms,
                ui.color,
                ui.unicode
            )
        );
    }

    use_case.start(running, |event| {
        if ui.json {
            if let Err(e) = crate::ui::json::emit_line(&event.to_json()) {
                tracing::warn!(error = %e, "failed to write watch event");
            }
            return;
        }

        let timestamp = chrono::Local::now().format("%H:%M:%S").to_string();
        let rendered = render_watch_event(&timestamp, &event, &currency, ui.color, ui.unicode);
        match event {
            WatchEvent::Error { .. } | WatchEvent::UnsavedChanges { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })?;

    Ok(())
}
