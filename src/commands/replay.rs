use std::path::Path;

use anyhow::Result;
use tally::config::Config;
use tally::infrastructure::{load_form, load_script};
use tally::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::views::panel::{render_panel, state_of};
use crate::ui::views::replay::{render_replay_event, render_replay_header};

pub fn cmd_replay(form: &Path, script: &Path, config: &Config, ui: &UiContext) -> Result<()> {
    let document = load_form(form)?;
    let steps = load_script(script)?;
    let use_case = factory::create_replay_use_case(config);
    let currency = config.panel_labels().currency;

    if !ui.json {
        print!(
            "{}",
            render_replay_header(
                &form.display().to_string(),
                &script.display().to_string(),
                steps.steps.len(),
                ui.color,
                ui.unicode
            )
        );
        println!();
    }

    let nodes = use_case.run(document, &steps, |event| {
        if ui.json {
            if let Err(e) = crate::ui::json::emit_line(&event.to_json()) {
                tracing::warn!(error = %e, "failed to write replay event");
            }
        } else {
            print!(
                "{}",
                render_replay_event(&event, &currency, ui.color, ui.unicode)
            );
        }
    })?;

    if !ui.json {
        println!();
        print!(
            "{}",
            render_panel(&state_of(&nodes), &currency, ui.color, ui.unicode)
        );
    }
    Ok(())
}
