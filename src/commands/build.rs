use std::path::Path;

use anyhow::Result;
use tally::config::Config;
use tally::infrastructure::{load_catalog, render_toml, write_form};
use tally::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

pub fn cmd_build(
    catalog: &Path,
    output: Option<&Path>,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    let catalog_doc = load_catalog(catalog)?;
    let form = factory::create_form_builder(config).build(&catalog_doc);

    let Some(output) = output else {
        print!("{}", render_toml(&form, "form")?);
        return Ok(());
    };

    write_form(output, &form)?;
    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "build",
            "output": output.display().to_string(),
            "inputs": form.inputs.len(),
            "locked": form.locked.len(),
        }))?;
    } else {
        println!(
            "{} Wrote {} ({} inputs, {} booked)",
            Icon::Success.colored(ui.color, ui.unicode),
            output.display(),
            form.inputs.len(),
            form.locked.len()
        );
    }
    Ok(())
}
