use std::path::Path;

use anyhow::Result;
use tally::config::Config;
use tally::presentation::factory;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::views::panel::render_panel;

pub fn cmd_quote(form: &Path, config: &Config, ui: &UiContext) -> Result<()> {
    let use_case = factory::create_recompute_use_case(config);
    let source = factory::create_form_source(config, form);
    let recomputed = use_case.evaluate(&source)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "quote",
            "command": "quote",
            "form": form.display().to_string(),
            "panel": recomputed.panel,
            "quote": recomputed.quote,
        }))?;
        return Ok(());
    }

    let quote = &recomputed.quote;
    let mut header = CommandHeader::new(Icon::Quote, "Tally Quote");
    header.add("Form", form.display().to_string());
    header.add("Events", quote.event_count.to_string());
    header.add("Selected", quote.selection_count().to_string());
    if quote.locked_count > 0 {
        header.add("Booked", quote.locked_count.to_string());
    }
    print!("{}", header.render(ui.color, ui.unicode));
    println!();
    print!(
        "{}",
        render_panel(
            &recomputed.panel,
            &use_case.labels().currency,
            ui.color,
            ui.unicode
        )
    );
    Ok(())
}
