use tally::config::ConfigWarning;

use crate::ui::blocks::warning::WarningBlock;

pub fn render_config_warnings(
    warnings: &[ConfigWarning],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut block = WarningBlock::new("Config warnings");
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        block.add_line(format!("Unknown key '{}' in {}", w.key, location));
        if let Some(suggestion) = &w.suggestion {
            block.add_line(format!("  Did you mean '{}'?", suggestion));
        }
    }
    if block.is_empty() {
        return String::new();
    }
    block.render(supports_color, supports_unicode)
}
