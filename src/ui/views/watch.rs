use tally::application::WatchEvent;
use tally::domain::services::PanelState;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::panel::panel_summary;

pub fn render_watch_header(
    form: &str,
    settle_ms: u64,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Watch, "Tally Watch");
    header.add("Form", form);
    header.add("Settle", format!("{settle_ms}ms"));
    header.add("Hint", "Press Ctrl+C to stop");
    header.render(supports_color, supports_unicode)
}

pub fn render_watch_event(
    timestamp: &str,
    event: &WatchEvent,
    currency: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let prefix = ColoredText::dim(format!("[{}]", timestamp)).render(supports_color);

    match event {
        WatchEvent::WatchStarted { form } => format!(
            "{} {} Watching: {}\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode),
            form
        ),
        WatchEvent::FormChanged { hash } => format!(
            "{} {} Changed: {}\n",
            prefix,
            Icon::Arrow.colored(supports_color, supports_unicode),
            short_hash(hash)
        ),
        WatchEvent::Recomputed { panel, .. } => {
            let icon = match panel {
                PanelState::Visible { badge: Some(_), .. } => Icon::Success,
                PanelState::Visible { .. } => Icon::Quote,
                PanelState::Hidden => Icon::Arrow,
            };
            format!(
                "{} {} {}\n",
                prefix,
                icon.colored(supports_color, supports_unicode),
                panel_summary(panel, currency)
            )
        }
        WatchEvent::Error { message } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Error.colored(supports_color, supports_unicode),
            ColoredText::error(format!("Error: {message}")).render(supports_color)
        ),
        WatchEvent::UnsavedChanges { message } => format!(
            "{} {} {}\n",
            prefix,
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning(message.as_str()).render(supports_color)
        ),
        WatchEvent::Shutdown { .. } => format!(
            "\n{} {} Watch stopped.\n",
            prefix,
            Icon::Watch.colored(supports_color, supports_unicode)
        ),
    }
}

/// `sha256:0123456789ab...` shortened to the first 12 hex digits.
fn short_hash(hash: &str) -> &str {
    let hex = hash.strip_prefix("sha256:").unwrap_or(hash);
    hex.get(..12).unwrap_or(hex)
}
