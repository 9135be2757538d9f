use tally::domain::entities::{CheckboxElement, FormDocument, Submission};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_session_header(
    form: &str,
    document: &FormDocument,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = document.title.as_deref().unwrap_or("Tally Form");
    let mut header = CommandHeader::new(Icon::Session, title);
    header.add("Form", form);
    if !document.locked.is_empty() {
        header.add("Booked", locked_summary(document));
    }
    header.render(supports_color, supports_unicode)
}

fn locked_summary(document: &FormDocument) -> String {
    document
        .locked
        .iter()
        .map(|el| match (&el.label, el.event_id.as_str()) {
            (Some(label), _) => label.clone(),
            (None, "") => "?".to_string(),
            (None, id) => id.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Menu entry for one checkbox, e.g. `[x] Workshop (ticket t-1)`.
pub fn choice_label(input: &CheckboxElement, supports_unicode: bool) -> String {
    let icon = if input.checked {
        Icon::Selected
    } else {
        Icon::Unselected
    };
    let text = match &input.label {
        Some(label) => label.clone(),
        None => format!("{} = {}", input.name, input.value),
    };
    format!("{} {}", icon.render(supports_unicode), text)
}

pub fn render_submission(
    submission: &Submission,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Form saved").bold().render(supports_color)
    );
    let list = |values: &[String]| {
        if values.is_empty() {
            "-".to_string()
        } else {
            values.join(", ")
        }
    };
    out.push_str(&format!("  Tickets:        {}\n", list(&submission.tickets)));
    out.push_str(&format!(
        "  Without ticket: {}\n",
        list(&submission.no_ticket_events)
    ));
    out
}
