use tally::application::{IgnoredReason, ReplayEvent, ReplayStep, SessionOutcome};
use tally::domain::entities::{CancelDecision, UnloadDecision};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::views::panel::panel_summary;

pub fn render_replay_header(
    form: &str,
    script: &str,
    steps: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Replay, "Tally Replay");
    header.add("Form", form);
    header.add("Script", format!("{script} ({steps} steps)"));
    header.render(supports_color, supports_unicode)
}

pub fn render_replay_event(
    event: &ReplayEvent,
    currency: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    match event {
        ReplayEvent::Step {
            index,
            at_ms,
            step,
            outcome,
        } => {
            let mut line = format!(
                "{} #{} {}",
                ColoredText::dim(format!("{:>6}ms", at_ms)).render(supports_color),
                index + 1,
                describe_step(step)
            );
            if let Some(outcome) = outcome {
                let text = describe_outcome(outcome);
                let text = if outcome.is_ignored() {
                    ColoredText::warning(text)
                } else {
                    ColoredText::dim(text)
                };
                line.push_str(&format!(
                    " {} {}",
                    Icon::Arrow.colored(supports_color, supports_unicode),
                    text.render(supports_color)
                ));
            }
            line.push('\n');
            line
        }
        ReplayEvent::Rendered { at_ms, panel, .. } => format!(
            "{} {} {}\n",
            ColoredText::dim(format!("{:>6}ms", at_ms)).render(supports_color),
            Icon::Quote.colored(supports_color, supports_unicode),
            panel_summary(panel, currency)
        ),
        ReplayEvent::Finished {
            dirty,
            submitting,
            renders,
        } => {
            let (icon, state) = match (dirty, submitting) {
                (true, false) => (Icon::Warning, "unsaved changes"),
                (_, true) => (Icon::Success, "submitted"),
                (false, false) => (Icon::Success, "no changes"),
            };
            format!(
                "\n{} Finished: {}, {} render{}\n",
                icon.colored(supports_color, supports_unicode),
                state,
                renders,
                if *renders == 1 { "" } else { "s" }
            )
        }
    }
}

fn describe_step(step: &ReplayStep) -> String {
    match step {
        ReplayStep::Toggle { name, value } => format!("toggle {name}={value}"),
        ReplayStep::Label => "label click".to_string(),
        ReplayStep::Submit => "submit".to_string(),
        ReplayStep::FormSubmit => "form submit".to_string(),
        ReplayStep::Cancel { confirm: None } => "cancel".to_string(),
        ReplayStep::Cancel {
            confirm: Some(answer),
        } => format!("cancel (answer {})", if *answer { "yes" } else { "no" }),
        ReplayStep::Unload => "leave page".to_string(),
        ReplayStep::Wait { ms } => format!("wait {ms}ms"),
    }
}

fn describe_outcome(outcome: &SessionOutcome) -> String {
    match outcome {
        SessionOutcome::RecomputeScheduled { delay_ms } => format!("recompute in {delay_ms}ms"),
        SessionOutcome::SubmitStarted => "submitting".to_string(),
        SessionOutcome::Submitted { submission } => format!(
            "submitted {} ticket(s), {} without ticket",
            submission.tickets.len(),
            submission.no_ticket_events.len()
        ),
        SessionOutcome::Unload {
            decision: UnloadDecision::Prompt,
        } => "asks before leaving".to_string(),
        SessionOutcome::Unload {
            decision: UnloadDecision::Proceed,
        } => "leaves silently".to_string(),
        SessionOutcome::Cancel {
            decision: CancelDecision::Navigate,
        } => "navigates away".to_string(),
        SessionOutcome::Cancel {
            decision: CancelDecision::Abort,
        } => "stays on the form".to_string(),
        SessionOutcome::Ignored {
            reason: IgnoredReason::NoSubmitControl,
        } => "ignored, form has no submit control".to_string(),
        SessionOutcome::Ignored {
            reason: IgnoredReason::NoCancelControl,
        } => "ignored, form has no cancel control".to_string(),
    }
}
