use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Result};
use dialoguer::Select;
use tally::application::{FormEvent, SessionOutcome};
use tally::config::Config;
use tally::domain::entities::CancelDecision;
use tally::domain::ports::{AlwaysConfirm, ConfirmPrompt, PanelNodes};
use tally::infrastructure::{write_form, DialoguerPrompt};
use tally::presentation::factory;

use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;
use crate::ui::theme::prompt_theme;
use crate::ui::views::panel::{render_panel, state_of};
use crate::ui::views::session::{choice_label, render_session_header, render_submission};

enum Action {
    Toggle(String, String),
    Save,
    Cancel,
    Quit,
}

pub fn cmd_session(
    form: &Path,
    write: bool,
    yes: bool,
    config: &Config,
    ui: &UiContext,
) -> Result<()> {
    if !ui.interactive() {
        bail!("`tally session` needs an interactive terminal (try `tally replay` instead)");
    }

    let prompt: Box<dyn ConfirmPrompt> = if yes {
        Box::new(AlwaysConfirm)
    } else {
        Box::new(DialoguerPrompt::new())
    };
    let mut session = factory::create_session(config, form, PanelNodes::default(), prompt)?;
    session.load(Instant::now())?;

    let currency = session.recompute().labels().currency.clone();
    let theme = prompt_theme(ui.color);

    print!(
        "{}",
        render_session_header(
            &form.display().to_string(),
            session.source().document(),
            ui.color,
            ui.unicode
        )
    );

    loop {
        // An interactive session has no reason to wait out the delays.
        session.flush()?;
        println!();
        print!(
            "{}",
            render_panel(&state_of(session.view()), &currency, ui.color, ui.unicode)
        );

        let controls = session.controls();
        let document = session.source().document();
        let mut labels: Vec<String> = Vec::new();
        let mut actions: Vec<Action> = Vec::new();
        for input in &document.inputs {
            labels.push(choice_label(input, ui.unicode));
            actions.push(Action::Toggle(input.name.clone(), input.value.clone()));
        }
        labels.push(format!("{} Save", Icon::Success.render(ui.unicode)));
        actions.push(Action::Save);
        if controls.cancel {
            labels.push(format!("{} Cancel", Icon::Error.render(ui.unicode)));
            actions.push(Action::Cancel);
        }
        labels.push(format!("{} Quit", Icon::Arrow.render(ui.unicode)));
        actions.push(Action::Quit);

        let choice = Select::with_theme(&*theme)
            .with_prompt("Select a choice to toggle")
            .items(&labels)
            .default(0)
            .interact()?;

        match &actions[choice] {
            Action::Toggle(name, value) => {
                session.toggle(name, value, Instant::now())?;
            }
            Action::Save => {
                if controls.submit {
                    session.dispatch(FormEvent::SubmitClicked, Instant::now())?;
                }
                if let SessionOutcome::Submitted { submission } =
                    session.dispatch(FormEvent::FormSubmitted, Instant::now())?
                {
                    print!("{}", render_submission(&submission, ui.color, ui.unicode));
                }
                if write {
                    write_form(form, session.source().document())?;
                    tracing::info!(path = %form.display(), "form written");
                }
                return Ok(());
            }
            Action::Cancel => {
                if let SessionOutcome::Cancel {
                    decision: CancelDecision::Navigate,
                } = session.dispatch(FormEvent::CancelClicked, Instant::now())?
                {
                    println!("Changes discarded.");
                    return Ok(());
                }
            }
            Action::Quit => {
                if session.confirm_leave() {
                    return Ok(());
                }
            }
        }
    }
}
