//! Tally CLI - participation pricing with series discounts
//!
//! Usage: tally <COMMAND>
//!
//! Commands:
//!   quote    Price a form once and show the panel
//!   watch    Re-price the form whenever the file changes
//!   replay   Replay a scripted sequence of form events
//!   session  Fill in the form interactively
//!   build    Build a form document from a participant catalog

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tally::config::Config;
use tally::presentation::{Cli, Commands};

use crate::ui::context::UiContext;
use crate::ui::output::render_config_warnings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    tally::init_tracing(cli.verbose);

    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), Some(&cwd))?;
    let ui = UiContext::new(cli.json, cli.color, &config);

    if !warnings.is_empty() {
        if ui.json {
            for w in &warnings {
                tracing::warn!(key = %w.key, file = %w.file.display(), "unknown config key");
            }
        } else {
            eprint!("{}", render_config_warnings(&warnings, ui.color, ui.unicode));
        }
    }

    match cli.command {
        Commands::Quote { form } => commands::quote::cmd_quote(&form, &config, &ui),
        Commands::Watch { form } => commands::watch::cmd_watch(&form, &config, &ui),
        Commands::Replay { form, script } => {
            commands::replay::cmd_replay(&form, &script, &config, &ui)
        }
        Commands::Session { form, write, yes } => {
            commands::session::cmd_session(&form, write, yes, &config, &ui)
        }
        Commands::Build { catalog, output } => {
            commands::build::cmd_build(&catalog, output.as_deref(), &config, &ui)
        }
    }
}
