//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --color, --verbose, --config) are inherited by all subcommands
//! - Every command takes the form document as its first argument, except `build`

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Tally - participation pricing with series discounts
#[derive(Parser, Debug)]
#[command(name = "tally")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output as JSON (NDJSON for streaming commands)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to ./tally.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a form once and show the panel
    Quote {
        /// Form document (TOML)
        form: PathBuf,
    },

    /// Re-price the form whenever the file changes
    Watch {
        /// Form document (TOML)
        form: PathBuf,
    },

    /// Replay a scripted sequence of form events
    Replay {
        /// Form document (TOML)
        form: PathBuf,

        /// Event script (TOML)
        script: PathBuf,
    },

    /// Fill in the form interactively
    Session {
        /// Form document (TOML)
        form: PathBuf,

        /// Write the form back after saving
        #[arg(long)]
        write: bool,

        /// Answer yes to every confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Build a form document from a participant catalog
    Build {
        /// Catalog (TOML)
        catalog: PathBuf,

        /// Write the form here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}
