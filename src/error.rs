//! Error types for Tally
//!
//! Uses `thiserror` for library errors. The pricing engine and exit guard
//! never fail; errors only come from the edges (files, prompts, watching).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Tally operations
pub type TallyResult<T> = Result<T, TallyError>;

/// Main error type for Tally operations
#[derive(Error, Debug)]
pub enum TallyError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A TOML document (form, catalog, script or config) could not be parsed
    #[error("invalid {kind} in {file}: {message}")]
    InvalidDocument {
        kind: &'static str,
        file: PathBuf,
        message: String,
    },

    /// A TOML document could not be serialized
    #[error("failed to serialize {kind}: {message}")]
    Serialize { kind: &'static str, message: String },

    /// A monetary amount was negative, not finite, or malformed
    #[error("invalid amount '{value}': {reason}")]
    InvalidAmount { value: String, reason: String },

    /// A toggle referenced an input that does not exist in the form
    #[error("no checkbox named '{name}' with value '{value}' in form")]
    UnknownInput { name: String, value: String },

    /// File watching failed
    #[error("watch error: {0}")]
    Watch(String),

    /// Interactive prompt failed (no terminal, read error)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// The user aborted an interactive session
    #[error("session aborted by user")]
    Aborted,
}

impl From<notify::Error> for TallyError {
    fn from(err: notify::Error) -> Self {
        TallyError::Watch(err.to_string())
    }
}
