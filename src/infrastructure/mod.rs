//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `documents` - TOML form, catalog and script files
//! - `form_file` - File-backed form source
//! - `prompt` - Terminal confirm prompt

pub mod documents;
pub mod form_file;
pub mod prompt;

pub use documents::{load_catalog, load_form, load_script, read_toml, render_toml, write_form};
pub use form_file::FileFormSource;
pub use prompt::DialoguerPrompt;
