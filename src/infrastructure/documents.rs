//! TOML document files
//!
//! Forms, catalogs and replay scripts are plain TOML. Parse failures carry
//! the document kind and path so the CLI can point at the broken file.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::application::replay::ReplayScript;
use crate::domain::entities::{Catalog, FormDocument};
use crate::error::{TallyError, TallyResult};

/// Read and parse a TOML document.
pub fn read_toml<T: DeserializeOwned>(path: &Path, kind: &'static str) -> TallyResult<T> {
    let content = fs::read_to_string(path)?;
    parse_toml(&content, path, kind)
}

pub(crate) fn parse_toml<T: DeserializeOwned>(
    content: &str,
    path: &Path,
    kind: &'static str,
) -> TallyResult<T> {
    toml::from_str(content).map_err(|e| TallyError::InvalidDocument {
        kind,
        file: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

/// Serialize a value as pretty TOML.
pub fn render_toml<T: Serialize>(value: &T, kind: &'static str) -> TallyResult<String> {
    toml::to_string_pretty(value).map_err(|e| TallyError::Serialize {
        kind,
        message: e.to_string(),
    })
}

pub fn load_form(path: &Path) -> TallyResult<FormDocument> {
    read_toml(path, "form")
}

pub fn write_form(path: &Path, form: &FormDocument) -> TallyResult<()> {
    let content = render_toml(form, "form")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn load_catalog(path: &Path) -> TallyResult<Catalog> {
    read_toml(path, "catalog")
}

pub fn load_script(path: &Path) -> TallyResult<ReplayScript> {
    read_toml(path, "replay script")
}
