//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Amount;
use crate::error::{TallyError, TallyResult};

use super::types::{Config, Locale};

/// Project config file name, looked up in the project root
pub const PROJECT_CONFIG_FILE: &str = "tally.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TallyResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TallyError::InvalidDocument {
        kind: "config",
        file: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// First existing config among an explicit path, the project file and the
/// user file. A broken file is an error, and an explicit path must exist.
pub fn discover(
    explicit: Option<&Path>,
    project_root: Option<&Path>,
) -> TallyResult<(Config, Vec<ConfigWarning>)> {
    if let Some(path) = explicit {
        let (config, warnings) = load_with_warnings(path)?;
        return Ok((with_env_overrides(config), warnings));
    }

    for candidate in candidates(project_root) {
        if candidate.exists() {
            tracing::debug!(path = %candidate.display(), "loading config");
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

fn candidates(project_root: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Some(root) = project_root {
        paths.push(root.join(PROJECT_CONFIG_FILE));
    }
    if let Some(user_config_dir) = user_config_dir() {
        paths.push(user_config_dir.join("tally").join("config.toml"));
    }
    paths
}

/// Apply environment variable overrides (TALLY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // TALLY_TICKET_PRICE
    if let Some(amount) = var_amount(&var, "TALLY_TICKET_PRICE") {
        config.pricing.ticket_price = amount;
    }

    // TALLY_NO_TICKET_PRICE
    if let Some(amount) = var_amount(&var, "TALLY_NO_TICKET_PRICE") {
        config.pricing.no_ticket_price = amount;
    }

    // TALLY_CURRENCY
    if let Some(currency) = var("TALLY_CURRENCY") {
        if !currency.trim().is_empty() {
            config.pricing.currency = currency.trim().to_string();
        }
    }

    // TALLY_LOCALE
    if let Some(locale) = var("TALLY_LOCALE") {
        match Locale::parse(&locale) {
            Some(locale) => config.labels.locale = locale,
            None => tracing::warn!(value = %locale, "ignoring unknown TALLY_LOCALE"),
        }
    }

    config
}

fn var_amount(var: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Amount> {
    let raw = var(name)?;
    match Amount::parse(&raw) {
        Ok(amount) => Some(amount),
        Err(e) => {
            tracing::warn!(variable = name, error = %e, "ignoring invalid price override");
            None
        }
    }
}

/// Get the platform config directory
fn user_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "pricing",
        "ticket_price",
        "no_ticket_price",
        "currency",
        "form",
        "ticket_prefix",
        "no_ticket_field",
        "labels",
        "locale",
        "double_bonus",
        "series_bonus",
        "regular",
        "discount",
        "already_booked",
        "items_selected",
        "discard_prompt",
        "leave_prompt",
        "schedule",
        "change_delay_ms",
        "label_delay_ms",
        "settle_delay_ms",
        "output",
        "color",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
