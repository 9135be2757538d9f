//! Event identifier value object
//!
//! Every participation (locked, ticket or no-ticket) is grouped by the event
//! it belongs to. The form layer carries the id as a string attribute, an
//! input value, or a suffix of the input name; all of them end up here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of an event as exposed by the form layer.
///
/// Ids are opaque strings. Surrounding whitespace is trimmed and an empty id
/// is not an id at all (see [`EventId::parse`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    /// Parse a raw attribute value. Returns `None` for missing or blank ids.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Extract the event id from a grouped ticket input name.
    ///
    /// Names look like `<prefix>_<eventId>`. The id is the first segment
    /// after the prefix, so `group_12` and `group_12_extra` both yield `12`.
    /// Names with a different prefix, or without an id segment, yield `None`.
    pub fn from_grouped_name(name: &str, prefix: &str) -> Option<Self> {
        let rest = name.strip_prefix(prefix)?.strip_prefix('_')?;
        let segment = rest.split('_').next().unwrap_or_default();
        Self::parse(segment)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EventId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
