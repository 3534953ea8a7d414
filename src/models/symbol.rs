use std::fmt;

use serde::Serialize;

/// Normalized ticker symbol. Always trimmed and uppercased; never empty.
/// Deliberately not deserializable: wire strings go through
/// [`Symbol::normalize`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Normalizes raw user text into a symbol. Returns `None` when the
    /// trimmed input is empty.
    pub fn normalize(raw: &str) -> Option<Self> {
        let cleaned = raw.trim().to_ascii_uppercase();
        if cleaned.is_empty() {
            None
        } else {
            Some(Self(cleaned))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
