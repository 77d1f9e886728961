//! Filter state: per-column substrings and the global filter.

use std::collections::BTreeMap;

/// Current filter inputs, stored as typed by the user.
///
/// Matching lowercases both sides at evaluation time, so the raw text is
/// kept for echoing back into search boxes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    columns: BTreeMap<String, String>,
    global: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the global filter text.
    pub fn global(&self) -> &str {
        &self.global
    }

    pub fn set_global(&mut self, text: impl Into<String>) {
        self.global = text.into();
    }

    /// Returns the filter text for a column, if one is set.
    pub fn column(&self, key: &str) -> Option<&str> {
        self.columns.get(key).map(String::as_str)
    }

    /// Sets a column filter. Empty text removes it.
    pub fn set_column(&mut self, key: impl Into<String>, text: impl Into<String>) {
        let key = key.into();
        let text = text.into();
        if text.is_empty() {
            self.columns.remove(&key);
        } else {
            self.columns.insert(key, text);
        }
    }

    /// Iterates over active column filters in key order.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if any filter would exclude rows.
    pub fn is_active(&self) -> bool {
        !self.global.is_empty() || !self.columns.is_empty()
    }

    pub fn clear(&mut self) {
        self.columns.clear();
        self.global.clear();
    }
}
