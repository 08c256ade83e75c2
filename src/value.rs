// SPDX-License-Identifier: MPL-2.0
//! The translation value tree shared by every localizator.
//!
//! Translation files decode into a [`TranslationMap`]: keys map either to a
//! text leaf or to a nested table. The enum is serde-untagged so both the
//! TOML and the JSON localizators deserialize straight into it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from translation keys to entries, possibly nested.
pub type TranslationMap = BTreeMap<String, Translation>;

/// A single translation entry.
///
/// Values in a translation file must be strings or nested tables; anything
/// else (numbers, booleans, arrays) is rejected by the loader as malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translation {
    /// A translated text value.
    Text(String),

    /// A nested group of translations.
    Table(TranslationMap),
}

impl Translation {
    /// Returns the text value, or `None` for a table.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Translation::Text(text) => Some(text),
            Translation::Table(_) => None,
        }
    }

    /// Returns the nested table, or `None` for a text leaf.
    #[must_use]
    pub fn as_table(&self) -> Option<&TranslationMap> {
        match self {
            Translation::Text(_) => None,
            Translation::Table(table) => Some(table),
        }
    }
}

impl From<&str> for Translation {
    fn from(text: &str) -> Self {
        Translation::Text(text.to_string())
    }
}

impl From<String> for Translation {
    fn from(text: String) -> Self {
        Translation::Text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_text_returns_leaf_value() {
        let entry = Translation::from("Hello");
        assert_eq!(entry.as_text(), Some("Hello"));
        assert!(entry.as_table().is_none());
    }

    #[test]
    fn as_table_returns_nested_map() {
        let mut inner = TranslationMap::new();
        inner.insert("title".to_string(), Translation::from("Hello"));
        let entry = Translation::Table(inner);

        assert!(entry.as_text().is_none());
        let table = entry.as_table().expect("expected a table");
        assert_eq!(table["title"].as_text(), Some("Hello"));
    }

    #[test]
    fn untagged_decode_distinguishes_text_and_tables() {
        let decoded: TranslationMap =
            serde_json::from_str(r#"{"site": {"title": "Hello"}, "plain": "Hi"}"#)
                .expect("decode should succeed");

        assert!(decoded["site"].as_table().is_some());
        assert_eq!(decoded["plain"].as_text(), Some("Hi"));
    }
}
