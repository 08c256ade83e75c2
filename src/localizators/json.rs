// SPDX-License-Identifier: MPL-2.0
//! The `json` driver: one JSON file per language, flat or nested.

use super::{read_source, Localizator};
use crate::error::{Error, Result};
use crate::value::TranslationMap;
use std::path::Path;

/// Localizator for `.json` translation files.
pub struct JsonLocalizator;

impl Localizator for JsonLocalizator {
    fn all(&self, path: &Path) -> Result<TranslationMap> {
        let source = read_source(path)?;
        if source.trim().is_empty() {
            return Ok(TranslationMap::new());
        }
        serde_json::from_str(&source).map_err(|err| Error::Malformed {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    }
}
