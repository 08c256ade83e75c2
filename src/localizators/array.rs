// SPDX-License-Identifier: MPL-2.0
//! The `array` driver: TOML table files.
//!
//! A topic file holds one table of translations; nested TOML tables become
//! nested [`Translation::Table`](crate::value::Translation::Table) groups.

use super::{read_source, Localizator};
use crate::error::{Error, Result};
use crate::value::TranslationMap;
use std::path::Path;

/// Localizator for `.toml` translation files.
pub struct ArrayLocalizator;

impl Localizator for ArrayLocalizator {
    fn all(&self, path: &Path) -> Result<TranslationMap> {
        let source = read_source(path)?;
        if source.trim().is_empty() {
            return Ok(TranslationMap::new());
        }
        toml::from_str(&source).map_err(|err| Error::Malformed {
            path: path.to_path_buf(),
            detail: err.to_string(),
        })
    }
}
