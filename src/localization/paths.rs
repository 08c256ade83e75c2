// SPDX-License-Identifier: MPL-2.0
//! Target-file resolution for translation lookups.
//!
//! The first segment of a dotted key selects the topic file for the sharded
//! drivers (`array`, `gettext`); the `json` driver keeps one file per
//! language, so the key never influences the path. Resolution happens on
//! every lookup — a new key may map to a new file.

use crate::config::{self, Config, Driver};
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Computes the canonicalized path of the file backing `key`.
///
/// The engine rejects empty keys before calling this.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] when the base language path or the
/// computed target file does not exist.
pub fn resolve_file(key: &str, config: &Config, driver: Driver) -> Result<PathBuf> {
    let base = config.default_lang()?;

    let target = match driver {
        Driver::Json => config::append_extension(&base, driver.extension()),
        Driver::Array | Driver::Gettext => {
            let file = key.split('.').next().unwrap_or(key);
            base.join(format!("{file}{}", driver.extension()))
        }
    };

    if target.is_file() {
        canonical(&target)
    } else {
        Err(Error::FileNotFound(target))
    }
}

fn canonical(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(err.to_string()),
    })
}
