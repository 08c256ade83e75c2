// SPDX-License-Identifier: MPL-2.0
//! Format loaders ("localizators") and the driver registry.
//!
//! Each storage driver is backed by one localizator that knows how to read a
//! single translation file into a [`TranslationMap`]. The engine picks the
//! implementation once, at construction, through the registry below; callers
//! with custom formats can bypass it via
//! [`Localization::with_localizator`](crate::Localization::with_localizator).

mod array;
mod gettext;
mod json;

pub use array::ArrayLocalizator;
pub use gettext::GettextLocalizator;
pub use json::JsonLocalizator;

use crate::config::Driver;
use crate::error::{Error, Result};
use crate::value::TranslationMap;
use std::fs;
use std::path::Path;

// =============================================================================
// Localizator Trait
// =============================================================================

/// Capability implemented by every storage driver: load all key/value pairs
/// from one translation file.
pub trait Localizator: Send + Sync {
    /// Loads every entry from the file at `path`.
    ///
    /// A file that parses to no entries yields an empty map, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Malformed`] when the file cannot be parsed and
    /// [`Error::FileNotFound`] / [`Error::Io`] when it cannot be read.
    fn all(&self, path: &Path) -> Result<TranslationMap>;
}

// =============================================================================
// Registry
// =============================================================================

type Factory = fn() -> Box<dyn Localizator>;

fn array_localizator() -> Box<dyn Localizator> {
    Box::new(ArrayLocalizator)
}

fn json_localizator() -> Box<dyn Localizator> {
    Box::new(JsonLocalizator)
}

fn gettext_localizator() -> Box<dyn Localizator> {
    Box::new(GettextLocalizator)
}

/// Driver-to-factory table consulted once at engine construction.
const REGISTRY: &[(Driver, Factory)] = &[
    (Driver::Array, array_localizator),
    (Driver::Json, json_localizator),
    (Driver::Gettext, gettext_localizator),
];

/// Resolves the localizator registered for `driver`.
///
/// # Errors
///
/// Returns [`Error::LoaderNotFound`] when no factory is registered for the
/// driver.
pub fn localizator_for(driver: Driver) -> Result<Box<dyn Localizator>> {
    REGISTRY
        .iter()
        .find(|(registered, _)| *registered == driver)
        .map(|(_, factory)| factory())
        .ok_or_else(|| Error::LoaderNotFound(driver.as_str().to_string()))
}

/// Reads a translation file into memory, mapping a missing file to
/// [`Error::FileNotFound`] so loaders report the same error kind the
/// resolver does.
pub(crate) fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Io(err.to_string()),
    })
}
