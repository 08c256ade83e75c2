// SPDX-License-Identifier: MPL-2.0
//! Configuration surface and validated model.
//!
//! [`Settings`] is the raw input: a set of named options that can be built in
//! code or loaded from a `settings.toml`-style file. [`Config`] owns the
//! options after construction-time presence and emptiness validation.
//!
//! Filesystem checks are deliberately deferred to the typed accessors
//! (`driver()`, `lang_dir()`, ...) rather than performed at construction, so
//! a configuration can be built and inspected without the language tree
//! present; every field is still verified before the engine consumes it.
//!
//! # Examples
//!
//! ```no_run
//! use lang_lens::config::{Config, Settings};
//!
//! let settings = Settings {
//!     driver: Some("array".to_string()),
//!     lang_dir: Some("/app/lang/".to_string()),
//!     default_lang: Some("en".to_string()),
//!     fall_back_lang: Some("fr".to_string()),
//!     ..Settings::default()
//! };
//!
//! let config = Config::new(settings)?;
//! let lang_dir = config.lang_dir()?;
//! # Ok::<(), lang_lens::Error>(())
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Driver
// =============================================================================

/// Storage driver backing the translation files.
///
/// The driver determines the file extension and the on-disk layout: `array`
/// and `gettext` shard translations into one file per first key segment,
/// `json` keeps a single file per language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Driver {
    /// TOML table files, one topic file per first key segment.
    Array,

    /// JSON files, one file per language.
    Json,

    /// Gettext `.po` catalogs, one per first key segment.
    Gettext,
}

impl Driver {
    /// Parses a configured driver name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidValue`] for names outside the allowed set.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "array" => Ok(Driver::Array),
            "json" => Ok(Driver::Json),
            "gettext" => Ok(Driver::Gettext),
            _ => Err(Error::InvalidValue(format!("{value} driver not allowed"))),
        }
    }

    /// The file extension for this driver, including the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Driver::Array => ".toml",
            Driver::Json => ".json",
            Driver::Gettext => ".po",
        }
    }

    /// The canonical configuration name of this driver.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Driver::Array => "array",
            Driver::Json => "json",
            Driver::Gettext => "gettext",
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Raw, unvalidated configuration options.
///
/// Field names on the TOML surface use the camelCase option names
/// (`langDir`, `defaultLangDir`, `defaultLang`, `fallBackLang`); unknown keys
/// in a settings file are ignored.
///
/// `None` means the key is absent. `fallBackLang` is a required *key* whose
/// value may be empty (no fallback language); TOML cannot express null, so
/// an empty string stands in for it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Storage driver name: `array`, `json`, or `gettext`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub driver: Option<String>,

    /// Directory containing one subdirectory (or one JSON file) per language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang_dir: Option<String>,

    /// Optional directory of default translations used as the base layer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang_dir: Option<String>,

    /// The language requested for lookups.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,

    /// Language substituted when the requested language has no data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fall_back_lang: Option<String>,
}

/// Loads [`Settings`] from a TOML file.
///
/// # Errors
///
/// Returns [`Error::FileNotFound`] when the file is absent and
/// [`Error::InvalidValue`] when it does not decode.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves [`Settings`] as TOML, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`Error::Io`] on filesystem failures.
pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Config
// =============================================================================

/// Validated, immutable configuration.
///
/// Construction verifies that every required option is present and non-empty.
/// The accessors re-validate their field against the filesystem on every
/// read, mirroring the lazy directory checks of the options they expose.
#[derive(Debug, Clone)]
pub struct Config {
    driver: String,
    lang_dir: String,
    default_lang_dir: Option<String>,
    default_lang: String,
    fall_back_lang: Option<String>,
}

impl Config {
    /// Validates option presence and emptiness and builds the model.
    ///
    /// `driver`, `langDir`, `defaultLang`, and `fallBackLang` are required
    /// keys; `fallBackLang` and `defaultLangDir` accept empty values, which
    /// normalize to "not configured".
    ///
    /// # Errors
    ///
    /// [`Error::MissingConfig`] for an absent required key,
    /// [`Error::InvalidValue`] for a present-but-empty required value.
    pub fn new(settings: Settings) -> Result<Self> {
        Ok(Self {
            driver: required("driver", settings.driver)?,
            lang_dir: required("langDir", settings.lang_dir)?,
            default_lang_dir: settings.default_lang_dir.filter(|dir| !dir.is_empty()),
            default_lang: required("defaultLang", settings.default_lang)?,
            fall_back_lang: required_nullable("fallBackLang", settings.fall_back_lang)?,
        })
    }

    /// The validated storage driver.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidValue`] when the configured name is not an allowed
    /// driver.
    pub fn driver(&self) -> Result<Driver> {
        Driver::parse(&self.driver)
    }

    /// The canonicalized language directory.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] when it is not an existing directory.
    pub fn lang_dir(&self) -> Result<PathBuf> {
        check_directory(Path::new(&self.lang_dir))
    }

    /// The canonicalized default-translations directory, if configured.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] when configured but not an existing directory.
    pub fn default_lang_dir(&self) -> Result<Option<PathBuf>> {
        match &self.default_lang_dir {
            Some(dir) => check_directory(Path::new(dir)).map(Some),
            None => Ok(None),
        }
    }

    /// The base path of the requested language inside the language directory.
    ///
    /// For the json driver this probes for a sibling `.json` file first and
    /// returns the path *without* its extension when found, so the resolver
    /// can append it; otherwise the path must be an existing directory.
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] when neither form exists.
    pub fn default_lang(&self) -> Result<PathBuf> {
        self.language_path(Path::new(&self.lang_dir).join(&self.default_lang))
    }

    /// The base path of the fallback language, or `None` when not configured.
    ///
    /// Applies the same json-file-first-then-directory check as
    /// [`Config::default_lang`].
    ///
    /// # Errors
    ///
    /// [`Error::FileNotFound`] when configured but absent in both forms.
    pub fn fall_back_lang(&self) -> Result<Option<PathBuf>> {
        match &self.fall_back_lang {
            Some(lang) => self
                .language_path(Path::new(&self.lang_dir).join(lang))
                .map(Some),
            None => Ok(None),
        }
    }

    fn language_path(&self, path: PathBuf) -> Result<PathBuf> {
        if self.driver.eq_ignore_ascii_case(Driver::Json.as_str()) {
            let probe = append_extension(&path, Driver::Json.extension());
            if probe.is_file() {
                return Ok(path);
            }
        }
        check_directory(&path)
    }
}

fn required(key: &str, value: Option<String>) -> Result<String> {
    match value {
        None => Err(Error::MissingConfig(key.to_string())),
        Some(value) if value.is_empty() => Err(Error::InvalidValue(format!(
            "{key} can not be empty or null"
        ))),
        Some(value) => Ok(value),
    }
}

fn required_nullable(key: &str, value: Option<String>) -> Result<Option<String>> {
    match value {
        None => Err(Error::MissingConfig(key.to_string())),
        Some(value) if value.is_empty() => Ok(None),
        Some(value) => Ok(Some(value)),
    }
}

fn check_directory(path: &Path) -> Result<PathBuf> {
    if path.is_dir() {
        Ok(fs::canonicalize(path)?)
    } else {
        Err(Error::FileNotFound(path.to_path_buf()))
    }
}

/// Appends `extension` to the final path component without replacing an
/// existing one, so language names containing dots survive intact.
pub(crate) fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(extension);
    PathBuf::from(raw)
}
