// SPDX-License-Identifier: MPL-2.0
//! `lang_lens` resolves localized text strings from language files on disk.
//!
//! A validated configuration selects a storage driver (`array` TOML files,
//! `json` per-language files, or `gettext` catalogs) and language
//! directories. [`Localization::lang`] resolves a dotted key like
//! `messages.welcome` to the file that backs it, merges the default-language
//! base layer with the requested language's own entries, descends the dotted
//! path, and applies ordered placeholder substitution.
//!
//! Missing translation *keys* resolve to an empty string so rendering never
//! breaks; missing translation *files* and invalid configuration are hard
//! errors.
//!
//! ```no_run
//! use lang_lens::{Localization, Settings};
//!
//! let settings = Settings {
//!     driver: Some("json".to_string()),
//!     lang_dir: Some("/app/lang/".to_string()),
//!     default_lang: Some("en".to_string()),
//!     fall_back_lang: Some(String::new()),
//!     ..Settings::default()
//! };
//!
//! let mut translator = Localization::new(settings)?;
//! let greeting = translator.lang("site.greeting", &[(":name", "Ann")])?;
//! # Ok::<(), lang_lens::Error>(())
//! ```

#![doc(html_root_url = "https://docs.rs/lang_lens/0.2.0")]

pub mod config;
pub mod error;
pub mod localization;
pub mod localizators;
pub mod value;

pub use config::{Config, Driver, Settings};
pub use error::{Error, Result};
pub use localization::Localization;
pub use localizators::{ArrayLocalizator, GettextLocalizator, JsonLocalizator, Localizator};
pub use value::{Translation, TranslationMap};
