// SPDX-License-Identifier: MPL-2.0
//! The translation resolution engine.
//!
//! [`Localization`] ties the validated configuration, the driver's
//! localizator, and the merge/fallback rules together behind one entry
//! point, [`Localization::lang`]. For each lookup it resolves the backing
//! file, merges the default-language base layer with the app layer (app
//! entries win on collision, top-level only), descends the dotted key, and
//! applies ordered placeholder substitution.
//!
//! Missing translation keys are a soft miss and resolve to an empty string;
//! missing files and invalid configuration are hard errors. Keep that
//! asymmetry in mind when wiring error reporting around the engine.

pub mod paths;

use crate::config::{self, Config, Driver, Settings};
use crate::error::{Error, Result};
use crate::localizators::{localizator_for, Localizator};
use crate::value::{Translation, TranslationMap};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Resolves dotted translation keys against language files on disk.
///
/// One engine owns one single-slot cache of the merged mapping for the most
/// recently resolved file. `lang` therefore takes `&mut self`; sharing an
/// engine across threads requires external mutual exclusion, which the
/// borrow checker enforces by construction.
pub struct Localization {
    config: Config,
    driver: Driver,
    localizator: Box<dyn Localizator>,
    cache: Option<CachedSet>,
}

/// Single-slot memo of the merged mapping for one resolved file.
struct CachedSet {
    file: PathBuf,
    translations: TranslationMap,
}

impl std::fmt::Debug for Localization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Localization")
            .field("config", &self.config)
            .field("driver", &self.driver)
            .field("localizator", &"<dyn Localizator>")
            .field("cache", &self.cache.as_ref().map(|c| &c.file))
            .finish()
    }
}

impl Localization {
    /// Builds an engine from raw settings.
    ///
    /// The driver is validated and its localizator resolved here, not on
    /// first use.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation errors, plus
    /// [`Error::LoaderNotFound`] when the driver has no registered
    /// localizator.
    pub fn new(settings: Settings) -> Result<Self> {
        let config = Config::new(settings)?;
        let driver = config.driver()?;
        let localizator = localizator_for(driver)?;
        Ok(Self {
            config,
            driver,
            localizator,
            cache: None,
        })
    }

    /// Builds an engine from a TOML settings file.
    ///
    /// # Errors
    ///
    /// Propagates file and decode errors from
    /// [`config::load_from_path`] and everything [`Localization::new`]
    /// raises.
    pub fn from_config_path(path: &Path) -> Result<Self> {
        Self::new(config::load_from_path(path)?)
    }

    /// Builds an engine with a caller-supplied localizator instead of the
    /// registered one, for custom file formats.
    ///
    /// # Errors
    ///
    /// Propagates configuration validation errors.
    pub fn with_localizator(settings: Settings, localizator: Box<dyn Localizator>) -> Result<Self> {
        let config = Config::new(settings)?;
        let driver = config.driver()?;
        Ok(Self {
            config,
            driver,
            localizator,
            cache: None,
        })
    }

    /// Retrieves the translation for a dotted key, or the whole file mapping.
    ///
    /// For the sharded drivers the first key segment selects the file and the
    /// remainder is the lookup path; a single-segment key requests the entire
    /// merged mapping of that file. The json driver uses the full key
    /// against its per-language file.
    ///
    /// A missing key or empty value resolves to `Text("")`. Replacement
    /// pairs apply case-insensitively, in the order given; substituted text
    /// is inserted literally and is only visible to the pairs that follow.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyKey`] for an empty key, [`Error::FileNotFound`] when the
    /// backing file is absent, and any localizator parse error.
    pub fn lang(&mut self, key: &str, replacements: &[(&str, &str)]) -> Result<Translation> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }

        let file = paths::resolve_file(key, &self.config, self.driver)?;
        let lookup_key = if self.driver == Driver::Json {
            // Single file per language: the full key addresses flat entries
            // ("site.title": ...) as well as nested trees.
            Some(key.to_string())
        } else {
            translate_key(key)
        };

        let translations = self.merged_translations(&file)?;
        let Some(lookup_key) = lookup_key else {
            return Ok(Translation::Table(translations));
        };

        let found = translations
            .get(&lookup_key)
            .cloned()
            .or_else(|| nested_value(&translations, &lookup_key));

        let text = match found {
            Some(Translation::Table(table)) => return Ok(Translation::Table(table)),
            Some(Translation::Text(text)) => text,
            None => String::new(),
        };

        if text.is_empty() || replacements.is_empty() {
            return Ok(Translation::Text(text));
        }

        let mut rendered = text;
        for (placeholder, value) in replacements {
            rendered = replace_ignore_case(&rendered, placeholder, value);
        }
        Ok(Translation::Text(rendered))
    }

    fn merged_translations(&mut self, file: &Path) -> Result<TranslationMap> {
        if let Some(cached) = &self.cache {
            if cached.file == file {
                trace!(file = %file.display(), "translation cache hit");
                return Ok(cached.translations.clone());
            }
        }

        debug!(file = %file.display(), "merging translation layers");
        let translations = self.load_merged(file)?;
        self.cache = Some(CachedSet {
            file: file.to_path_buf(),
            translations: translations.clone(),
        });
        Ok(translations)
    }

    fn load_merged(&self, file: &Path) -> Result<TranslationMap> {
        let mut merged = self.base_layer(file)?;

        let mut app = self.localizator.all(file)?;
        if app.is_empty() {
            if let Some(fallback) = self.config.fall_back_lang()? {
                if let Some(substitute) = self.fallback_file(file, &fallback) {
                    if substitute.is_file() {
                        debug!(file = %substitute.display(), "app layer empty, using fallback language");
                        app = self.localizator.all(&substitute)?;
                    }
                }
            }
        }

        // Shallow top-level merge: app entries fully replace same-named base
        // entries, nested subtrees are never merged.
        merged.extend(app);
        Ok(merged)
    }

    /// Loads the base layer from the default-translations directory: the
    /// file sharing the resolved file's name, or failing that the fallback
    /// language's own file.
    fn base_layer(&self, file: &Path) -> Result<TranslationMap> {
        let Some(default_dir) = self.config.default_lang_dir()? else {
            return Ok(TranslationMap::new());
        };
        let Some(name) = file.file_name() else {
            return Ok(TranslationMap::new());
        };

        let default_file = default_dir.join(name);
        if default_file.is_file() {
            debug!(file = %default_file.display(), "loading default-translations base layer");
            return self.localizator.all(&default_file);
        }

        if let Some(fallback) = self.config.fall_back_lang()? {
            if let Some(lang) = fallback.file_name() {
                let mut file_name = lang.to_os_string();
                file_name.push(self.driver.extension());
                let fallback_file = default_dir.join(file_name);
                if fallback_file.is_file() {
                    debug!(file = %fallback_file.display(), "loading fallback base layer");
                    return self.localizator.all(&fallback_file);
                }
            }
        }

        Ok(TranslationMap::new())
    }

    /// Re-derives the resolved file's path with the fallback language
    /// substituted for the default-language segment.
    fn fallback_file(&self, file: &Path, fallback: &Path) -> Option<PathBuf> {
        match self.driver {
            Driver::Json => Some(config::append_extension(fallback, self.driver.extension())),
            Driver::Array | Driver::Gettext => file.file_name().map(|name| fallback.join(name)),
        }
    }
}

/// Strips the file-selecting first segment from a sharded-driver key.
/// `None` means the key had a single segment: the caller wants the whole
/// file mapping.
fn translate_key(key: &str) -> Option<String> {
    key.split_once('.').map(|(_, rest)| rest.to_string())
}

/// Descends the mapping tree along the dotted path. A missing segment or a
/// text value in an intermediate position is a miss, not an error.
fn nested_value(translations: &TranslationMap, key: &str) -> Option<Translation> {
    let mut current = translations;
    let mut segments = key.split('.').peekable();

    while let Some(segment) = segments.next() {
        let entry = current.get(segment)?;
        if segments.peek().is_none() {
            return Some(entry.clone());
        }
        match entry {
            Translation::Table(table) => current = table,
            Translation::Text(_) => return None,
        }
    }
    None
}

/// Replaces every occurrence of `needle`, matching ASCII case-insensitively,
/// in one left-to-right pass. Replacement text is emitted as-is and never
/// rescanned.
fn replace_ignore_case(haystack: &str, needle: &str, replacement: &str) -> String {
    if needle.is_empty() {
        return haystack.to_string();
    }

    let mut result = String::with_capacity(haystack.len());
    let width = needle.len();
    let mut index = 0;

    while index < haystack.len() {
        if index + width <= haystack.len()
            && haystack.is_char_boundary(index + width)
            && haystack.as_bytes()[index..index + width].eq_ignore_ascii_case(needle.as_bytes())
        {
            result.push_str(replacement);
            index += width;
            continue;
        }
        match haystack[index..].chars().next() {
            Some(ch) => {
                result.push(ch);
                index += ch.len_utf8();
            }
            None => break,
        }
    }

    result
}
