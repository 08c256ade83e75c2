// SPDX-License-Identifier: MPL-2.0
//! The `gettext` driver: plain-text `.po` catalogs.
//!
//! Only singular `msgid`/`msgstr` pairs are read. Plural forms and `msgctxt`
//! entries are skipped (the crate has no pluralization rules), and the
//! catalog header (the entry with an empty `msgid`) is dropped. `.po`
//! catalogs are flat, so dotted keys are stored and matched literally.

use super::{read_source, Localizator};
use crate::error::{Error, Result};
use crate::value::{Translation, TranslationMap};
use std::path::Path;

/// Localizator for gettext `.po` catalogs.
pub struct GettextLocalizator;

impl Localizator for GettextLocalizator {
    fn all(&self, path: &Path) -> Result<TranslationMap> {
        let source = read_source(path)?;
        parse_catalog(&source, path)
    }
}

/// Which field a bare continuation string belongs to.
enum Field {
    Idle,
    Msgid,
    Msgstr,
    Skipped,
}

fn parse_catalog(source: &str, path: &Path) -> Result<TranslationMap> {
    let mut entries = TranslationMap::new();
    let mut field = Field::Idle;
    let mut msgid = String::new();
    let mut msgstr: Option<String> = None;

    for (index, raw) in source.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(rest) = line.strip_prefix("msgid ") {
            commit(&mut entries, &mut msgid, &mut msgstr);
            msgid = parse_quoted(rest, path, index)?;
            field = Field::Msgid;
        } else if let Some(rest) = line.strip_prefix("msgstr ") {
            if !matches!(field, Field::Msgid) {
                return Err(malformed(path, index, "msgstr without a preceding msgid"));
            }
            msgstr = Some(parse_quoted(rest, path, index)?);
            field = Field::Msgstr;
        } else if line.starts_with("msgid_plural")
            || line.starts_with("msgstr[")
            || line.starts_with("msgctxt")
        {
            field = Field::Skipped;
        } else if line.starts_with('"') {
            let continuation = parse_quoted(line, path, index)?;
            match field {
                Field::Msgid => msgid.push_str(&continuation),
                Field::Msgstr => {
                    if let Some(value) = msgstr.as_mut() {
                        value.push_str(&continuation);
                    }
                }
                Field::Skipped => {}
                Field::Idle => {
                    return Err(malformed(path, index, "stray string outside an entry"));
                }
            }
        } else {
            return Err(malformed(path, index, "unrecognized line"));
        }
    }

    commit(&mut entries, &mut msgid, &mut msgstr);
    Ok(entries)
}

/// Stores the pending pair. Entries with an empty msgid (the header) and
/// entries without a msgstr are dropped.
fn commit(entries: &mut TranslationMap, msgid: &mut String, msgstr: &mut Option<String>) {
    if let Some(value) = msgstr.take() {
        if !msgid.is_empty() {
            entries.insert(std::mem::take(msgid), Translation::Text(value));
            return;
        }
    }
    msgid.clear();
}

/// Decodes one double-quoted `.po` string with its escape sequences.
fn parse_quoted(fragment: &str, path: &Path, index: usize) -> Result<String> {
    let fragment = fragment.trim();
    let inner = fragment
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| malformed(path, index, "expected a double-quoted string"))?;

    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('"') => decoded.push('"'),
            Some('\\') => decoded.push('\\'),
            _ => return Err(malformed(path, index, "invalid escape sequence")),
        }
    }
    Ok(decoded)
}

fn malformed(path: &Path, index: usize, detail: &str) -> Error {
    Error::Malformed {
        path: path.to_path_buf(),
        detail: format!("line {}: {detail}", index + 1),
    }
}
