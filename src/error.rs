// SPDX-License-Identifier: MPL-2.0
use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by configuration validation, file resolution, and the
/// format loaders.
///
/// All of these are unrecoverable for the current call and propagate to the
/// caller immediately. The one deliberate soft failure in the crate is a
/// missing translation key during lookup, which yields an empty string and
/// never an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A required configuration option is absent from the input.
    MissingConfig(String),

    /// A configuration value failed a type, emptiness, or allowed-set check.
    InvalidValue(String),

    /// A required directory or file does not exist on disk.
    FileNotFound(PathBuf),

    /// The configured driver has no registered localizator.
    LoaderNotFound(String),

    /// `lang()` was called with an empty key.
    EmptyKey,

    /// A translation file exists but could not be parsed.
    Malformed { path: PathBuf, detail: String },

    /// Any other filesystem failure (permissions, broken links, ...).
    Io(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingConfig(key) => write!(f, "Missing required config option: {key}"),
            Error::InvalidValue(detail) => write!(f, "Invalid config value: {detail}"),
            Error::FileNotFound(path) => {
                write!(f, "File or directory not found: {}", path.display())
            }
            Error::LoaderNotFound(driver) => {
                write!(f, "No localizator registered for driver: {driver}")
            }
            Error::EmptyKey => write!(f, "Lookup key can not be empty"),
            Error::Malformed { path, detail } => {
                write!(f, "Malformed translation file {}: {detail}", path.display())
            }
            Error::Io(detail) => write!(f, "I/O error: {detail}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::InvalidValue(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::InvalidValue(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_missing_config() {
        let err = Error::MissingConfig("langDir".to_string());
        assert_eq!(
            format!("{}", err),
            "Missing required config option: langDir"
        );
    }

    #[test]
    fn display_formats_file_not_found_with_path() {
        let err = Error::FileNotFound(PathBuf::from("/lang/en"));
        assert!(format!("{}", err).contains("/lang/en"));
    }

    #[test]
    fn display_formats_empty_key() {
        assert_eq!(format!("{}", Error::EmptyKey), "Lookup key can not be empty");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn from_toml_error_produces_invalid_value() {
        let toml_error =
            toml::from_str::<toml::Table>("not = valid = toml").expect_err("parse should fail");
        let err: Error = toml_error.into();
        assert!(matches!(err, Error::InvalidValue(_)));
    }

    #[test]
    fn malformed_mentions_path_and_detail() {
        let err = Error::Malformed {
            path: PathBuf::from("/lang/en/messages.toml"),
            detail: "unexpected token".to_string(),
        };
        let rendered = format!("{}", err);
        assert!(rendered.contains("messages.toml"));
        assert!(rendered.contains("unexpected token"));
    }
}
