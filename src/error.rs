//! Error type for the fallible parts of nslog: loading configuration.
//!
//! Logging itself never returns errors; see the registry docs.

use std::path::PathBuf;

/// Error type for nslog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    TomlParse(toml::de::Error),
    /// JSON config parsing error.
    JsonParse(serde_json::Error),
    /// Config file extension is neither `.toml` nor `.json`.
    UnsupportedFormat(PathBuf),
    /// Config directory not found.
    ConfigDirNotFound,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::TomlParse(e) => write!(f, "parse error: {e}"),
            Self::JsonParse(e) => write!(f, "parse error: {e}"),
            Self::UnsupportedFormat(p) => {
                write!(f, "unsupported config format: {}", p.display())
            }
            Self::ConfigDirNotFound => write!(f, "config directory not found"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::TomlParse(e) => Some(e),
            Self::JsonParse(e) => Some(e),
            Self::UnsupportedFormat(_) | Self::ConfigDirNotFound => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::TomlParse(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::JsonParse(e)
    }
}
