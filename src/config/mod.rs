//! Loading a [`LogConfig`] from TOML or JSON.
//!
//! The registry only ever sees a `LogConfig` value; files are a convenience for
//! embedders that would rather not build one in code.

mod structs;

pub use structs::{DEFAULT_TIMESTAMP_FORMAT, LogConfig, LoggerSpec};

use std::fs;
use std::path::{Path, PathBuf};

impl LogConfig {
    /// Loads `<config dir>/nslog/nslog.toml`, or the default config when that file is absent.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file can't be read or parsed.
    pub fn load() -> Result<Self, crate::Error> {
        Self::load_or_default(&Self::default_path()?)
    }

    /// Like [`load_from`](Self::load_from), but a missing file yields the default config.
    ///
    /// # Errors
    /// Same as [`load_from`](Self::load_from) for a file that exists.
    pub fn load_or_default(path: &Path) -> Result<Self, crate::Error> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Loads from an explicit path; the extension (`.toml` or `.json`) selects the parser.
    ///
    /// # Errors
    /// Unknown extension, unreadable file, or a syntax error.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&fs::read_to_string(path)?),
            Some("json") => Self::from_json_str(&fs::read_to_string(path)?),
            _ => Err(crate::Error::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// # Errors
    /// TOML syntax or schema errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// Accepts the camelCase field names (`showNamespace`, `Loggers`, `file`) as well.
    ///
    /// # Errors
    /// JSON syntax or schema errors.
    pub fn from_json_str(content: &str) -> Result<Self, crate::Error> {
        Ok(serde_json::from_str(content)?)
    }

    /// XDG-style location: `~/.config/nslog/nslog.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn default_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("nslog").join("nslog.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
