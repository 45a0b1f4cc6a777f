//! Configuration struct definitions.

use serde::Deserialize;

/// Timestamp layout used when a config does not name one: `2016/01/02 15:04:05`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One level (or `|`-joined set of levels) bound to one destination.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerSpec {
    /// Case-insensitive severity tag, e.g. `debug` or `DEBUG|INFO`.
    pub level: String,
    /// `STDOUT`, `STDERR`, or a file path.
    #[serde(alias = "file")]
    pub destination: String,
}

impl LoggerSpec {
    #[must_use]
    pub fn new(level: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            destination: destination.into(),
        }
    }
}

/// Everything [`Registry::initialize`](crate::Registry::initialize) needs for one namespace.
///
/// `#[serde(default)]` so a file only has to list what differs from the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Logical subsystem name; empty means the root namespace.
    pub namespace: String,
    /// Prefix lines with `namespace-LEVEL` instead of `LEVEL`.
    #[serde(alias = "showNamespace")]
    pub show_namespace: bool,
    /// Applied in order.
    #[serde(alias = "Loggers")]
    pub loggers: Vec<LoggerSpec>,
    /// chrono strftime layout for the leading timestamp.
    #[serde(alias = "timestampFormat")]
    pub timestamp_format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            show_namespace: false,
            loggers: Vec::new(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LogConfig {
    /// Empty config for `namespace`.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn show_namespace(mut self, show: bool) -> Self {
        self.show_namespace = show;
        self
    }

    /// Appends a level/destination pair.
    #[must_use]
    pub fn logger(mut self, level: impl Into<String>, destination: impl Into<String>) -> Self {
        self.loggers.push(LoggerSpec::new(level, destination));
        self
    }

    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }
}
