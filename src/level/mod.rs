//! Severity levels and the tag normalization every binding and lookup goes through.
//!
//! Routing keys stay plain strings so callers can invent their own levels, but the
//! four built-in levels get canonical names so aliases like `warning` land on `WARN`.

use crate::fmt::AnsiColor;
use std::fmt;
use std::str::FromStr;

/// The closed set of severities the color palette knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Development-time detail.
    Debug,
    /// Normal operational milestones.
    Info,
    /// Non-fatal anomalies.
    Warn,
    /// Failures.
    Error,
}

impl Level {
    /// Uppercase because registry keys and line prefixes are uppercase.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Fixed palette used when a sink is an interactive terminal.
    #[must_use]
    pub const fn color(self) -> AnsiColor {
        match self {
            Self::Debug => AnsiColor::Cyan,
            Self::Info => AnsiColor::Blue,
            Self::Warn => AnsiColor::Yellow,
            Self::Error => AnsiColor::Red,
        }
    }

    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Debug, Self::Info, Self::Warn, Self::Error]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for tags outside the built-in set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARN" | "WARNING" => Ok(Self::Warn),
            "ERROR" | "ERR" => Ok(Self::Error),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Turns a user-supplied level tag into the registry key.
///
/// Known levels collapse onto their canonical name; anything else is kept,
/// uppercased, so custom levels stay routable.
#[must_use]
pub fn normalize(tag: &str) -> String {
    tag.parse::<Level>()
        .map_or_else(|_| tag.trim().to_uppercase(), |level| level.as_str().to_string())
}

/// Splits a `DEBUG|INFO` style tag into normalized keys, dropping empty pieces
/// and duplicates while keeping first-seen order.
#[must_use]
pub fn split_tags(tag: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for piece in tag.split('|') {
        if piece.trim().is_empty() {
            continue;
        }
        let key = normalize(piece);
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

/// Palette lookup for a registry key; unknown keys get the terminal default.
#[must_use]
pub fn color_for(key: &str) -> AnsiColor {
    key.parse::<Level>().map_or(AnsiColor::Default, Level::color)
}
