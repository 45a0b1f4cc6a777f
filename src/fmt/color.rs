//! Prefix coloring uses the basic 8-color SGR set so it renders on any terminal,
//! not just true-color ones.

use std::fmt;

/// Foreground colors from the basic SGR palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnsiColor {
    Red,
    Yellow,
    Blue,
    Cyan,
    /// Resets to the terminal's own foreground; used for levels outside the palette.
    #[default]
    Default,
}

impl AnsiColor {
    /// Terminates any active SGR styling.
    pub const RESET: &'static str = "\x1b[0m";

    /// The SGR parameter plus its final byte, e.g. `36m` for cyan.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Red => "31m",
            Self::Yellow => "33m",
            Self::Blue => "34m",
            Self::Cyan => "36m",
            Self::Default => "0m",
        }
    }

    /// Full escape sequence that switches the foreground to this color.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}", self.code())
    }
}

impl fmt::Display for AnsiColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fg_ansi())
    }
}

/// Wraps `text` in this color and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: AnsiColor) -> String {
    format!("{color}{text}{}", AnsiColor::RESET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_basic_palette() {
        assert_eq!(AnsiColor::Cyan.code(), "36m");
        assert_eq!(AnsiColor::Blue.code(), "34m");
        assert_eq!(AnsiColor::Yellow.code(), "33m");
        assert_eq!(AnsiColor::Red.code(), "31m");
    }

    #[test]
    fn display_writes_the_escape_sequence() {
        assert_eq!(AnsiColor::Cyan.to_string(), "\x1b[36m");
        assert_eq!(AnsiColor::Default.to_string(), "\x1b[0m");
    }

    #[test]
    fn colorize_appends_reset() {
        assert_eq!(colorize("x", AnsiColor::Red), "\x1b[31mx\x1b[0m");
    }
}
