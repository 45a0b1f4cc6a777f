//! Line prefixes are computed once at bind time, so emitting is just a concatenation.

use super::color::colorize;
use crate::level;

/// `LEVEL`, or `namespace-LEVEL` when the namespace should be shown.
#[must_use]
pub fn display_name(namespace: &str, level_key: &str, show_namespace: bool) -> String {
    if show_namespace {
        format!("{namespace}-{level_key}")
    } else {
        level_key.to_string()
    }
}

/// `[name]`, wrapped in the level's palette color when the sink is a terminal.
#[must_use]
pub fn build_prefix(name: &str, level_key: &str, interactive: bool) -> String {
    let tag = format!("[{name}]");
    if interactive {
        colorize(&tag, level::color_for(level_key))
    } else {
        tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_prefix_has_no_escapes() {
        assert_eq!(build_prefix("INFO", "INFO", false), "[INFO]");
    }

    #[test]
    fn interactive_prefix_is_colored_by_level() {
        assert_eq!(
            build_prefix("net-DEBUG", "DEBUG", true),
            "\x1b[36m[net-DEBUG]\x1b[0m"
        );
        assert_eq!(build_prefix("AUDIT", "AUDIT", true), "\x1b[0m[AUDIT]\x1b[0m");
    }

    #[test]
    fn display_name_with_empty_namespace() {
        assert_eq!(display_name("", "WARN", true), "-WARN");
        assert_eq!(display_name("", "WARN", false), "WARN");
    }
}
