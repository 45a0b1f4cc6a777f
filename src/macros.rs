//! Macros that convert bare arguments into [`Arg`](crate::Arg)s.
//!
//! ```
//! nslog::info!("listening on %s:%d", "0.0.0.0", 8080);
//! nslog::error!(in "db"; "query failed after %dms", 31);
//!
//! let registry = nslog::Registry::new();
//! nslog::debug!(registry => "cache size %d", 12);
//! nslog::warning!(registry => in "net"; "retrying %s", "peer-1");
//! nslog::message!(registry => "net", "audit", "user %s", "ana");
//! ```

/// Emits at an explicit namespace and level tag.
///
/// `message!(namespace, level, format, args...)` targets the process registry;
/// `message!(registry => namespace, level, format, args...)` targets `registry`.
#[macro_export]
macro_rules! message {
    ($registry:expr => $ns:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $registry.emit($ns, $level, $fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($ns:expr, $level:expr, $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global().emit($ns, $level, $fmt, &[$($crate::Arg::from($arg)),*])
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_at {
    ($method:ident, $method_in:ident; in $ns:expr; $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global().$method_in($ns, $fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($method:ident, $method_in:ident; $registry:expr => in $ns:expr; $fmt:expr $(, $arg:expr)* $(,)?) => {
        $registry.$method_in($ns, $fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($method:ident, $method_in:ident; $registry:expr => $fmt:expr $(, $arg:expr)* $(,)?) => {
        $registry.$method($fmt, &[$($crate::Arg::from($arg)),*])
    };
    ($method:ident, $method_in:ident; $fmt:expr $(, $arg:expr)* $(,)?) => {
        $crate::global().$method($fmt, &[$($crate::Arg::from($arg)),*])
    };
}

/// `DEBUG` in the default namespace, or `in ns;` for an explicit one.
#[macro_export]
macro_rules! debug {
    ($($tokens:tt)*) => {
        $crate::__log_at!(debug, debug_in; $($tokens)*)
    };
}

/// `INFO` in the default namespace, or `in ns;` for an explicit one.
#[macro_export]
macro_rules! info {
    ($($tokens:tt)*) => {
        $crate::__log_at!(info, info_in; $($tokens)*)
    };
}

/// `WARN` in the default namespace, or `in ns;` for an explicit one.
#[macro_export]
macro_rules! warning {
    ($($tokens:tt)*) => {
        $crate::__log_at!(warning, warning_in; $($tokens)*)
    };
}

/// `ERROR` in the default namespace, or `in ns;` for an explicit one.
#[macro_export]
macro_rules! error {
    ($($tokens:tt)*) => {
        $crate::__log_at!(error, error_in; $($tokens)*)
    };
}
