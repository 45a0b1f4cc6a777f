//! The registry: namespace → level → bound logger, and the dispatch that routes each
//! message through it.
//!
//! Routing keys are plain strings. A lookup miss is not an error: the message is
//! dropped, so an application never fails because logging was left unconfigured for
//! some namespace or level.

mod bound;
mod builder;
mod global;

pub use bound::BoundLogger;
pub use builder::RegistryBuilder;
pub use global::{
    debug, debug_in, emit, error, error_in, global, info, info_in, init, set_default_namespace,
    warning, warning_in,
};

use crate::config::{DEFAULT_TIMESTAMP_FORMAT, LogConfig};
use crate::fmt::{Arg, build_prefix, display_name, sprintf};
use crate::internal::Diagnostics;
use crate::level::{self, Level};
use crate::output::{self, Resolve};
use chrono::format::{Item, StrftimeItems};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

type LevelMap = HashMap<String, Arc<BoundLogger>>;

/// Owns every binding plus the default namespace.
///
/// Bindings are read on every emit and written only by [`initialize`](Self::initialize),
/// so both are behind `RwLock`s. Emitting clones the binding's `Arc` and releases the
/// lock before touching the sink.
pub struct Registry {
    loggers: RwLock<HashMap<String, LevelMap>>,
    default_namespace: RwLock<String>,
    resolver: Box<dyn Resolve>,
    diagnostics: Diagnostics,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Empty registry using the standard resolver and standard error for diagnostics.
    #[must_use]
    pub fn new() -> Self {
        RegistryBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    pub(crate) fn from_parts(
        resolver: Box<dyn Resolve>,
        diagnostics: Diagnostics,
        default_namespace: String,
    ) -> Self {
        Self {
            loggers: RwLock::new(HashMap::new()),
            default_namespace: RwLock::new(default_namespace),
            resolver,
            diagnostics,
        }
    }

    /// Binds every logger in `config` under `config.namespace`.
    ///
    /// The namespace's previous level map is replaced as a whole; other namespaces are
    /// untouched. Entries whose destination fails to open are reported on the diagnostic
    /// stream and skipped. Never fails.
    pub fn initialize(&self, config: &LogConfig) {
        let namespace = config.namespace.as_str();
        let timestamp_format = self.checked_timestamp_format(&config.timestamp_format);
        let mut levels = LevelMap::new();

        for spec in &config.loggers {
            let keys = level::split_tags(&spec.level);
            if keys.is_empty() {
                self.diagnostics.debug(&format!(
                    "skipping {} in namespace {namespace:?}: empty level",
                    spec.destination
                ));
                continue;
            }

            let sink = match self.resolver.resolve(&spec.destination) {
                Ok(sink) => sink,
                Err(e) => {
                    self.diagnostics.report(&format!(
                        "fail to open log file {} : {e}",
                        spec.destination
                    ));
                    continue;
                }
            };
            let interactive = sink.is_interactive();
            let sink = output::share(sink);

            for key in keys {
                let name = display_name(namespace, &key, config.show_namespace);
                let prefix = build_prefix(&name, &key, interactive);
                self.diagnostics.debug(&format!(
                    "bound {namespace:?}/{key} to {} (interactive={interactive})",
                    spec.destination
                ));
                let bound =
                    BoundLogger::new(Arc::clone(&sink), prefix, timestamp_format.clone());
                levels.insert(key, Arc::new(bound));
            }
        }

        self.loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(namespace.to_string(), levels);
    }

    /// A layout chrono can't render would lose every timestamp, so fall back instead.
    fn checked_timestamp_format(&self, format: &str) -> String {
        if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
            self.diagnostics.report(&format!(
                "invalid timestamp format {format:?}, using {DEFAULT_TIMESTAMP_FORMAT:?}"
            ));
            DEFAULT_TIMESTAMP_FORMAT.to_string()
        } else {
            format.to_string()
        }
    }

    /// Namespace used by [`debug`](Self::debug), [`info`](Self::info),
    /// [`warning`](Self::warning) and [`error`](Self::error).
    pub fn set_default_namespace(&self, namespace: impl Into<String>) {
        *self
            .default_namespace
            .write()
            .unwrap_or_else(PoisonError::into_inner) = namespace.into();
    }

    #[must_use]
    pub fn default_namespace(&self) -> String {
        self.default_namespace
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Formats and writes one line to the logger bound at (`namespace`, `level`).
    ///
    /// `level` is matched case-insensitively, with `warning`/`err` aliases. Nothing
    /// happens when no logger is bound there; the message is not formatted either.
    pub fn emit(&self, namespace: &str, level: &str, format: &str, args: &[Arg<'_>]) {
        if let Some(logger) = self.lookup(namespace, &level::normalize(level)) {
            logger.write(&sprintf(format, args));
        }
    }

    fn lookup(&self, namespace: &str, key: &str) -> Option<Arc<BoundLogger>> {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(namespace)
            .and_then(|levels| levels.get(key))
            .cloned()
    }

    fn emit_default(&self, level: Level, format: &str, args: &[Arg<'_>]) {
        let namespace = self.default_namespace();
        self.emit(&namespace, level.as_str(), format, args);
    }

    pub fn debug(&self, format: &str, args: &[Arg<'_>]) {
        self.emit_default(Level::Debug, format, args);
    }

    pub fn info(&self, format: &str, args: &[Arg<'_>]) {
        self.emit_default(Level::Info, format, args);
    }

    /// Routed to the `WARN` binding.
    pub fn warning(&self, format: &str, args: &[Arg<'_>]) {
        self.emit_default(Level::Warn, format, args);
    }

    pub fn error(&self, format: &str, args: &[Arg<'_>]) {
        self.emit_default(Level::Error, format, args);
    }

    pub fn debug_in(&self, namespace: &str, format: &str, args: &[Arg<'_>]) {
        self.emit(namespace, Level::Debug.as_str(), format, args);
    }

    pub fn info_in(&self, namespace: &str, format: &str, args: &[Arg<'_>]) {
        self.emit(namespace, Level::Info.as_str(), format, args);
    }

    pub fn warning_in(&self, namespace: &str, format: &str, args: &[Arg<'_>]) {
        self.emit(namespace, Level::Warn.as_str(), format, args);
    }

    pub fn error_in(&self, namespace: &str, format: &str, args: &[Arg<'_>]) {
        self.emit(namespace, Level::Error.as_str(), format, args);
    }

    /// True once any (namespace, level) binding exists.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .any(|levels| !levels.is_empty())
    }

    /// Whether an emit at (`namespace`, `level`) would reach a sink.
    #[must_use]
    pub fn is_routable(&self, namespace: &str, level: &str) -> bool {
        self.lookup(namespace, &level::normalize(level)).is_some()
    }

    /// Namespaces that have been initialized, sorted.
    #[must_use]
    pub fn namespaces(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }

    /// Level keys bound in `namespace`, sorted.
    #[must_use]
    pub fn levels(&self, namespace: &str) -> Vec<String> {
        let mut keys: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(namespace)
            .map(|levels| levels.keys().cloned().collect())
            .unwrap_or_default();
        keys.sort();
        keys
    }

    /// The prefix a line at (`namespace`, `level`) would carry.
    #[must_use]
    pub fn prefix(&self, namespace: &str, level: &str) -> Option<String> {
        self.lookup(namespace, &level::normalize(level))
            .map(|logger| logger.prefix().to_string())
    }
}
