//! The process-wide registry behind the free functions and macros.
//!
//! `OnceLock` creates it on first use, so calls made before [`init`] are silent no-ops
//! rather than panics.

use super::Registry;
use crate::config::LogConfig;
use crate::fmt::Arg;
use std::sync::OnceLock;

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// The process's registry, created empty on first access.
pub fn global() -> &'static Registry {
    GLOBAL.get_or_init(Registry::new)
}

/// [`Registry::initialize`] on the process registry.
pub fn init(config: &LogConfig) {
    global().initialize(config);
}

pub fn set_default_namespace(namespace: impl Into<String>) {
    global().set_default_namespace(namespace);
}

pub fn emit(namespace: &str, level: &str, format: &str, args: &[Arg<'_>]) {
    global().emit(namespace, level, format, args);
}

pub fn debug(format: &str, args: &[Arg<'_>]) {
    global().debug(format, args);
}

pub fn info(format: &str, args: &[Arg<'_>]) {
    global().info(format, args);
}

pub fn warning(format: &str, args: &[Arg<'_>]) {
    global().warning(format, args);
}

pub fn error(format: &str, args: &[Arg<'_>]) {
    global().error(format, args);
}

pub fn debug_in(namespace: &str, format: &str, args: &[Arg<'_>]) {
    global().debug_in(namespace, format, args);
}

pub fn info_in(namespace: &str, format: &str, args: &[Arg<'_>]) {
    global().info_in(namespace, format, args);
}

pub fn warning_in(namespace: &str, format: &str, args: &[Arg<'_>]) {
    global().warning_in(namespace, format, args);
}

pub fn error_in(namespace: &str, format: &str, args: &[Arg<'_>]) {
    global().error_in(namespace, format, args);
}
