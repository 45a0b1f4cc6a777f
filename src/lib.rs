//! `nslog` - namespace and severity routed logging.
//!
//! Each (namespace, level) pair is bound to a destination: standard output, standard
//! error, or an append-mode file. Lines look like
//! `2016/01/02 15:04:05 [net-DEBUG]connected to 10.0.0.1`, with the bracketed prefix
//! colored when the destination is a terminal. Messages for pairs nobody bound are
//! dropped without error.
//!
//! # Example
//!
//! ```
//! use nslog::{LogConfig, Registry};
//!
//! let registry = Registry::new();
//! registry.initialize(
//!     &LogConfig::new("net")
//!         .show_namespace(true)
//!         .logger("debug|info", "STDOUT")
//!         .logger("error", "STDERR"),
//! );
//! registry.set_default_namespace("net");
//!
//! nslog::debug!(registry => "connected to %s in %dms", "10.0.0.1", 12);
//! nslog::error!(registry => in "net"; "peer %s reset", "10.0.0.2");
//! // Nothing is bound for WARN, so this is dropped.
//! nslog::warning!(registry => "slow handshake");
//! ```
//!
//! A process-wide registry backs the free functions ([`init`], [`debug()`], ...) and the
//! macros without a `registry =>` target.

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
mod macros;
pub mod output;

pub use config::{LogConfig, LoggerSpec};
pub use error::Error;
pub use fmt::Arg;
pub use internal::Diagnostics;
pub use level::Level;
pub use logger::{
    BoundLogger, Registry, RegistryBuilder, debug, debug_in, emit, error, error_in, global, info,
    info_in, init, set_default_namespace, warning, warning_in,
};
pub use output::{DestinationResolver, Resolve, STDERR, STDOUT, Sink};
