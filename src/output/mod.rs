//! Destinations a bound logger can write to.
//!
//! A destination name resolves to a [`Sink`]: the process's standard streams for the
//! reserved `STDOUT`/`STDERR` tokens, an append-mode file for anything else. The
//! [`Resolve`] trait lets embedders plug in their own sinks without touching the registry.

mod file;
mod resolve;
mod terminal;

pub use file::{FileSink, open_append};
pub use resolve::{DestinationResolver, Resolve, STDERR, STDOUT};
pub use terminal::{StderrSink, StdoutSink};

use std::io::Write;
use std::sync::{Arc, Mutex};

/// A writable log destination that can report whether it is attached to a terminal.
///
/// `Send` so one sink can be shared by loggers used from many threads.
pub trait Sink: Write + Send {
    /// Decides whether line prefixes get ANSI colors. Queried once, at bind time.
    fn is_interactive(&self) -> bool;
}

/// Several levels from one config entry share the same opened sink.
pub type SharedSink = Arc<Mutex<Box<dyn Sink>>>;

/// Wraps a sink so it can be bound to more than one level.
#[must_use]
pub fn share(sink: Box<dyn Sink>) -> SharedSink {
    Arc::new(Mutex::new(sink))
}
