//! One (namespace, level) binding: a sink plus the precomputed line prefix.

use crate::output::SharedSink;
use chrono::Local;
use std::fmt::{self, Write as _};
use std::io::Write;
use std::sync::PoisonError;

/// Immutable once created. Several bindings may share one sink.
pub struct BoundLogger {
    sink: SharedSink,
    prefix: String,
    timestamp_format: String,
}

impl fmt::Debug for BoundLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundLogger")
            .field("prefix", &self.prefix)
            .field("timestamp_format", &self.timestamp_format)
            .finish_non_exhaustive()
    }
}

impl BoundLogger {
    pub(crate) const fn new(
        sink: SharedSink,
        prefix: String,
        timestamp_format: String,
    ) -> Self {
        Self {
            sink,
            prefix,
            timestamp_format,
        }
    }

    /// `[LEVEL]`, `[namespace-LEVEL]`, or either wrapped in ANSI color.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `<timestamp> <prefix><message>` terminated by exactly one newline.
    #[must_use]
    pub fn format_line(&self, message: &str) -> String {
        let mut line = String::with_capacity(self.prefix.len() + message.len() + 24);
        // The layout was validated at bind time; a failure here only loses the timestamp.
        let _ = write!(line, "{}", Local::now().format(&self.timestamp_format));
        line.push(' ');
        line.push_str(&self.prefix);
        line.push_str(message);
        if !line.ends_with('\n') {
            line.push('\n');
        }
        line
    }

    /// Single `write_all` under the sink lock so concurrent lines never interleave.
    /// Write errors are dropped: a failing log sink must not take the caller down.
    pub fn write(&self, message: &str) {
        let line = self.format_line(message);
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.write_all(line.as_bytes());
        let _ = sink.flush();
    }
}
