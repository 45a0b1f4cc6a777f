//! nslog's own diagnostic channel.
//!
//! Problems inside the logger (a log file that would not open) cannot be reported through
//! the logger itself, so they go to a separate writer: standard error unless the embedder
//! or a test swaps it out.

use std::fmt;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

/// Cloneable handle to the diagnostic writer.
#[derive(Clone)]
pub struct Diagnostics {
    target: Arc<Mutex<Box<dyn Write + Send>>>,
    verbose: bool,
}

impl fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagnostics")
            .field("verbose", &self.verbose)
            .finish_non_exhaustive()
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::stderr()
    }
}

impl Diagnostics {
    /// Reports to the process's standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_writer(io::stderr())
    }

    /// Reports to an arbitrary writer.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            target: Arc::new(Mutex::new(Box::new(writer))),
            verbose: false,
        }
    }

    /// Also report routine events such as each binding made during initialization.
    #[must_use]
    pub const fn verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    #[must_use]
    pub const fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Writes one line. Failures to write the diagnostic itself are ignored.
    pub fn report(&self, line: &str) {
        let mut target = self.target.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(target, "{line}");
        let _ = target.flush();
    }

    /// Like [`report`](Self::report) but only when verbose.
    pub fn debug(&self, line: &str) {
        if self.verbose {
            self.report(&format!("nslog: {line}"));
        }
    }
}
