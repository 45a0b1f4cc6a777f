//! The process's standard streams as sinks.
//!
//! Interactivity is asked of the stream itself, so `prog > out.log` gets plain prefixes
//! even though the destination was `STDOUT`.

use super::Sink;
use std::io::{self, IsTerminal, Write};

/// Standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl Write for StdoutSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stdout().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()
    }
}

impl Sink for StdoutSink {
    fn is_interactive(&self) -> bool {
        io::stdout().is_terminal()
    }
}

/// Standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl Write for StderrSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write(buf)
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        io::stderr().lock().write_all(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

impl Sink for StderrSink {
    fn is_interactive(&self) -> bool {
        io::stderr().is_terminal()
    }
}
