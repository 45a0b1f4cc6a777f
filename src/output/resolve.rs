//! Destination name to sink.

use super::{FileSink, Sink, StderrSink, StdoutSink};
use std::io;
use std::path::PathBuf;

/// Reserved destination naming the process's standard output.
pub const STDOUT: &str = "STDOUT";
/// Reserved destination naming the process's standard error.
pub const STDERR: &str = "STDERR";

/// Turns a configured destination name into an open sink.
///
/// `Send + Sync` because the registry holding it is shared between threads.
pub trait Resolve: Send + Sync {
    /// # Errors
    /// The open failure for this destination. The caller reports it and moves on.
    fn resolve(&self, destination: &str) -> io::Result<Box<dyn Sink>>;
}

/// Standard streams for the reserved tokens, append-mode files for everything else.
#[derive(Debug, Default, Clone, Copy)]
pub struct DestinationResolver;

impl Resolve for DestinationResolver {
    fn resolve(&self, destination: &str) -> io::Result<Box<dyn Sink>> {
        match destination {
            STDOUT => Ok(Box::new(StdoutSink)),
            STDERR => Ok(Box::new(StderrSink)),
            path => Ok(Box::new(FileSink::open(&expand(path))?)),
        }
    }
}

/// `~/app.log` becomes `$HOME/app.log`; other paths pass through.
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{IsTerminal, Write};
    use std::path::Path;
    use tempfile::TempDir;

    #[test]
    fn reserved_tokens_always_resolve() {
        assert!(DestinationResolver.resolve(STDOUT).is_ok());
        assert!(DestinationResolver.resolve(STDERR).is_ok());
    }

    #[test]
    fn standard_streams_report_real_terminal_state() {
        let stdout = DestinationResolver.resolve(STDOUT).unwrap();
        let stderr = DestinationResolver.resolve(STDERR).unwrap();
        assert_eq!(stdout.is_interactive(), io::stdout().is_terminal());
        assert_eq!(stderr.is_interactive(), io::stderr().is_terminal());
    }

    #[test]
    fn tilde_expands_to_home() {
        let Some(dirs) = directories::BaseDirs::new() else {
            return;
        };
        assert_eq!(expand("~/logs/app.log"), dirs.home_dir().join("logs/app.log"));
        assert_eq!(expand("/var/log/app.log"), Path::new("/var/log/app.log"));
        assert_eq!(expand("logs/~x"), Path::new("logs/~x"));
    }

    #[test]
    fn other_names_open_files() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("app.log");
        let mut sink = DestinationResolver
            .resolve(path.to_str().unwrap())
            .unwrap();
        sink.write_all(b"x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn unopenable_path_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope").join("x.log");
        assert!(DestinationResolver.resolve(path.to_str().unwrap()).is_err());
    }
}
