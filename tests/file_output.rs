use chrono::NaiveDateTime;
use nslog::{Diagnostics, LogConfig, Registry};
use std::fs;
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn quiet_registry() -> (Registry, Buffer) {
    let diagnostics = Buffer::default();
    let registry = Registry::builder()
        .diagnostics(Diagnostics::with_writer(diagnostics.clone()))
        .build();
    (registry, diagnostics)
}

#[test]
fn file_lines_carry_timestamp_and_plain_prefix() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("app.log");
    let (registry, _) = quiet_registry();

    registry.initialize(
        &LogConfig::new("app")
            .show_namespace(true)
            .logger("info", path.to_str().unwrap()),
    );
    registry.info_in("app", "served %d requests", &[42.into()]);

    let content = fs::read_to_string(&path).unwrap();
    let (timestamp, rest) = content.split_at(19);
    assert!(NaiveDateTime::parse_from_str(timestamp, "%Y/%m/%d %H:%M:%S").is_ok());
    assert_eq!(rest, " [app-INFO]served 42 requests\n");
}

#[test]
fn file_output_appends_across_registries() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("multi.log");
    fs::write(&path, "existing\n").unwrap();

    for message in ["one", "two"] {
        let (registry, _) = quiet_registry();
        registry.initialize(
            &LogConfig::new("")
                .timestamp_format("-")
                .logger("DEBUG", path.to_str().unwrap()),
        );
        registry.debug(message, &[]);
    }

    let content = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines, vec!["existing", "- [DEBUG]one", "- [DEBUG]two"]);
}

#[test]
fn levels_can_share_one_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("shared.log");
    let (registry, _) = quiet_registry();

    registry.initialize(
        &LogConfig::new("")
            .timestamp_format("-")
            .logger("debug|error", path.to_str().unwrap()),
    );
    registry.debug("a", &[]);
    registry.error("b", &[]);
    registry.info("unbound", &[]);

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(content, "- [DEBUG]a\n- [ERROR]b\n");
}

#[test]
fn unopenable_file_is_reported_and_skipped() {
    let tmp = TempDir::new().unwrap();
    let bad = tmp.path().join("no-such-dir").join("x.log");
    let good = tmp.path().join("good.log");
    let (registry, diagnostics) = quiet_registry();

    registry.initialize(
        &LogConfig::new("")
            .timestamp_format("-")
            .logger("ERROR", bad.to_str().unwrap())
            .logger("INFO", good.to_str().unwrap()),
    );
    registry.error("dropped", &[]);
    registry.info("written", &[]);

    let report = String::from_utf8(diagnostics.0.lock().unwrap().clone()).unwrap();
    let expected = format!("fail to open log file {} : ", bad.display());
    assert!(report.starts_with(&expected), "got {report:?}");
    assert_eq!(report.lines().count(), 1);
    assert!(!bad.exists());
    assert_eq!(fs::read_to_string(&good).unwrap(), "- [INFO]written\n");
}
