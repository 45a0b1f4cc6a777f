//! The process-wide registry. Kept to one test because the state is shared.

use nslog::LogConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn free_functions_and_macros_share_the_process_registry() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("global.log");

    nslog::info!("before init %d", 0);
    assert!(!nslog::global().is_initialized());

    nslog::init(
        &LogConfig::new("svc")
            .timestamp_format("-")
            .logger("info|warn", path.to_str().unwrap()),
    );
    nslog::info("still default namespace", &[]);

    nslog::set_default_namespace("svc");
    nslog::info("plain %s", &["call".into()]);
    nslog::info!("macro %d", 1);
    nslog::warning!(in "svc"; "explicit %s", "ns");
    nslog::warning_in("svc", "explicit fn", &[]);
    nslog::message!("svc", "info", "message %c", 'x');
    nslog::emit("svc", "WARN", "emit", &[]);
    nslog::debug!("unbound");

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        "- [INFO]plain call\n\
         - [INFO]macro 1\n\
         - [WARN]explicit ns\n\
         - [WARN]explicit fn\n\
         - [INFO]message x\n\
         - [WARN]emit\n"
    );
    assert_eq!(nslog::global().default_namespace(), "svc");
}
