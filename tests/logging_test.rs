use std::fs;

use tui_drift::config::Config;
use tui_drift::logging::{init_logging, LogTarget};

// One test per binary: the global logger can only be installed once.
#[test]
fn log_path_sends_records_to_the_file() {
    let name = format!("tui-drift-log-{}.log", std::process::id());
    let path = std::env::temp_dir().join(name);
    let config = Config {
        log_path: Some(path.clone()),
        ..Config::default()
    };

    let target = init_logging(&config).unwrap();
    assert_eq!(target, LogTarget::File(path.clone()));
    log::warn!("log file check");
    log::logger().flush();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("log file check"), "{text}");

    // A second logger is refused instead of silently replacing the first.
    let headless = Config {
        headless_ticks: Some(1),
        ..Config::default()
    };
    assert!(init_logging(&headless).is_err());

    let _ = fs::remove_file(&path);
}
