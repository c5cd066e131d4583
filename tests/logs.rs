use sailnav_core::logs;
use std::fs;
use tempdir::TempDir;

#[test]
fn init_once() {
    let temp_dir = TempDir::new("logs-init").unwrap();
    let dir = temp_dir.path().to_str().unwrap();
    logs::init(dir).unwrap();
    log::info!("hello from the test");
    log::logger().flush();

    let content = fs::read_to_string(temp_dir.path().join("logs/main.log")).unwrap();
    assert!(content.contains("hello from the test"));

    // the global logger can only be installed once
    assert!(logs::init(dir).is_err());
}
