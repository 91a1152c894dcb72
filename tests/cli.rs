use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn reframe(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reframe").unwrap();
    cmd.env("REFRAME_CONFIG_DIR", config_dir.path());
    cmd
}

#[test]
fn help_describes_the_tool() {
    let dir = TempDir::new().unwrap();
    reframe(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cognitive restructuring"))
        .stdout(predicate::str::contains("--no-splash"));
}

#[test]
fn config_shows_defaults_without_writing() {
    let dir = TempDir::new().unwrap();
    reframe(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Splash duration:    4000 ms"))
        .stdout(predicate::str::contains("config.json"));

    assert!(!dir.path().join("config.json").exists());
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    reframe(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"splash_duration_ms\": 4000"));
}

#[test]
fn config_reads_saved_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("config.json"),
        r#"{ "show_splash": false, "splash_duration_ms": 1200 }"#,
    )
    .unwrap();

    reframe(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Show splash:        false"))
        .stdout(predicate::str::contains("Splash duration:    1200 ms"));
}

#[test]
fn malformed_settings_fail() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    reframe(&dir)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse settings file"));
}

#[test]
fn init_repairs_malformed_settings() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ nope").unwrap();

    reframe(&dir).arg("init").assert().success();

    let written = std::fs::read_to_string(dir.path().join("config.json")).unwrap();
    assert!(written.contains("\"splash_duration_ms\": 4000"));

    reframe(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Splash duration:    4000 ms"));
}
