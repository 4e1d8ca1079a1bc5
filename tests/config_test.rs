//! Tests for configuration loading.

use std::io::Write;
use std::time::Duration;
use tictactoe_duel::AppConfig;

#[test]
fn test_defaults() {
    let config = AppConfig::default();
    assert_eq!(*config.computer_delay_ms(), 500);
    assert_eq!(config.computer_delay(), Duration::from_millis(500));
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_partial_file_keeps_defaults() {
    let config = AppConfig::from_toml("computer_delay_ms = 0\n").expect("valid config");
    assert_eq!(config.computer_delay(), Duration::ZERO);
    assert_eq!(config.log_file().to_str(), Some("tictactoe.log"));
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "computer_delay_ms = 250").unwrap();
    writeln!(file, "log_file = \"game.log\"").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = AppConfig::load(Some(file.path())).expect("valid config");
    assert_eq!(*config.computer_delay_ms(), 250);
    assert_eq!(config.log_file().to_str(), Some("game.log"));
    assert_eq!(config.log_filter(), "debug");
}

#[test]
fn test_unknown_key_rejected() {
    let err = AppConfig::from_toml("board_size = 4\n").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = AppConfig::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
