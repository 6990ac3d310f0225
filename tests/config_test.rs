//! Tests for loading game configuration from TOML files.

use std::fs;
use tempfile::TempDir;

use strictly_territory::{GameConfig, GameSnapshot, Position};

/// Writes `content` to `game.toml` in a fresh temp dir.
fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("game.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    (dir, path)
}

#[test]
fn test_load_full_config() {
    let (_dir, path) = write_config("max_moves = 20\nlog_filter = \"strictly_territory=debug\"\n");

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(*config.max_moves(), 20);
    assert_eq!(config.log_filter(), "strictly_territory=debug");
}

#[test]
fn test_empty_file_uses_defaults() {
    let (_dir, path) = write_config("");
    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config, GameConfig::default());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_an_error() {
    let (_dir, path) = write_config("max_moves = \"many\"");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_zero_move_limit_is_rejected() {
    let (_dir, path) = write_config("max_moves = 0");
    assert!(GameConfig::from_file(&path).is_err());
}

#[test]
fn test_loaded_config_plays_to_limit() {
    let (_dir, path) = write_config("max_moves = 2");
    let config = GameConfig::from_file(&path).expect("Load failed");

    let mut game = config.new_game();
    game.make_move(0, 0).expect("legal move");
    game.make_move(8, 8).expect("legal move");

    let snapshot = GameSnapshot::capture(&game);
    assert!(snapshot.state.game_over);
    assert_eq!(snapshot.state.last_move, Position::new(8, 8));

    let json: serde_json::Value =
        serde_json::from_str(&snapshot.to_json().expect("serializes")).expect("valid JSON");
    assert_eq!(json["state"]["outcome"], "Draw");
}
