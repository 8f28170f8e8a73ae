//! Tests for loading match configuration from TOML files.

use std::io::Write;
use tempfile::NamedTempFile;
use tictacgrid::{Controller, PartialConfig};

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_file_loads() {
    let file = write_config(
        r#"
player_one = "Ana"
player_two = "Luis"
board_size = 4
"#,
    );

    let partial = PartialConfig::from_file(file.path()).unwrap();
    assert_eq!(partial.player_one().as_deref(), Some("Ana"));
    assert_eq!(partial.player_two().as_deref(), Some("Luis"));
    assert_eq!(partial.size().unwrap().map(|s| s.get()), Some(4));
}

#[test]
fn test_fields_are_optional() {
    let file = write_config("board_size = 5\n");
    let partial = PartialConfig::from_file(file.path()).unwrap();
    assert_eq!(partial.names().unwrap(), None);
    assert_eq!(partial.board_size(), &Some(5));
}

#[test]
fn test_unknown_field_rejected() {
    let file = write_config("board_size = 3\ncolour = \"red\"\n");
    let error = PartialConfig::from_file(file.path()).unwrap_err();
    assert!(error.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let error = PartialConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(error.message.contains("Failed to read config file"));
}

#[test]
fn test_flags_override_file() {
    let file = write_config("player_one = \"Ana\"\nplayer_two = \"Luis\"\nboard_size = 3\n");
    let flags = PartialConfig::new(None, Some("Bea".into()), Some(5));

    let merged = flags.or(PartialConfig::from_file(file.path()).unwrap());
    assert_eq!(
        merged.names().unwrap(),
        Some(("Ana".to_string(), "Bea".to_string()))
    );

    let controller = Controller::new(merged).unwrap();
    assert_eq!(controller.screen_name(), "InGame");
}

#[test]
fn test_file_with_bad_size_stops_setup() {
    let file = write_config("board_size = 9\n");
    let partial = PartialConfig::from_file(file.path()).unwrap();
    assert!(partial.size().is_err());
    assert!(Controller::new(partial).is_err());
}
