use std::fs;

use inputmedia::{EncoderConfig, FileReference, InputMediaPhoto, MediaEncoder, ParseMode};
use tempfile::tempdir;

#[test]
fn test_missing_config_file_uses_defaults() {
    let dir = tempdir().unwrap();
    let config = EncoderConfig::load(&dir.path().join("media.toml")).unwrap();
    assert_eq!(config, EncoderConfig::default());
}

#[test]
fn test_config_file_sets_default_parse_mode() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("media.toml");
    fs::write(&config_path, "default_parse_mode = \"MarkdownV2\"\n").unwrap();

    let config = EncoderConfig::load(&config_path).unwrap();
    assert_eq!(config.default_parse_mode, Some(ParseMode::MarkdownV2));

    let prepared = MediaEncoder::new(config).encode(
        &InputMediaPhoto::new(FileReference::file_id("F1"))
            .with_caption("*hi*")
            .into(),
    );
    assert_eq!(
        prepared.to_json().unwrap(),
        r#"{"media":"F1","type":"photo","caption":"*hi*","parse_mode":"MarkdownV2"}"#
    );
}

#[test]
fn test_invalid_config_file_names_the_path() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("media.toml");
    fs::write(&config_path, "default_parse_mode = 3\n").unwrap();

    let err = EncoderConfig::load(&config_path).unwrap_err();
    assert!(format!("{err:#}").contains("media.toml"));
}
