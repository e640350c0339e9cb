/*!
 * Unit tests for configuration loading and persistence
 */

use adscribe::app_config::{Config, LogLevel};

use crate::common;

#[test]
fn test_saveAndLoad_shouldRoundTripThroughDisk() {
    let temp_dir = common::create_temp_dir().unwrap();
    let config_path = temp_dir.path().join("conf.json");

    let mut config = Config::default();
    config.parsing.include_brackets = true;
    config.srt.max_chars_per_line = 28;
    config.log_level = LogLevel::Debug;
    config.save_to_file(&config_path).unwrap();

    let loaded = Config::from_file(&config_path).unwrap();

    assert!(loaded.parsing.include_brackets);
    assert_eq!(loaded.srt.max_chars_per_line, 28);
    assert_eq!(loaded.log_level, LogLevel::Debug);
}

#[test]
fn test_fromFile_withMissingFile_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();

    assert!(Config::from_file(temp_dir.path().join("absent.json")).is_err());
}

#[test]
fn test_fromFile_withMalformedJson_shouldFail() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path = common::create_test_file(&temp_dir.path().to_path_buf(), "conf.json", "{not json")
        .unwrap();

    assert!(Config::from_file(&path).is_err());
}

#[test]
fn test_fromFile_withEmptyObject_shouldUseAllDefaults() {
    let temp_dir = common::create_temp_dir().unwrap();
    let path =
        common::create_test_file(&temp_dir.path().to_path_buf(), "conf.json", "{}").unwrap();

    let config = Config::from_file(&path).unwrap();

    assert!(config.parsing.remove_slashes);
    assert!(config.validation.enabled);
    assert!(config.validation.save_report);
    assert_eq!(config.srt.default_duration_ms, 5000);
}
