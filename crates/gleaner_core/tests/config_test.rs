//! Tests for configuration loading.

use gleaner_core::GleanerConfig;
use std::io::Write;

#[test]
fn test_defaults() {
    let config = GleanerConfig::default();
    assert_eq!(*config.pagination().batch_size(), 100);
    assert!(!*config.output().file_output());
    assert_eq!(*config.output().inline_limit(), 2000);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_file_overrides_some_values() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[output]\nfile_output = true\nstaging_dir = \"/tmp/gleaner\"").expect("Write");

    let config = GleanerConfig::from_file(file.path()).expect("Valid config");
    assert!(*config.output().file_output());
    assert_eq!(config.output().staging_dir().to_str(), Some("/tmp/gleaner"));
    assert_eq!(*config.output().inline_limit(), 2000);
    assert_eq!(*config.pagination().batch_size(), 100);
}

#[test]
fn test_out_of_range_batch_size_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[pagination]\nbatch_size = 0").expect("Write");

    assert!(GleanerConfig::from_file(file.path()).is_err());
}

#[test]
fn test_zero_inline_limit_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("Temp file");
    writeln!(file, "[output]\ninline_limit = 0").expect("Write");

    assert!(GleanerConfig::from_file(file.path()).is_err());
}

#[test]
fn test_missing_file_is_an_error() {
    assert!(GleanerConfig::from_file("/nonexistent/gleaner.toml").is_err());
}

#[test]
fn test_load_with_explicit_file() {
    let dir = tempfile::tempdir().expect("Temp dir");
    let path = dir.path().join("custom.toml");
    std::fs::write(&path, "[pagination]\nbatch_size = 50\n").expect("Write");

    let config = GleanerConfig::load_with(Some(path.as_path())).expect("Valid config");
    assert_eq!(*config.pagination().batch_size(), 50);
}
