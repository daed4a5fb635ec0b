//! Configuration Loader Tests

use hasher::config::{ConfigFileStatus, ConfigLoader, HasherConfig};
use hasher::constants::{BCRYPT_DEFAULT_COST, DEFAULT_LOG_LEVEL, DEFAULT_SECRET_LENGTH};
use hasher::Error;
use std::fs;
use tempfile::TempDir;

fn loader_for(dir: &TempDir, name: &str) -> ConfigLoader {
    ConfigLoader::new().with_config_path(dir.path().join(name))
}

#[test]
fn test_config_defaults() {
    let config = HasherConfig::default();

    assert_eq!(config.hashing.cost, BCRYPT_DEFAULT_COST);
    assert_eq!(config.generator.length, DEFAULT_SECRET_LENGTH);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
    assert!(!config.logging.json_format);
    assert!(config.logging.file_output.is_none());
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = loader_for(&temp_dir, "missing.toml").load().unwrap();

    assert_eq!(config, HasherConfig::default());
}

#[test]
fn test_file_overrides_defaults() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("hasher.toml"),
        "[hashing]\ncost = 6\n\n[generator]\nlength = 24\n",
    )
    .unwrap();

    let config = loader_for(&temp_dir, "hasher.toml").load().unwrap();

    assert_eq!(config.hashing.cost, 6);
    assert_eq!(config.generator.length, 24);
    assert_eq!(config.logging.level, DEFAULT_LOG_LEVEL);
}

#[test]
fn test_invalid_cost_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hasher.toml"), "[hashing]\ncost = 3\n").unwrap();

    let err = loader_for(&temp_dir, "hasher.toml").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_zero_length_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hasher.toml"), "[generator]\nlength = 0\n").unwrap();

    let err = loader_for(&temp_dir, "hasher.toml").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_invalid_log_level_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hasher.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    let err = loader_for(&temp_dir, "hasher.toml").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_malformed_toml_rejected() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hasher.toml"), "[hashing\ncost = ").unwrap();

    let err = loader_for(&temp_dir, "hasher.toml").load().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}

#[test]
fn test_config_save_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("saved.toml");

    let mut original = HasherConfig::default();
    original.hashing.cost = 8;
    original.generator.length = 32;
    original.logging.json_format = true;

    let loader = ConfigLoader::new().with_config_path(&config_path);
    loader.save_to_file(&original, &config_path).unwrap();
    let loaded = loader.load().unwrap();

    assert_eq!(loaded, original);
    assert_eq!(loader.config_path(), Some(config_path.as_path()));
}

#[test]
fn test_load_reports_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.toml");

    let (config, status) = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_status()
        .unwrap();

    assert_eq!(config, HasherConfig::default());
    assert_eq!(status, ConfigFileStatus::Missing(path));
}

#[test]
fn test_load_reports_loaded_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("hasher.toml");
    fs::write(&path, "[hashing]\ncost = 5\n").unwrap();

    let (config, status) = ConfigLoader::new()
        .with_config_path(&path)
        .load_with_status()
        .unwrap();

    assert_eq!(config.hashing.cost, 5);
    assert_eq!(status, ConfigFileStatus::Loaded(path));
}

#[test]
fn test_save_to_missing_directory_reports_io_context() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("no-such-dir").join("hasher.toml");

    let err = ConfigLoader::new()
        .save_to_file(&HasherConfig::default(), &path)
        .unwrap_err();

    match err {
        Error::Io { message, source } => {
            assert!(message.contains("Failed to write config file"));
            assert!(source.is_some());
        }
        other => panic!("Expected Io error, got {other:?}"),
    }
}

/// Run with: `cargo test -p hasher --test unit config_tests -- --test-threads=1 --ignored`
#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_env_overrides_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("hasher.toml"), "[hashing]\ncost = 6\n").unwrap();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::set_var("HASHER_ENVTEST__HASHING__COST", "7");
        std::env::set_var("HASHER_ENVTEST__LOGGING__JSON_FORMAT", "true");
    }

    let config = loader_for(&temp_dir, "hasher.toml")
        .with_env_prefix("HASHER_ENVTEST")
        .load();

    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        std::env::remove_var("HASHER_ENVTEST__HASHING__COST");
        std::env::remove_var("HASHER_ENVTEST__LOGGING__JSON_FORMAT");
    }

    let config = config.unwrap();
    assert_eq!(config.hashing.cost, 7);
    assert!(config.logging.json_format);
}
