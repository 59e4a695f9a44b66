//! Tests for config functionality.

use crate::config::{Config, DEFAULT_CONFIG_FILE, OutputFormat};
use crate::error::ReviewError;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.format, OutputFormat::Text);
    assert!(config.exclude.is_empty());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
format: json
exclude:
  - "vendor/**"
  - "**/*_generated.rs"
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.exclude, vec!["vendor/**", "**/*_generated.rs"]);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
format: text
rules:
  rust: []
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.format, OutputFormat::Text);
}

#[test]
fn test_invalid_format_rejected() {
    let err = Config::from_yaml("format: xml\n").unwrap_err();
    assert!(matches!(err, ReviewError::UserError(_)));
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_invalid_exclude_glob_rejected() {
    let err = Config::from_yaml("exclude: [\"src/[\"]\n").unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern"));
}

#[test]
fn test_empty_exclude_entry_rejected() {
    let err = Config::from_yaml("exclude: [\"  \"]\n").unwrap_err();
    assert!(err.to_string().contains("exclude entries must be non-empty"));
}

#[test]
fn test_yaml_round_trip() {
    let config = Config {
        format: OutputFormat::Json,
        exclude: vec!["docs/**".to_string()],
    };

    let yaml = config.to_yaml().unwrap();
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Config::load(dir.path().join("nope.yaml")).unwrap_err();
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_discover_prefers_explicit_path() {
    let dir = TempDir::new().unwrap();
    let explicit = dir.path().join("custom.yaml");
    std::fs::write(&explicit, "format: json\n").unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "format: text\n").unwrap();

    let config = Config::discover(Some(explicit.as_path()), dir.path()).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_discover_uses_default_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "format: json\n").unwrap();

    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config.format, OutputFormat::Json);
}

#[test]
fn test_discover_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();

    let config = Config::discover(None, dir.path()).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_path_filter_from_config() {
    let config = Config::from_yaml("exclude: [\"vendor/**\"]\n").unwrap();
    let filter = config.path_filter().unwrap();

    assert!(filter.is_excluded("vendor/lib/mod.rs"));
    assert!(!filter.is_excluded("src/lib.rs"));
}
