//! Tests for command execution.

use super::run_in;
use crate::cli::Cli;
use crate::config::{DEFAULT_CONFIG_FILE, OutputFormat};
use crate::error::ReviewError;
use crate::exit_codes;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SAMPLE_DIFF: &str = r#"diff --git a/src/auth.rs b/src/auth.rs
index 1111111..2222222 100644
--- a/src/auth.rs
+++ b/src/auth.rs
@@ -40,2 +40,3 @@ impl Session {
     fn token(&self) -> String {
+        let raw = self.secret.clone();
+        raw.parse().unwrap()
diff --git a/scripts/deploy.py b/scripts/deploy.py
--- a/scripts/deploy.py
+++ b/scripts/deploy.py
@@ -1,0 +1,1 @@
+print(password)
"#;

fn make_cli(diff: PathBuf, output: Option<PathBuf>, format: Option<OutputFormat>) -> Cli {
    Cli {
        diff,
        output,
        format,
        config: None,
        verbose: false,
        debug: false,
    }
}

fn write_diff(dir: &Path) -> PathBuf {
    let path = dir.join("changes.diff");
    fs::write(&path, SAMPLE_DIFF).unwrap();
    path
}

#[test]
fn test_json_report_written_to_output() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let output = dir.path().join("review.json");

    let result = run_in(
        &make_cli(diff, Some(output.clone()), Some(OutputFormat::Json)),
        dir.path(),
    )
    .unwrap();

    assert_eq!(result.files_reviewed, 2);
    assert_eq!(result.issues.len(), 2);

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(report["files_reviewed"], 2);
    assert_eq!(report["summary"], "Code review completed with 2 issues found");
    assert_eq!(report["issues"][0]["file"], "auth.rs");
    assert_eq!(report["issues"][0]["line"], 41);
    assert_eq!(report["issues"][0]["code"], "let raw = self.secret.clone();");
    assert_eq!(report["issues"][1]["line"], 42);
    assert_eq!(report["issues"][1]["severity"], "warning");
}

#[test]
fn test_text_report_written_to_output() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let output = dir.path().join("review.txt");

    run_in(&make_cli(diff, Some(output.clone()), None), dir.path()).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("Files reviewed: 2"));
    assert!(text.contains("WARNING (2)"));
    assert!(text.contains("[best_practices] auth.rs:41"));
}

#[test]
fn test_missing_diff_is_input_not_found() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("review.json");

    let err = run_in(
        &make_cli(dir.path().join("absent.diff"), Some(output.clone()), None),
        dir.path(),
    )
    .unwrap_err();

    assert!(matches!(err, ReviewError::InputNotFound(_)));
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    assert!(!output.exists());
}

#[test]
fn test_config_format_used_when_flag_absent() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let output = dir.path().join("review.out");
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "format: json\n").unwrap();

    run_in(&make_cli(diff, Some(output.clone()), None), dir.path()).unwrap();

    let content = fs::read_to_string(&output).unwrap();
    assert!(serde_json::from_str::<serde_json::Value>(&content).is_ok());
}

#[test]
fn test_flag_overrides_config_format() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let output = dir.path().join("review.out");
    fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "format: json\n").unwrap();

    run_in(
        &make_cli(diff, Some(output.clone()), Some(OutputFormat::Text)),
        dir.path(),
    )
    .unwrap();

    assert!(fs::read_to_string(&output).unwrap().contains("CODE REVIEW"));
}

#[test]
fn test_config_excludes_paths() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let config = dir.path().join("ci.yaml");
    fs::write(&config, "exclude:\n  - \"src/**\"\n").unwrap();

    let mut cli = make_cli(diff, Some(dir.path().join("out.json")), None);
    cli.config = Some(config);

    let result = run_in(&cli, dir.path()).unwrap();

    assert_eq!(result.files_reviewed, 1);
    assert!(result.is_clean());
}

#[test]
fn test_invalid_config_is_user_error() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());
    let config = dir.path().join("bad.yaml");
    fs::write(&config, "format: [nope\n").unwrap();

    let mut cli = make_cli(diff, None, None);
    cli.config = Some(config);

    let err = run_in(&cli, dir.path()).unwrap_err();
    assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
}

#[test]
fn test_unwritable_output_is_output_error() {
    let dir = TempDir::new().unwrap();
    let diff = write_diff(dir.path());

    let err = run_in(
        &make_cli(diff, Some(dir.path().to_path_buf()), Some(OutputFormat::Json)),
        dir.path(),
    )
    .unwrap_err();

    assert!(matches!(err, ReviewError::OutputError(_)));
    assert_eq!(err.exit_code(), exit_codes::OUTPUT_FAILURE);
}
