//! CLI integration tests
//!
//! These tests drive the `tycho-pomgen` binary against temporary repositories and
//! check its output, the files it writes, and its exit codes.

mod support;

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use support::{add_plugin, create_cimtool_layout, get_tycho_pomgen_binary, CUSTOM_POM};
use tempfile::TempDir;

const ENV_VARS: &[&str] = &[
    "TYCHO_POMGEN_PARENT_GROUP",
    "TYCHO_POMGEN_PARENT_ARTIFACT",
    "TYCHO_POMGEN_PARENT_VERSION",
    "TYCHO_POMGEN_IGNORE",
    "TYCHO_POMGEN_LOG_LEVEL",
    "TYCHO_POMGEN_LOG_JSON",
    "RUST_LOG",
];

fn run_pomgen(root: &Path, args: &[&str]) -> Output {
    let mut command = Command::new(get_tycho_pomgen_binary());
    for var in ENV_VARS {
        command.env_remove(var);
    }
    command
        .arg(root)
        .args(args)
        .output()
        .expect("Failed to execute tycho-pomgen")
}

#[test]
fn test_cli_help() {
    let output = Command::new(get_tycho_pomgen_binary())
        .arg("--help")
        .output()
        .expect("Failed to execute tycho-pomgen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tycho-pomgen"));
    assert!(stdout.contains("--dry-run"));
    assert!(stdout.contains("--fail-on-skip"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(get_tycho_pomgen_binary())
        .arg("--version")
        .output()
        .expect("Failed to execute tycho-pomgen");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_generates_poms() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("=== Generating module pom.xml files ==="));
    assert!(stdout.contains("BSN=org.foo.a"));
    assert!(stdout.contains("id=org.foo.feature"));
    assert!(stdout.contains("[keep pom]"));
    assert!(stdout.contains("Total included: 2"));
    assert!(stdout.contains("Total skipped:  0"));
    assert!(stdout.contains("Modules: [A, B]"));
    assert!(!stdout.contains("docs"));

    let plugin_pom = fs::read_to_string(temp_dir.path().join("A/pom.xml")).unwrap();
    assert!(plugin_pom.contains("<artifactId>org.foo.a</artifactId>"));
    assert!(plugin_pom.contains("<packaging>eclipse-plugin</packaging>"));
    assert!(plugin_pom.contains("<relativePath>../pom.xml</relativePath>"));

    let feature_pom = fs::read_to_string(temp_dir.path().join("B/pom.xml")).unwrap();
    assert!(feature_pom.contains("<artifactId>org.foo.feature</artifactId>"));
    assert!(feature_pom.contains("<packaging>eclipse-feature</packaging>"));

    assert_eq!(
        fs::read_to_string(temp_dir.path().join("C/pom.xml")).unwrap(),
        CUSTOM_POM
    );
    assert!(!temp_dir.path().join("docs/pom.xml").exists());
}

#[test]
fn test_cli_dry_run_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(temp_dir.path(), &["--dry-run"]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("(dry run: no files written)"));
    assert!(stdout.contains("Total included: 2"));
    assert!(!temp_dir.path().join("A/pom.xml").exists());
    assert!(!temp_dir.path().join("B/pom.xml").exists());
}

#[test]
fn test_cli_json_output() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(temp_dir.path(), &["--format", "json"]);
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON");
    assert_eq!(value["included"], serde_json::json!(["A", "B"]));
    assert_eq!(value["skipped"], serde_json::json!([]));
    assert_eq!(value["kept"], serde_json::json!(["C"]));
}

#[test]
fn test_cli_skip_is_not_failure_by_default() {
    let temp_dir = TempDir::new().unwrap();
    add_plugin(temp_dir.path(), "broken", "Manifest-Version: 1.0\n");

    let output = run_pomgen(temp_dir.path(), &[]);
    assert_eq!(output.status.code(), Some(0));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[skip]"));
    assert!(stdout.contains("Total skipped:  1"));
    assert!(!temp_dir.path().join("broken/pom.xml").exists());
}

#[test]
fn test_cli_fail_on_skip() {
    let temp_dir = TempDir::new().unwrap();
    add_plugin(temp_dir.path(), "broken", "Manifest-Version: 1.0\n");

    let output = run_pomgen(temp_dir.path(), &["--fail-on-skip"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_cli_fail_on_skip_clean_run() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(temp_dir.path(), &["--fail-on-skip"]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_cli_custom_parent_and_ignore() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(
        temp_dir.path(),
        &[
            "--parent-group",
            "org.example",
            "--parent-artifact",
            "example-parent",
            "--parent-version",
            "1.0.0",
            "--ignore",
            "B",
        ],
    );
    assert!(output.status.success());

    let plugin_pom = fs::read_to_string(temp_dir.path().join("A/pom.xml")).unwrap();
    assert!(plugin_pom.contains("<groupId>org.example</groupId>"));
    assert!(plugin_pom.contains("<artifactId>example-parent</artifactId>"));
    assert!(plugin_pom.contains("<version>1.0.0</version>"));
    assert!(!temp_dir.path().join("B/pom.xml").exists());
}

#[test]
fn test_cli_nonexistent_root() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("does-not-exist");

    let output = run_pomgen(&missing, &[]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error"));
}

#[test]
fn test_cli_invalid_log_level_env_still_generates() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    for extra in [&[][..], &["-v"][..], &["--log-level", "debug"][..]] {
        let mut command = Command::new(get_tycho_pomgen_binary());
        for var in ENV_VARS {
            command.env_remove(var);
        }
        let output = command
            .env("TYCHO_POMGEN_LOG_LEVEL", "verbose")
            .arg(temp_dir.path())
            .args(extra)
            .output()
            .expect("Failed to execute tycho-pomgen");

        assert_eq!(output.status.code(), Some(0), "args: {:?}", extra);
        assert!(temp_dir.path().join("A/pom.xml").exists());
        assert!(temp_dir.path().join("B/pom.xml").exists());
    }
}

#[test]
fn test_cli_invalid_parent_version() {
    let temp_dir = TempDir::new().unwrap();
    create_cimtool_layout(temp_dir.path());

    let output = run_pomgen(temp_dir.path(), &["--parent-version", "1.0 beta"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("A/pom.xml").exists());
}

#[test]
fn test_cli_invalid_format() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_pomgen(temp_dir.path(), &["--format", "xml"]);
    assert!(!output.status.success());
}
