//! Comprehensive CLI integration tests for main.rs

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper function to create a test command that ignores any user settings file
fn test_cmd() -> Command {
    let mut cmd = Command::cargo_bin("innumerati").unwrap();
    cmd.env("XDG_CONFIG_HOME", "/nonexistent/innumerati-test-config");
    cmd
}

/// Helper to check if output contains expected text (ignoring ANSI codes)
fn contains_text(text: &str) -> predicates::str::ContainsPredicate {
    predicate::str::contains(text)
}

#[test]
fn test_help_command() {
    test_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains_text("Innumerati - Roman numeral converter"))
        .stdout(contains_text("Usage:"))
        .stdout(contains_text("to-numeral"))
        .stdout(contains_text("to-int"))
        .stdout(contains_text("check"))
        .stdout(contains_text("list"))
        .stdout(contains_text("menu"));
}

#[test]
fn test_version_command() {
    test_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains_text("innumerati 0.1.0"));
}

#[test]
fn test_to_numeral() {
    test_cmd()
        .args(["to-numeral", "1994"])
        .assert()
        .success()
        .stdout("MCMXCIV\n");
}

#[test]
fn test_to_numeral_lowercase_flag() {
    test_cmd()
        .args(["to-numeral", "550", "--lowercase"])
        .assert()
        .success()
        .stdout("dl\n");
}

#[test]
fn test_to_numeral_json_format() {
    test_cmd()
        .args(["--format", "json", "to-numeral", "4"])
        .assert()
        .success()
        .stdout(contains_text(r#"{"value":4,"numeral":"IV"}"#));
}

#[test]
fn test_to_numeral_out_of_range() {
    test_cmd()
        .args(["to-numeral", "4000"])
        .assert()
        .failure()
        .stderr(contains_text("4000 cannot be written as a numeral"));

    test_cmd()
        .args(["to-numeral", "0"])
        .assert()
        .failure()
        .stderr(contains_text("0 cannot be written as a numeral"));
}

#[test]
fn test_to_numeral_negative() {
    test_cmd()
        .args(["to-numeral", "-12"])
        .assert()
        .failure()
        .stderr(contains_text("-12 cannot be written as a numeral"));
}

#[test]
fn test_to_numeral_not_a_number() {
    test_cmd()
        .args(["to-numeral", "twelve"])
        .assert()
        .failure()
        .stderr(contains_text("'twelve' is not a whole number"));
}

#[test]
fn test_to_numeral_missing_value() {
    test_cmd()
        .arg("to-numeral")
        .assert()
        .failure()
        .stderr(contains_text("required"));
}

#[test]
fn test_to_int() {
    test_cmd()
        .args(["to-int", "MCMXCIV"])
        .assert()
        .success()
        .stdout("1994\n");
}

#[test]
fn test_to_int_lowercase_input() {
    test_cmd()
        .args(["to-int", "mmxxiv"])
        .assert()
        .success()
        .stdout("2024\n");
}

#[test]
fn test_to_int_invalid() {
    test_cmd()
        .args(["to-int", "ABC"])
        .assert()
        .failure()
        .stderr(contains_text("'ABC' is not a valid numeral"));

    test_cmd()
        .args(["to-int", "IIII"])
        .assert()
        .failure()
        .stderr(contains_text("'IIII' is not a valid numeral"));
}

#[test]
fn test_to_int_out_of_range_total() {
    test_cmd()
        .args(["to-int", "MMMM"])
        .assert()
        .failure()
        .stderr(contains_text("internal inconsistency"));
}

#[test]
fn test_check_valid() {
    test_cmd()
        .args(["check", "MMMCMXCIX"])
        .assert()
        .success()
        .stdout("MMMCMXCIX is a valid numeral\n");
}

#[test]
fn test_check_invalid_exits_with_failure() {
    test_cmd()
        .args(["check", "VV"])
        .assert()
        .failure()
        .stdout("VV is not a valid numeral\n");
}

#[test]
fn test_check_json() {
    test_cmd()
        .args(["check", "XA", "--format", "json"])
        .assert()
        .failure()
        .stdout(contains_text(r#"{"numeral":"XA","valid":false}"#));
}

#[test]
fn test_list() {
    let output = test_cmd().arg("list").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3999);
    assert_eq!(lines[0], "   1  I");
    assert_eq!(lines[3], "   4  IV");
    assert_eq!(lines[3998], "3999  MMMCMXCIX");
}

#[test]
fn test_list_json() {
    let output = test_cmd()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = parsed.as_array().unwrap();
    assert_eq!(entries.len(), 3999);
    assert_eq!(entries[89]["value"], 90);
    assert_eq!(entries[89]["numeral"], "XC");
}

#[test]
fn test_settings_file_is_applied() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"lowercase": true, "format": "json"}"#).unwrap();

    test_cmd()
        .args(["to-numeral", "14", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(contains_text(r#"{"value":14,"numeral":"xiv"}"#));
}

#[test]
fn test_flags_override_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"format": "json"}"#).unwrap();

    test_cmd()
        .args(["to-numeral", "14", "--format", "text", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("XIV\n");
}

#[test]
fn test_uppercase_flag_overrides_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"lowercase": true}"#).unwrap();

    test_cmd()
        .args(["to-numeral", "14", "--uppercase", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout("XIV\n");
}

#[test]
fn test_missing_settings_file() {
    test_cmd()
        .args([
            "to-numeral",
            "14",
            "--config",
            "/nonexistent/innumerati/settings.json",
        ])
        .assert()
        .failure()
        .stderr(contains_text("Failed to read settings file"));
}

#[test]
fn test_invalid_settings_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.json");
    fs::write(&path, r#"{"format": "xml"}"#).unwrap();

    test_cmd()
        .args(["list", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains_text("Invalid settings file"));
}

#[test]
fn test_verbose_flag() {
    test_cmd()
        .args(["--verbose", "to-numeral", "9"])
        .assert()
        .success()
        .stdout("IX\n")
        .stderr(contains_text("Verbose mode enabled"));
}

#[test]
fn test_unknown_subcommand() {
    test_cmd()
        .arg("convert")
        .assert()
        .failure()
        .stderr(contains_text("unrecognized subcommand"));
}
