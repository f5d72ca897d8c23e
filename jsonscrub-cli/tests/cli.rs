//! Integration tests for the `jsonscrub` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

const INPUT: &str = r#"{"id":1,"ssn":"123-45-6789","profile":{"name":"Alice","verified":true}}"#;

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn jsonscrub() -> Command {
    Command::cargo_bin("jsonscrub").unwrap()
}

#[test]
fn masks_the_documented_scenario() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "sensitive_fields.txt", "ssn\nname\n");
    let input = write(dir.path(), "input.json", INPUT);

    let output = jsonscrub().args([&fields, &input]).output().unwrap();
    assert!(output.status.success());

    let masked: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        masked,
        json!({
            "id": 1,
            "ssn": "***-**-****",
            "profile": {"name": "*****", "verified": true}
        })
    );
}

#[test]
fn pretty_output_is_indented_by_default() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "sensitive_fields.txt", "ssn\n");
    let input = write(dir.path(), "input.json", INPUT);

    jsonscrub()
        .args([&fields, &input])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"id\": 1"));
}

#[test]
fn compact_flag_emits_a_single_line() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "sensitive_fields.txt", "ssn\n");
    let input = write(dir.path(), "input.json", INPUT);

    let output = jsonscrub()
        .args(["--compact", &fields, &input])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);
}

#[test]
fn unreadable_field_list_degrades_to_masking_nothing() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("no_such_fields.txt").display().to_string();
    let input = write(dir.path(), "input.json", INPUT);

    let output = jsonscrub().args([&missing, &input]).output().unwrap();
    assert!(output.status.success());

    // Degradation is surfaced on stderr, and the document comes through
    // unmasked.
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("nothing will be masked"));

    let unmasked: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(unmasked, serde_json::from_str::<serde_json::Value>(INPUT).unwrap());
}

#[test]
fn missing_input_file_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "sensitive_fields.txt", "ssn\n");
    let missing = dir.path().join("no_such_input.json").display().to_string();

    jsonscrub()
        .args([&fields, &missing])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read input document"));
}

#[test]
fn invalid_json_input_is_a_hard_failure() {
    let dir = TempDir::new().unwrap();
    let fields = write(dir.path(), "sensitive_fields.txt", "ssn\n");
    let input = write(dir.path(), "input.json", "{not json");

    jsonscrub()
        .args([&fields, &input])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse input document"));
}

#[test]
fn missing_arguments_report_usage() {
    jsonscrub()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
