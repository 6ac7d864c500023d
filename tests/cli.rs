use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_text_metrics"))
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("text_metrics"))
        .stdout(predicate::str::contains("--reading-wpm"));
}

#[test]
fn shows_package_version() {
    bin()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn inline_text_as_json_envelope() {
    let output = bin()
        .args(["--text", "The cat sat. The cat ran!", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json["version"].is_string());
    assert!(json["generated_at"].is_string());
    let metrics = &json["documents"][0]["metrics"];
    assert_eq!(json["documents"][0]["source"], "<text>");
    assert_eq!(metrics["words"], 6);
    assert_eq!(metrics["sentences"], 2);
    assert_eq!(metrics["paragraphs"], 1);
    assert_eq!(metrics["top_words"][0]["word"], "the");
    assert_eq!(metrics["top_words"][0]["count"], 2);
}

#[test]
fn reads_stdin_when_no_files_given() {
    bin()
        .args(["-f", "jsonl"])
        .write_stdin("Good morning. Great day!")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"source\":\"<stdin>\""))
        .stdout(predicate::str::contains("\"type\":\"summary\""));
}

#[test]
fn empty_input_uses_placeholders() {
    bin()
        .args(["--text", "", "-f", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("| Reading level | - |"))
        .stdout(predicate::str::contains("| Words | 0 |"));
}

#[test]
fn files_are_reported_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.txt");
    let second = dir.path().join("second.txt");
    fs::write(&first, "One two three.").unwrap();
    fs::write(&second, "Four five.\n\nSix.").unwrap();

    let output = bin().args(["-f", "json", "-j", "2"]).arg(&first).arg(&second).output().unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let docs = json["documents"].as_array().unwrap();
    assert_eq!(docs.len(), 2);
    assert!(docs[0]["source"].as_str().unwrap().ends_with("first.txt"));
    assert_eq!(docs[1]["metrics"]["paragraphs"], 2);
}

#[test]
fn unreadable_file_is_skipped_without_strict() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "Still counted.").unwrap();

    bin()
        .args(["-f", "jsonl"])
        .arg(dir.path().join("missing.txt"))
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("good.txt"))
        .stdout(predicate::str::contains("\"documents\":1"))
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn strict_mode_fails_on_unreadable_file() {
    let dir = tempfile::tempdir().unwrap();
    bin()
        .arg("--strict")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.txt"));
}

#[test]
fn output_file_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("report.json");
    bin()
        .args(["--text", "Hello world.", "-f", "json", "-o"])
        .arg(&target)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&target).unwrap()).unwrap();
    assert_eq!(json["documents"][0]["metrics"]["words"], 2);
}

#[test]
fn zero_wpm_is_a_configuration_error() {
    bin()
        .args(["--text", "hi", "--reading-wpm", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--reading-wpm"));
}

#[test]
fn watch_rejects_inline_text() {
    bin()
        .args(["--watch", "--text", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--watch"));
}
