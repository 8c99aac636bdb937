//! End-to-end tests for the htmlclean binary.

#![allow(clippy::unwrap_used)] // unwrap() is appropriate in tests for clear panic messages

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn htmlclean() -> Command {
    Command::cargo_bin("htmlclean").unwrap()
}

#[test]
fn cleans_stdin_to_stdout() {
    htmlclean()
        .write_stdin("<div class=\"x\"><p>Hello <b>you</b></p></div>")
        .assert()
        .success()
        .stdout("<p>Hello <strong>you</strong></p>\n");
}

#[test]
fn cleans_file_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("message.html");
    fs::write(&path, "<div><p>Hi</p><script>x()</script></div>").unwrap();

    htmlclean()
        .arg("--in-place")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&path).unwrap(), "<p>Hi</p>\n");
}

#[test]
fn writes_output_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.html");
    let output = dir.path().join("out.html");
    fs::write(&input, "<p><i>x</i></p>").unwrap();

    htmlclean()
        .arg(&input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "<p><em>x</em></p>\n");
}

#[test]
fn honours_config_file() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, r#"{"convert_b_to_strong": false}"#).unwrap();

    htmlclean()
        .arg("--config")
        .arg(&config)
        .write_stdin("<b>bold</b>")
        .assert()
        .success()
        .stdout("<b>bold</b>\n");
}

#[test]
fn prints_effective_config() {
    htmlclean()
        .arg("--print-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"remove_with_content\""))
        .stdout(predicate::str::contains("\"script\""));
}

#[test]
fn bad_config_fails() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ not json").unwrap();

    htmlclean()
        .arg("--config")
        .arg(&config)
        .write_stdin("<p>x</p>")
        .assert()
        .failure()
        .stderr(predicate::str::contains("htmlclean: Invalid configuration"));
}

#[test]
fn missing_input_fails() {
    htmlclean()
        .arg("/nonexistent/input.html")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("htmlclean:"));
}

#[test]
fn in_place_requires_input() {
    htmlclean().arg("--in-place").assert().failure();
}
