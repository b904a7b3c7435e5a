// rucensor/tests/cli_integration_tests.rs
//! Command-line integration tests for the `rucensor` binary.
//!
//! Each test spawns the binary with `assert_cmd`, feeds it stdin or a
//! temporary file, and checks stdout, stderr and the exit status.

use anyhow::Result;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;

fn run_rucensor(input: &str, args: &[&str]) -> assert_cmd::assert::Assert {
    let mut cmd = Command::cargo_bin("rucensor").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("RUCENSOR_VARIANT");
    cmd.args(args);
    cmd.write_stdin(input.as_bytes());
    cmd.assert()
}

#[test]
fn test_censor_stdin_strict() {
    run_rucensor("Это xyйня текст\n", &["censor", "--variant", "strict"])
        .success()
        .stdout("Это ***** текст\n");
}

#[test]
fn test_censor_keeps_allow_words() {
    run_rucensor("Это заштрихуй текст", &["censor"])
        .success()
        .stdout("Это заштрихуй текст");
}

#[test]
fn test_censor_no_default_allow_masks_allow_word() {
    run_rucensor("заштрихуй", &["censor", "--no-default-allow"])
        .success()
        .stdout("*********");
}

#[test]
fn test_censor_custom_replacement() {
    run_rucensor("ну xyйня", &["censor", "-r", "#!"])
        .success()
        .stdout("ну #!#!#");
}

#[test]
fn test_censor_deny_and_allow_flags() {
    run_rucensor(
        "синица и синицаок",
        &["censor", "--deny", "синица", "--allow", "^синицаок$"],
    )
    .success()
    .stdout("****** и синицаок");
}

#[test]
fn test_censor_file_to_file() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    input.write_all("Это xyйня текст".as_bytes())?;
    let output = NamedTempFile::new()?;

    run_rucensor(
        "",
        &[
            "censor",
            "--input-file",
            input.path().to_str().unwrap(),
            "--output",
            output.path().to_str().unwrap(),
        ],
    )
    .success()
    .stdout("");

    assert_eq!(fs::read_to_string(output.path())?, "Это ***** текст");
    Ok(())
}

#[test]
fn test_censor_line_buffered() {
    run_rucensor("чистая строка\nxyйня\n", &["censor", "--line-buffered"])
        .success()
        .stdout("чистая строка\n*****\n");
}

#[test]
fn test_censor_line_buffered_keeps_line_endings() {
    run_rucensor("ок\r\nxyйня\r\nхуй", &["censor", "--line-buffered"])
        .success()
        .stdout("ок\r\n*****\r\n***");
}

#[test]
fn test_censor_invalid_deny_pattern_fails() {
    run_rucensor("текст", &["censor", "--deny", "invalid["])
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_censor_respects_max_input_bytes() {
    run_rucensor("длинный текст", &["censor", "--max-input-bytes", "4"])
        .code(2)
        .stderr(predicate::str::contains("byte limit"));
}

#[test]
fn test_censor_with_library_file() -> Result<()> {
    let mut library = NamedTempFile::new()?;
    library.write_all(
        r#"
base:
  - name: bird
    pattern: '[сc][иi][нn][иi][цc][аa]'
"#.as_bytes(),
    )?;

    run_rucensor(
        "cиницa летит",
        &["censor", "--library", library.path().to_str().unwrap()],
    )
    .success()
    .stdout("****** летит");
    Ok(())
}

#[test]
fn test_missing_library_file_fails() {
    run_rucensor("текст", &["censor", "--library", "/nonexistent/rucensor.yaml"])
        .code(2)
        .stderr(predicate::str::contains("/nonexistent/rucensor.yaml"));
}

#[test]
fn test_check_clean_exits_zero() {
    run_rucensor("", &["check", "чистый текст"])
        .success()
        .stdout("clean\n");
}

#[test]
fn test_check_violation_exits_one() {
    run_rucensor("Это xyйня текст", &["check", "--variant", "strict"])
        .code(1)
        .stdout(predicate::str::contains("violation: 'xyй' in word 'xyйня'"));
}

#[test]
fn test_check_json_output() -> Result<()> {
    let assert = run_rucensor("Это xyйня текст", &["check", "--json"]).code(1);
    let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    assert_eq!(value["found"], true);
    assert_eq!(value["fragment"], "хуй");
    assert_eq!(value["token"], "xyйня");
    assert_eq!(value["original"], "xyй");
    Ok(())
}

#[test]
fn test_check_strict_only_root() {
    run_rucensor("", &["check", "минет"]).success();
    run_rucensor("", &["check", "--variant", "strict", "минет"]).code(1);
}

#[test]
fn test_debug_flag_logs_to_stderr() {
    run_rucensor("текст", &["--debug", "censor"])
        .success()
        .stdout("текст")
        .stderr(predicate::str::contains("Starting censor operation."));
}

#[test]
fn test_quiet_flag_silences_logs() {
    run_rucensor("текст", &["--quiet", "censor"])
        .success()
        .stderr("");
}
