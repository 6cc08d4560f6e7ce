use std::fs;
use std::path::PathBuf;
use std::process::Output;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn run_check(args: &[&str]) -> Output {
    Command::cargo_bin("check").unwrap().args(args).output().unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn matching_files_exit_zero_and_stay_quiet() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "one\ntwo\n");
    let b = write_file(&dir, "b.txt", "one\ntwo\n");

    let output = run_check(&[a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());
}

#[test]
fn mismatch_exits_ten_with_a_diagnostic_on_stderr() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "one\ntwo\n");
    let b = write_file(&dir, "b.txt", "one\nTWO\n");

    let output = run_check(&[a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(10));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("files do not match"));
    assert!(stderr.contains(":2"));
}

#[test]
fn a_missing_file_exits_ten_before_comparing() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "one\n");
    let missing = dir.path().join("missing.txt");

    let output = run_check(&[a.to_str().unwrap(), missing.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(10));
    assert!(stderr_of(&output).contains("does not exist"));
}

#[test]
fn fewer_than_two_files_is_rejected() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "one\n");

    let output = run_check(&[a.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(10));
    assert!(stderr_of(&output).contains("requires at least two files"));
}

#[test]
fn verbose_echoes_paths_and_the_result_to_stderr() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "same\n");
    let b = write_file(&dir, "b.txt", "same\n");

    let output = run_check(&["--verbose", a.to_str().unwrap(), b.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Comparing:"));
    assert!(stderr.contains("a.txt"));
    assert!(stderr.contains("2 files match"));
}

#[test]
fn marker_flags_bound_the_compared_section() {
    let dir = TempDir::new().unwrap();
    let filler = "filler\n".repeat(9);
    let a = write_file(
        &dir,
        "a.txt",
        &format!("{filler}/*BEGIN*/\nshared\n/*END*/\n"),
    );
    let b = write_file(
        &dir,
        "b.txt",
        &format!("{filler}/*BEGIN*/\nchanged\n/*END*/\n"),
    );

    let output = run_check(&[
        "-s",
        "/*BEGIN*/",
        "-e",
        "/*END*/",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(10));
    assert!(stderr_of(&output).contains(":11"));
}

#[test]
fn markers_ignore_differences_outside_the_section() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "preamble a\n/*BEGIN*/\nbody\n/*END*/\n");
    let b = write_file(&dir, "b.txt", "other preamble\n/*BEGIN*/\nbody\n/*END*/\ntrailer\n");

    let output = run_check(&[
        "-s",
        "/*BEGIN*/",
        "-e",
        "/*END*/",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn a_missing_marker_is_a_mismatch_failure() {
    let dir = TempDir::new().unwrap();
    let a = write_file(&dir, "a.txt", "/*BEGIN*/\nbody\n/*END*/\n");
    let b = write_file(&dir, "b.txt", "body only\n");

    let output = run_check(&[
        "-s",
        "/*BEGIN*/",
        "-e",
        "/*END*/",
        a.to_str().unwrap(),
        b.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(10));
    assert!(stderr_of(&output).contains("does not contain the start marker"));
}
