use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};
use tempfile::NamedTempFile;

fn answer_line_start<T: std::fmt::Display>(value: T) -> String {
    format!("{:>15} (", value)
}

#[test]
fn day1_output_both_answers() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("inputs.txt");

    let output = cmd.assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with(&answer_line_start(3)));
    assert!(lines[1].starts_with(&answer_line_start(6)));
    assert!(lines[2].starts_with(&answer_line_start("total")));
    assert!(lines.iter().all(|l| l.ends_with("ms)")));
}

#[test]
fn day1_verbose_output_parse_time() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("--verbose").arg("inputs.txt");

    cmd.assert()
        .success()
        .stdout(str::starts_with(answer_line_start("parse")).and(str::contains("total")));
}

#[test]
fn day1_without_input_exit_with_1() {
    let mut cmd = Command::cargo_bin("day1").unwrap();

    cmd.assert()
        .code(1)
        .stdout(str::contains("No input file given"));
}

#[test]
fn day1_fail_on_invalid_turn() {
    let mut input = NamedTempFile::new().unwrap();
    writeln!(input, "R10").unwrap();
    writeln!(input, "Lten").unwrap();

    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg(input.path());

    cmd.assert()
        .failure()
        .stderr(str::contains("line 2").and(str::contains("Lten")));
}

#[test]
fn day1_fail_on_missing_file() {
    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("no_such_inputs.txt"));
}

#[test]
fn day1_skip_blank_lines() {
    let mut input = NamedTempFile::new().unwrap();
    write!(input, "R50\n\nL100\n\n").unwrap();

    let mut cmd = Command::cargo_bin("day1").unwrap();
    cmd.arg(input.path());

    let output = cmd.assert().success().get_output().stdout.clone();
    let output = String::from_utf8(output).unwrap();
    let lines = output.lines().collect::<Vec<_>>();
    assert!(lines[0].starts_with(&answer_line_start(2)));
    assert!(lines[1].starts_with(&answer_line_start(2)));
}
