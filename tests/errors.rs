use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfrun").unwrap() }

#[test]
fn test_unbalanced_bracket_error() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("[+")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unbalanced bracket"));
}

#[test]
fn test_tape_out_of_bounds_error() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("<")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn test_error_diagnostic_points_at_the_instruction() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("+]")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at instruction 1"))
        .stderr(predicate::str::contains("^"));
}

#[test]
fn test_failed_run_does_not_stop_later_runs() {
    let emit_a = format!("{}.", "+".repeat(65));
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args(["[+", emit_a.as_str()])
        .assert()
        .failure()
        .code(1)
        .stdout("A")
        .stderr(predicate::str::contains("unbalanced bracket"));
}
