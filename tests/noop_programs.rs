use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfrun").unwrap() }

#[test]
fn test_comment_only_program_emits_nothing() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("this text has no instructions at all")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_input_operator_is_skipped() {
    // ',' is unsupported and must behave like any other comment character.
    let code = format!(",{}.", "+".repeat(66));
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(code)
        .assert()
        .success()
        .stdout("B");
}

#[test]
fn test_program_starting_with_a_hyphen_is_a_value_not_a_flag() {
    // '-' wraps cell 0 to 255, '[+]' counts it back up to zero.
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("-[+]")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
