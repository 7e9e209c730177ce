use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command { Command::cargo_bin("bfrun").unwrap() }

// The classic "Hello World!" program, cells 0..=6, newline included.
const HELLO_WORLD: &str = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";

#[test]
fn test_hello_world_round_trip() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(HELLO_WORLD)
        .assert()
        .success()
        .stdout("Hello World!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_no_separator_between_runs() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .args([HELLO_WORLD, HELLO_WORLD])
        .assert()
        .success()
        .stdout("Hello World!\nHello World!\n");
}
