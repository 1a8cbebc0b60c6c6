use assert_cmd::Command;
use predicates::prelude::{predicate::str, PredicateBooleanExt};

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs_example.txt");

    cmd.assert().success().stdout(str::contains("is 31."));
}

#[test]
fn part1_draws_path_when_asked() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs_example.txt").arg("--show-path");

    cmd.assert()
        .success()
        .stdout(str::contains("is 31.").and(str::is_match("(?m)^[.^<>vE]{8}$").unwrap()));
}

#[test]
fn part1_reports_unreachable_end() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs_walled.txt");

    cmd.assert()
        .success()
        .stderr(str::contains("There's no path"));
}

#[test]
fn part1_fails_on_missing_input() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_inputs.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Failed to read height map"));
}
