use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;

fn cmd() -> Command {
    Command::cargo_bin("sqroot").unwrap()
}

#[test]
fn no_args_prints_usage_and_version() {
    cmd()
        .assert()
        .code(1)
        .stdout(contains("number"))
        .stdout(contains("Version"));
}

#[test]
fn perfect_square() {
    cmd()
        .arg("4")
        .assert()
        .success()
        .stdout(contains("The square root of 4 is 2"));
}

#[test]
fn irrational_result() {
    cmd()
        .arg("2")
        .assert()
        .success()
        .stdout(contains("1.41421"));
}

#[test]
fn rejects_non_numeric_input() {
    cmd()
        .arg("abc")
        .assert()
        .failure()
        .stderr(contains("not a number: abc"));
}

#[test]
fn extra_args_are_ignored() {
    cmd()
        .args(["9", "junk"])
        .assert()
        .success()
        .stdout(contains("The square root of 9 is 3"));
}

#[test]
fn negative_input_reports_nan() {
    cmd()
        .arg("-4")
        .assert()
        .success()
        .stdout(contains("NaN"));
}

#[test]
fn newton_method_flag() {
    cmd()
        .args(["--method", "newton", "2"])
        .assert()
        .success()
        .stdout(contains("1.41421"));
}

#[test]
fn json_output() {
    let out = cmd()
        .args(["--json", "4"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).expect("valid json output");
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["input"].as_f64(), Some(4.0));
    assert_eq!(v["data"]["root"].as_f64(), Some(2.0));
    assert_eq!(v["data"]["method"], "std");
}

#[test]
fn every_cli_path_has_help() {
    cmd().arg("--help").assert().success();
}
