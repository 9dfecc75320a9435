use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

const EXPECTED: &str = "**The List of Even Numbers in this evenArr Array***\n8 22 14 10 18 44 ";

fn even_filter() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("even_filter");
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn prints_header_then_evens() {
    even_filter()
        .assert()
        .success()
        .stdout(EXPECTED);
}

#[test]
fn repeated_runs_are_identical() {
    let first = even_filter().output().unwrap();
    let second = even_filter().output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logging_stays_off_stdout() {
    even_filter()
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stdout(EXPECTED)
        .stderr(predicate::str::contains("scanned 10 elements, 6 even"));
}

#[test]
fn version_flag() {
    even_filter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn rejects_unknown_arguments() {
    even_filter().arg("--input").assert().failure();
}
