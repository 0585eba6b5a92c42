use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_lists_the_flags() {
    Command::cargo_bin("bulletin")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--server"))
        .stdout(predicate::str::contains("--verbose"))
        .stdout(predicate::str::contains("--log-file"));
}

#[test]
fn version_reports_the_package_version() {
    Command::cargo_bin("bulletin")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_rejected() {
    Command::cargo_bin("bulletin")
        .unwrap()
        .arg("--definitely-not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}
