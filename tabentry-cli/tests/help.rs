use assert_cmd::cargo::{self};
use predicates::str::contains;

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!("tabentry");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--output-file"))
        .stdout(contains("--labels"));
}

#[test]
fn empty_stdin_fails_before_opening_the_form() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("data.txt");
    let mut cmd = cargo::cargo_bin_cmd!("tabentry");
    cmd.arg("--output-file")
        .arg(&output)
        .arg("--log-dir")
        .arg(dir.path().join("logs"))
        .write_stdin("")
        .assert()
        .failure()
        .stdout(contains("Enter column labels separated by commas: "))
        .stderr(contains("no column labels provided"));
    assert!(!output.exists());
}
