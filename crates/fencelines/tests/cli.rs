use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn fencelines() -> Command {
    Command::cargo_bin("fencelines").expect("binary exists")
}

#[test]
fn help_displays_usage() {
    fencelines()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn filters_a_file_with_a_range_expression() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "alpha\nbravo\ncharlie\n").expect("write contents");

    fencelines()
        .arg(file.path())
        .arg("--lines")
        .arg("1:2")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("bravo"))
        .stdout(predicate::str::contains("charlie").not());
}

#[test]
fn reads_stdin_when_no_file_is_given() {
    fencelines()
        .arg("--lines")
        .arg("2")
        .write_stdin("alpha\nbravo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bravo"))
        .stdout(predicate::str::contains("alpha").not());
}

#[test]
fn malformed_items_do_not_fail_the_run() {
    fencelines()
        .arg("--lines")
        .arg("oops,2")
        .write_stdin("alpha\nbravo\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("bravo"));
}

#[test]
fn emit_css_prints_stylesheet() {
    fencelines()
        .arg("--emit-css")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}
