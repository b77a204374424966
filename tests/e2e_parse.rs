//! End-to-end tests for `jackc parse`.

mod common;

use assert_cmd::Command;
use common::write_jack_file;
use predicates::prelude::*;

#[test]
fn parse_prints_xml_dump_to_stdout() {
    let (_dir, path) = write_jack_file(
        "Main",
        "class Main { function void main() { return; } }",
    );

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<class>\n"))
        .stdout(predicate::str::contains("<subroutineDec>\n"))
        .stdout(predicate::str::contains("<keyword> return </keyword>\n"));
}

#[test]
fn parse_does_not_write_a_vm_file() {
    let (_dir, path) = write_jack_file(
        "Main",
        "class Main { function void main() { return; } }",
    );

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .success();

    assert!(!path.with_extension("vm").exists());
}

#[test]
fn parse_reports_a_fatal_lex_error() {
    let (_dir, path) = write_jack_file("Main", "class Main { let x = 1 @ 2; }");

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("parse")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected character"));
}
