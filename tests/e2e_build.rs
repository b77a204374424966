//! End-to-end tests for `jackc build`, driving the compiled binary
//! directly through its command-line interface.

mod common;

use std::fs;

use assert_cmd::Command;
use common::write_jack_file;
use predicates::prelude::*;

#[test]
fn build_single_file_writes_sibling_vm_file() {
    let (_dir, path) = write_jack_file(
        "Main",
        "class Main { function void main() { do Output.printString(\"hi\"); return; } }",
    );

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("build")
        .arg(&path)
        .assert()
        .success();

    let vm_path = path.with_extension("vm");
    let vm_text = fs::read_to_string(vm_path).expect("expected a sibling .vm file");
    assert!(vm_text.starts_with("function Main.main 0\n"));
    assert!(vm_text.contains("call Output.printString 1\n"));
}

#[test]
fn build_is_the_default_mode_with_no_subcommand() {
    let (_dir, path) = write_jack_file(
        "Main",
        "class Main { function void main() { return; } }",
    );

    Command::cargo_bin("jackc")
        .unwrap()
        .arg(&path)
        .assert()
        .success();

    assert!(path.with_extension("vm").exists());
}

#[test]
fn build_on_a_directory_compiles_every_jack_file() {
    let (dir, main_path) = write_jack_file(
        "Main",
        "class Main { function void main() { do Helper.go(); return; } }",
    );
    fs::write(
        dir.path().join("Helper.jack"),
        "class Helper { function void go() { return; } }",
    )
    .unwrap();
    // A non-.jack file must be ignored.
    fs::write(dir.path().join("notes.txt"), "not jack source").unwrap();

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("build")
        .arg(dir.path())
        .assert()
        .success();

    assert!(main_path.with_extension("vm").exists());
    assert!(dir.path().join("Helper.vm").exists());
    assert!(!dir.path().join("notes.vm").exists());
}

#[test]
fn build_reports_a_fatal_parse_error_and_exits_nonzero() {
    let (_dir, path) = write_jack_file("Broken", "class Broken { function void f( }");

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("build")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected"));
}

#[test]
fn build_on_a_directory_reports_one_failure_and_still_compiles_the_rest() {
    let (dir, good_path) = write_jack_file(
        "Good",
        "class Good { function void f() { return; } }",
    );
    fs::write(dir.path().join("Bad.jack"), "class Bad { function void f( }").unwrap();

    Command::cargo_bin("jackc")
        .unwrap()
        .arg("build")
        .arg(dir.path())
        .assert()
        .failure();

    assert!(good_path.with_extension("vm").exists());
    assert!(!dir.path().join("Bad.vm").exists());
}
