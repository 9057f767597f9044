use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn search_and_get_are_case_sensitive() {
    let setup = "add\nalice\n1\na st\nadd\nAlan\n2\nb st\n";

    Command::cargo_bin("address-book")
        .unwrap()
        .write_stdin(format!("{setup}search\nA\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alan\n2\nb st\n=====\n"))
        .stdout(predicate::str::contains("alice").not());

    Command::cargo_bin("address-book")
        .unwrap()
        .write_stdin(format!("{setup}get\nALICE\nquit\n"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ALICE not found in database..."));
}

#[test]
fn empty_prefix_finds_everyone() {
    Command::cargo_bin("address-book")
        .unwrap()
        .write_stdin("add\nBob\n1\nx\nadd\nCarol\n2\ny\nsearch\n\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bob\n1\nx\n=====\nCarol\n2\ny\n=====\n"));
}
