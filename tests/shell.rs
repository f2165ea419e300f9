use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn contact_book(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("contact-book").unwrap();
    cmd.env("STORAGE_CHOICE", "file")
        .env("CONTACTS_DIR", dir)
        .env("CONTACTS_LOG", "warn");
    cmd
}

#[test]
fn interactive_session() {
    let dir = tempfile::tempdir().unwrap();

    contact_book(dir.path())
        .arg("shell")
        .write_stdin("1\nAna\n123\n1\n \n555\n2\n1\nAna B\n999\n5\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Contact BOOK ---"))
        .stdout(predicate::str::contains("Contact added successfully!"))
        .stdout(predicate::str::contains(
            "! Validation failed: both name and phone are required",
        ))
        .stdout(predicate::str::contains("Contact updated successfully!"))
        .stdout(predicate::str::contains("Bye!"));

    contact_book(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. Ana B                999"));
}

#[test]
fn session_ends_with_input() {
    let dir = tempfile::tempdir().unwrap();

    contact_book(dir.path())
        .arg("shell")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("No contacts yet."))
        .stdout(predicate::str::contains("Bye!"));
}
