use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn export_copies_target_and_linked_files() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    let out = tmp.path().join("out");

    write_file(
        &vault.join("main_note.md"),
        "# Main\n\nSee [[second_note]].\n\n![img](images/sample.png)\n",
    );
    write_file(&vault.join("second_note.md"), "# Second\n");
    write_file(&vault.join("images/sample.png"), "png-bytes");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdx"));
    cmd.arg("export").arg(vault.join("main_note.md")).arg(&out);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Total files copied: 3"));

    assert!(out.join("main_note.md").is_file());
    assert!(out.join("second_note.md").is_file());
    assert!(out.join("sample.png").is_file());
}

#[test]
fn export_json_summary() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path().join("vault");
    let out = tmp.path().join("out");

    write_file(&vault.join("note.md"), "no links here\n");

    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("mdx"));
    cmd.arg("export").arg(vault.join("note.md")).arg(&out).arg("--json");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"notes_copied\": 1"))
        .stdout(predicate::str::contains("\"total_copied\": 1"));
}
