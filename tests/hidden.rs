use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn hidden_directories_are_skipped_by_default() {
    let home = assert_fs::TempDir::new().unwrap();
    let temp = assert_fs::TempDir::new().unwrap();
    let obsidian = temp.child(".obsidian");
    obsidian.create_dir_all().unwrap();
    obsidian.child("workspace.json").write_str("{}\n").unwrap();
    temp.child("note.md").write_str("# note\n").unwrap();

    let mut cmd = Command::cargo_bin("glipper").unwrap();
    cmd.env("HOME", home.path()).arg(temp.path()).arg("--no-clipboard");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## File: note.md"))
        .stdout(predicate::str::contains("workspace.json").not());

    temp.close().unwrap();
    home.close().unwrap();
}

#[test]
fn skip_hidden_false_descends_into_hidden_directories() {
    let home = assert_fs::TempDir::new().unwrap();
    let temp = assert_fs::TempDir::new().unwrap();
    let obsidian = temp.child(".obsidian");
    obsidian.create_dir_all().unwrap();
    obsidian.child("workspace.json").write_str("{}\n").unwrap();

    let mut cmd = Command::cargo_bin("glipper").unwrap();
    cmd.env("HOME", home.path())
        .arg(temp.path())
        .arg("--skip-hidden=false")
        .arg("--no-clipboard");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## File: .obsidian/workspace.json"));

    temp.close().unwrap();
    home.close().unwrap();
}

#[test]
fn hidden_files_are_always_collected() {
    let home = assert_fs::TempDir::new().unwrap();
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child(".env").write_str("TOKEN=1\n").unwrap();

    let mut cmd = Command::cargo_bin("glipper").unwrap();
    cmd.env("HOME", home.path()).arg(temp.path()).arg("--no-clipboard");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## File: .env"));

    temp.close().unwrap();
    home.close().unwrap();
}

#[test]
fn dot_named_root_is_collected_despite_skip_hidden() {
    let home = assert_fs::TempDir::new().unwrap();
    let temp = assert_fs::TempDir::new().unwrap();
    let stash = temp.child(".stash");
    stash.create_dir_all().unwrap();
    stash.child("kept.txt").write_str("kept\n").unwrap();

    let mut cmd = Command::cargo_bin("glipper").unwrap();
    cmd.env("HOME", home.path()).arg(stash.path()).arg("--no-clipboard");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("## File: kept.txt"));

    temp.close().unwrap();
    home.close().unwrap();
}
