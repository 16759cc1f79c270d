use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn make_container(root: &Path, name: &str, entry: &str) -> PathBuf {
    let marker = root.join(name).join("Data/Library/Application Scripts");
    fs::create_dir_all(&marker).unwrap();
    fs::write(marker.join(entry), b"script").unwrap();
    root.join(name)
}

fn sandsweep(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("sandsweep").unwrap();
    cmd.env_remove("RUST_LOG").arg("--root").arg(root);
    cmd
}

#[test]
fn lists_non_system_entries() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_container(temp_dir.path(), "A", "com.vendor.app1");
    make_container(temp_dir.path(), "B", "com.apple.helper");

    let expected = a.join("Data/Library/Application Scripts/com.vendor.app1");
    sandsweep(temp_dir.path())
        .assert()
        .success()
        .stdout(format!("{}\n", expected.display()));
}

#[test]
fn lists_system_entries_on_request() {
    let temp_dir = TempDir::new().unwrap();
    make_container(temp_dir.path(), "A", "com.vendor.app1");
    make_container(temp_dir.path(), "B", "com.apple.helper");

    sandsweep(temp_dir.path())
        .arg("--system")
        .assert()
        .success()
        .stdout(predicate::str::contains("com.vendor.app1"))
        .stdout(predicate::str::contains("com.apple.helper"));
}

#[test]
fn deletes_matching_container() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_container(temp_dir.path(), "A", "com.vendor.app1");
    let b = make_container(temp_dir.path(), "B", "com.apple.helper");

    sandsweep(temp_dir.path())
        .args(["--delete", "com.vendor.app1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion finished: 1 succeeded"));

    assert!(!a.exists());
    assert!(b.exists());
}

#[test]
fn partial_failure_exits_nonzero() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_container(temp_dir.path(), "A", "one");

    sandsweep(temp_dir.path())
        .args(["--delete", "one ghost"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("1 succeeded, 1 failed"))
        .stdout(predicate::str::contains(
            "ghost: no container found containing file 'ghost'",
        ))
        .stderr(predicate::str::contains("Error: deletion partially failed"))
        .stderr(predicate::str::contains("Setup error").not())
        .stderr(predicate::str::contains("deletion failed").not());

    assert!(!a.exists());
}

#[test]
fn blank_delete_list_is_noop() {
    let temp_dir = TempDir::new().unwrap();
    let a = make_container(temp_dir.path(), "A", "one");

    sandsweep(temp_dir.path())
        .args(["--delete", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 succeeded"));

    assert!(a.exists());
}

#[test]
fn missing_root_is_fatal() {
    let temp_dir = TempDir::new().unwrap();

    sandsweep(&temp_dir.path().join("missing"))
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Setup error"))
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn json_list_output() {
    let temp_dir = TempDir::new().unwrap();
    make_container(temp_dir.path(), "A", "com.vendor.app1");

    let output = sandsweep(temp_dir.path())
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["paths"].as_array().unwrap().len(), 1);
}
