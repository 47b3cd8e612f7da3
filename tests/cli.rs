//! CLI behavior tests for the flag paths that exit before the terminal
//! is put into raw mode.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_tool() {
    Command::cargo_bin("quiver")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("point and vector visualizer"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn version_prints_the_package_version() {
    Command::cargo_bin("quiver")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("quiver"));
}

#[test]
fn missing_scene_file_fails_before_entering_the_tui() {
    Command::cargo_bin("quiver")
        .unwrap()
        .arg("definitely-not-a-real-scene-file.scene")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}
