use assert_cmd::Command;
use diag_e::e_features::{get_feature_flags, get_feature_flags_json};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_version_feature_flags() {
    let mut cmd = Command::cargo_bin("diag-e").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        // Check that the output starts with "diag-e " and contains a JSON array.
        .stdout(contains("diag-e "))
        .stdout(contains("["))
        .stdout(contains("]"))
        .stdout(if cfg!(feature = "uses_serde") {
            contains("\"uses_serde\"").and(contains("\"!uses_serde\"").not())
        } else {
            contains("\"!uses_serde\"").and(contains("\"uses_serde\"").not())
        });
}

#[test]
fn test_version_skips_log_lookup() {
    // No log exists in an empty directory, but --version never looks for one.
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("diag-e")
        .unwrap()
        .current_dir(dir.path())
        .arg("-v")
        .assert()
        .success();
}

#[test]
fn test_version_lists_color_flag() {
    let expected = if cfg!(feature = "color") {
        "\"color\""
    } else {
        "\"!color\""
    };
    let flags = get_feature_flags();
    assert!(flags.iter().any(|f| format!("\"{}\"", f) == expected));
    assert!(get_feature_flags_json().contains(expected));

    Command::cargo_bin("diag-e")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(expected));
}
