//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("fancylists")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fancy ordered lists"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("fancylists")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("fancylists")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("fancylists")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("fancylists")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert a Markdown document to HTML"))
        .stdout(predicate::str::contains("--xhtml"))
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("fancy fl-"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("fancylists")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block tree"))
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains(".fancylists.toml"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("fancylists")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure();
}
