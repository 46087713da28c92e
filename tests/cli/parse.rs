//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("fancylists")
        .arg("parse")
        .write_stdin("# Heading\n\nParagraph.")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT"))
        .stdout(predicate::str::contains("HEADING level=1"))
        .stdout(predicate::str::contains("PARAGRAPH \"Paragraph.\""));
}

#[test]
fn test_parse_shows_list_types() {
    cargo_bin_cmd!("fancylists")
        .arg("parse")
        .write_stdin("ii. two\n#. three\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("LIST '.' start=2 tight [type=i]"))
        .stdout(predicate::str::contains("LIST_ITEM offset=3 [value=3]"));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\n- Item 1\n- Item 2\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEADING"))
        .stdout(predicate::str::contains("LIST '-' tight"))
        .stdout(predicate::str::contains("TEXT_BLOCK \"Item 2\""));
}

#[test]
fn test_parse_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, "a. not a list\n").unwrap();
    fs::write(&config_file, "[extensions]\nfancy_lists = false\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("PARAGRAPH \"a. not a list\""))
        .stdout(predicate::str::contains("LIST").not());
}
