//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin("a. one\nb. two\n")
        .assert()
        .success()
        .stdout(
            "<ol class=\"fancy fl-lcalpha\" type=\"a\" start=\"1\">\n\
             <li>one</li>\n\
             <li>two</li>\n\
             </ol>\n",
        );
}

#[test]
fn test_render_type_change_splits_lists() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin("1. one\nA. two\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<ol class=\"fancy fl-num\" type=\"1\" start=\"1\">"))
        .stdout(predicate::str::contains("<ol class=\"fancy fl-ucalpha\" type=\"A\" start=\"1\">"));
}

#[test]
fn test_render_file_to_output() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("notes.md");
    let output = temp_dir.path().join("notes.html");
    fs::write(&input, "i. one\nii. two\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args([
            "render",
            input.to_str().unwrap(),
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert!(html.starts_with("<ol class=\"fancy fl-lcroman\" type=\"i\" start=\"1\">"));
}

#[test]
fn test_render_xhtml_flag() {
    cargo_bin_cmd!("fancylists")
        .args(["render", "--xhtml"])
        .write_stdin("a  \nb\n\n***\n")
        .assert()
        .success()
        .stdout("<p>a<br />\nb</p>\n<hr />\n");
}

#[test]
fn test_render_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("docs");
    fs::create_dir(&nested).unwrap();
    fs::write(
        temp_dir.path().join(".fancylists.toml"),
        "[extensions]\nfancy_lists = false\n",
    )
    .unwrap();
    let input = nested.join("list.md");
    fs::write(&input, "3. three\n4. four\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ol start=\"3\">"));
}

#[test]
fn test_render_block_attributes_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("attrs.toml");
    fs::write(&config_file, "[extensions]\nblock_attributes = true\n").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("- a\n- b\n{.sbs}\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<ul class=\"sbs\">"));
}

#[test]
fn test_render_crlf_input() {
    cargo_bin_cmd!("fancylists")
        .arg("render")
        .write_stdin("- a\r\n")
        .assert()
        .success()
        .stdout("<ul>\r\n<li>a</li>\r\n</ul>\r\n");
}

#[test]
fn test_render_invalid_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "[extensions\nfancy_lists = ").unwrap();

    cargo_bin_cmd!("fancylists")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("- a\n")
        .assert()
        .failure();
}
