//! Integration tests for the paperrec CLI
//!
//! These tests run the paperrec binary against a small fixture corpus.

mod support;

use predicates::prelude::*;
use std::fs;
use support::{paperrec, write_papers};
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    paperrec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: paperrec"))
        .stdout(predicate::str::contains("recommend"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_version_flag() {
    paperrec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("paperrec"));
}

// ============================================================================
// list / show
// ============================================================================

#[test]
fn test_list_human_drops_duplicates() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1) Graph networks for molecules"))
        .stdout(predicate::str::contains("10) Legged locomotion"))
        .stdout(predicate::str::contains("11)").not());
}

#[test]
fn test_list_json() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    let output = paperrec()
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let items: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let items = items.as_array().unwrap();
    assert_eq!(items.len(), 10);
    assert_eq!(items[5]["number"], 6);
    assert_eq!(items[5]["title"], "Medieval pottery, revisited");
}

#[test]
fn test_list_records() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .args(["--format", "records", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H paperrec=1 records=1 mode=list articles=10",
        ))
        .stdout(predicate::str::contains("A 3 \"Citation graphs\""));
}

#[test]
fn test_show_article() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .args(["show", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5) Playing Atari"))
        .stdout(predicate::str::contains(
            "reinforcement learning agents play atari games",
        ));
}

#[test]
fn test_show_zero_is_usage_error() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .args(["show", "0"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("between 1 and 10"));
}

// ============================================================================
// recommend
// ============================================================================

#[test]
fn test_recommend_json() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    let output = paperrec()
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "recommend", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["chosen"]["number"], 1);

    let numbers = |key: &str| -> Vec<u64> {
        value[key]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v["number"].as_u64().unwrap())
            .collect()
    };

    let most = numbers("most_similar");
    assert_eq!(most.len(), 8);
    assert!(!most.contains(&2), "near-duplicate must be excluded");
    assert!(most.contains(&3));
    assert!(most.contains(&4));
    assert!(most.windows(2).all(|w| w[0] <= w[1]));

    let least = numbers("least_similar");
    assert_eq!(least.len(), 3);
    assert!(least.contains(&6));
}

#[test]
fn test_recommend_human() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .args(["recommend", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Here are some similar papers you should look at:",
        ))
        .stdout(predicate::str::contains("\n3) Citation graphs\n"))
        .stdout(predicate::str::contains("Here are some NOT so similar papers:"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_recommend_is_deterministic() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    let run = || {
        paperrec()
            .arg("--data")
            .arg(&data)
            .args(["--format", "records", "recommend", "4"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_recommend_invalid_number_json_error() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    let output = paperrec()
        .arg("--data")
        .arg(&data)
        .args(["--format", "json", "recommend", "abc"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let error: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(error["error"]["code"], 2);
    assert_eq!(error["error"]["type"], "usage_error");
}

#[test]
fn test_recommend_with_config_file() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());
    let config = dir.path().join("config.toml");
    fs::write(
        &config,
        "[ranking]\nmost_similar = 2\nleast_similar = 1\nshortfall = \"truncate\"\n",
    )
    .unwrap();

    let output = paperrec()
        .arg("--data")
        .arg(&data)
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "recommend", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["most_similar"].as_array().unwrap().len(), 2);
    assert_eq!(value["least_similar"].as_array().unwrap().len(), 1);
}

// ============================================================================
// Data errors
// ============================================================================

#[test]
fn test_missing_column_exit_code_3() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("bad.csv");
    fs::write(&data, "titles,summary\nA,b\n").unwrap();

    paperrec()
        .arg("--data")
        .arg(&data)
        .arg("list")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("abstracts"));
}

#[test]
fn test_missing_data_file_fails() {
    let dir = tempdir().unwrap();

    paperrec()
        .arg("--data")
        .arg(dir.path().join("nope.csv"))
        .arg("list")
        .assert()
        .code(1);
}

#[test]
fn test_unknown_format_exit_code_2() {
    paperrec()
        .args(["--format", "yaml", "list"])
        .assert()
        .code(2);
}

// ============================================================================
// Interactive session
// ============================================================================

#[test]
fn test_interactive_session() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .arg("interactive")
        .write_stdin("0\nnope\n6\n-1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Loaded 10 articles from cool computer scientists",
        ))
        .stdout(predicate::str::contains(
            "Articles start from 1, not 0...try again",
        ))
        .stdout(predicate::str::contains("Invalid input, try again..."))
        .stdout(predicate::str::contains("6) Medieval pottery, revisited"))
        .stdout(predicate::str::contains("Exiting the recommender system."));
}

#[test]
fn test_no_command_runs_session_until_eof() {
    let dir = tempdir().unwrap();
    let data = write_papers(dir.path());

    paperrec()
        .arg("--data")
        .arg(&data)
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2) Graph networks for the molecules"))
        .stdout(predicate::str::contains("Pick an article:"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_command_reflects_data_override() {
    let output = paperrec()
        .args(["--data", "elsewhere.csv", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let value: toml::Value = toml::from_str(&text).unwrap();
    assert_eq!(value["data_path"].as_str(), Some("elsewhere.csv"));
    assert_eq!(value["ranking"]["most_similar"].as_integer(), Some(8));
    assert_eq!(value["vectorizer"]["max_df"].as_float(), Some(0.33));
}
