#![allow(missing_docs, clippy::expect_used, clippy::unwrap_used)]

mod common;

use common::{lectern_cmd, run_json, write_sample_deck};
use predicates::prelude::*;
use tempfile::TempDir;

fn slide_ids(report: &serde_json::Value) -> Vec<u64> {
    report["results"]
        .as_array()
        .unwrap()
        .iter()
        .map(|hit| hit["slideId"].as_u64().unwrap())
        .collect()
}

#[test]
fn test_title_matches_in_slide_order() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let report = run_json(dir.path(), &metadata, &["search", "topic"]);
    assert_eq!(report["query"], "topic");
    assert_eq!(report["totalResults"], 3);
    assert_eq!(slide_ids(&report), vec![4, 7, 8]);
    assert_eq!(report["results"][0]["title"], "TopicA");
    assert_eq!(report["results"][0]["matchedText"], "TopicA");
    assert_eq!(
        report["results"][0]["thumbnail"],
        "/slides/thumbnails/slide-0004.jpg"
    );
}

#[test]
fn test_multi_word_query_is_joined() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let report = run_json(dir.path(), &metadata, &["search", "sub", "a1"]);
    assert_eq!(slide_ids(&report), vec![5, 6]);
}

#[test]
fn test_short_query_returns_nothing() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let report = run_json(dir.path(), &metadata, &["search", "t"]);
    assert_eq!(report["totalResults"], 0);

    lectern_cmd(dir.path())
        .args(["search", "t", "--format", "text", "--metadata"])
        .arg(&metadata)
        .assert()
        .success()
        .stdout(predicate::str::contains("at least 2 characters"));
}

#[test]
fn test_limit_caps_results() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let report = run_json(dir.path(), &metadata, &["search", "slide", "--limit", "2"]);
    assert_eq!(slide_ids(&report), vec![1, 2]);
}

#[test]
fn test_config_dir_caps_results() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());
    std::fs::write(
        dir.path().join("config.toml"),
        "[search]\nmax_results = 1\n",
    )
    .unwrap();

    let report = run_json(dir.path(), &metadata, &["search", "topic", "--limit", "5"]);
    assert_eq!(slide_ids(&report), vec![4]);
}

#[test]
fn test_invalid_config_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("broken.toml");
    std::fs::write(&config, "[search]\nmax_results = 0\n").unwrap();

    lectern_cmd(dir.path())
        .args(["search", "topic", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_results"));
}

#[test]
fn test_text_output_shows_snippet_for_text_matches() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    lectern_cmd(dir.path())
        .args(["search", "slide 9", "--format", "text", "--metadata"])
        .arg(&metadata)
        .assert()
        .success()
        .stdout(predicate::str::contains("Conclusion"))
        .stdout(predicate::str::contains("Slide 9 Conclusion"));
}

#[test]
fn test_jsonl_emits_one_hit_per_line() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let output = lectern_cmd(dir.path())
        .args(["search", "topic", "--jsonl", "--metadata"])
        .arg(&metadata)
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines: Vec<serde_json::Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2]["slideId"], 8);
}

#[test]
fn test_fallback_deck_is_searchable() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");

    let report = run_json(dir.path(), &missing, &["search", "slide 1"]);
    assert_eq!(slide_ids(&report), vec![1, 10]);
    assert_eq!(report["results"][0]["title"], "Introduction");
}

#[test]
fn test_index_dump_lists_every_slide() {
    let dir = TempDir::new().unwrap();
    let metadata = write_sample_deck(dir.path());

    let index = run_json(dir.path(), &metadata, &["index"]);
    let entries = index.as_object().unwrap();
    assert_eq!(entries.len(), 10);
    assert_eq!(entries["4"]["title"], "TopicA");
    assert_eq!(entries["4"]["text"], "Slide 4 TopicA");
    assert_eq!(entries["6"]["title"], "Sub A1");
}
