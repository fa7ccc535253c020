//! Integration tests for the JSON-document history store.

use serde_json::json;

use buildtrend::core::{RunRecord, SUMMARIES_KEY};
use buildtrend::history::{FileHistory, HistoryStore};

fn record_with(identifier: &str, value: serde_json::Value, summary: &str) -> RunRecord {
    let mut record = RunRecord::new();
    record.insert_raw(identifier, value);
    record.push_summary(summary);
    record
}

#[test]
fn append_then_load_round_trips_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = FileHistory::new(dir.path().join("history.json"));

    let record = record_with("artifact_size", json!(2_000_000), "📦 Artifact size: 2.0 MB");
    history.append(record.clone()).unwrap();

    let loaded = history.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0], record);
}

#[test]
fn records_are_ordered_newest_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut history = FileHistory::new(dir.path().join("history.json"));

    history
        .append(record_with("warning_count", json!(10), "warnings: 10"))
        .unwrap();
    history
        .append(record_with("warning_count", json!(7), "warnings: 7"))
        .unwrap();

    assert_eq!(history.previous_value("warning_count"), Some(json!(7)));
    let loaded = history.load();
    assert_eq!(loaded[0].raw_value("warning_count"), Some(&json!(7)));
    assert_eq!(loaded[1].raw_value("warning_count"), Some(&json!(10)));
}

#[test]
fn missing_file_loads_as_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let history = FileHistory::new(dir.path().join("never-written.json"));

    assert!(history.load().is_empty());
    assert!(history.most_recent().is_none());
    assert!(history.previous_value("artifact_size").is_none());
}

#[test]
fn corrupt_file_loads_as_empty_and_append_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let mut history = FileHistory::new(&path);
    assert!(history.load().is_empty());

    // Appending over corrupt content starts a fresh document instead of
    // failing or truncating mid-write.
    history
        .append(record_with("artifact_size", json!(1024), "📦 Artifact size: 1.0 KB"))
        .unwrap();

    let loaded = history.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].raw_value("artifact_size"), Some(&json!(1024)));
}

#[test]
fn parent_directories_are_created_on_append() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/output/history.json");
    let mut history = FileHistory::new(&path);

    history
        .append(record_with("warning_count", json!(0), "warnings: 0"))
        .unwrap();

    assert!(path.exists());
    assert_eq!(history.load().len(), 1);
}

#[test]
fn document_shape_is_the_durable_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let mut history = FileHistory::new(&path);

    history
        .append(record_with("artifact_size", json!(2_000_000), "📦 Artifact size: 2.0 MB"))
        .unwrap();

    let document: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    let data = document["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["artifact_size"], json!(2_000_000));
    assert_eq!(data[0][SUMMARIES_KEY], json!(["📦 Artifact size: 2.0 MB"]));
}

#[test]
fn append_to_an_unwritable_path_reports_persistence_failure() {
    let dir = tempfile::tempdir().unwrap();
    // The history path is an existing directory, so the rename must fail.
    let occupied = dir.path().join("history.json");
    std::fs::create_dir(&occupied).unwrap();
    let mut history = FileHistory::new(&occupied);

    let err = history.append(RunRecord::new()).unwrap_err();
    assert!(matches!(
        err,
        buildtrend::error::TrendError::Persistence(_)
    ));
    // The staging file is cleaned up when the rename fails.
    assert!(!dir.path().join("history.json.tmp").exists());
}
