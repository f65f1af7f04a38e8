//! Run archive tests against real files.

use std::fs;
use std::sync::Arc;

use path_graph_core::config::ArchiveConfig;
use path_graph_core::{compute, sample_graph, RunRecord, RunReport};
use path_graph_storage::{
    archive_from_config, JsonlArchive, MemoryArchive, RunArchive, StorageError,
};
use tempfile::tempdir;

fn record(source: &str, target: &str) -> RunRecord {
    let graph = sample_graph().expect("sample");
    let result = compute(&graph, source).expect("compute");
    let report = RunReport::new(&graph, &result, target).expect("report");
    RunRecord::from_report(&report)
}

#[test]
fn test_jsonl_append_and_list() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = JsonlArchive::open(dir.path().join("runs.jsonl")).expect("open");

    let first = record("A", "G");
    let second = record("C", "F");
    archive.append(&first).expect("append first");
    archive.append(&second).expect("append second");

    let listed = archive.list().expect("list");
    assert_eq!(listed, vec![first, second]);
}

#[test]
fn test_jsonl_missing_file_lists_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = JsonlArchive::open(dir.path().join("never-written.jsonl")).expect("open");
    assert!(archive.list().expect("list").is_empty());
}

#[test]
fn test_jsonl_creates_parent_directories() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("nested/deeper/runs.jsonl");
    let archive = JsonlArchive::open(&path).expect("open");
    archive.append(&record("A", "C")).expect("append");
    assert!(path.exists());
    assert_eq!(archive.path(), path.as_path());
}

#[test]
fn test_jsonl_persists_across_reopen() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("runs.jsonl");
    let rec = record("B", "F");
    JsonlArchive::open(&path)
        .expect("open")
        .append(&rec)
        .expect("append");

    let reopened = JsonlArchive::open(&path).expect("reopen");
    assert_eq!(reopened.list().expect("list"), vec![rec]);
}

#[test]
fn test_jsonl_corrupt_line_reports_position() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("runs.jsonl");
    let archive = JsonlArchive::open(&path).expect("open");
    archive.append(&record("A", "G")).expect("append");

    let mut content = fs::read_to_string(&path).expect("read");
    content.push_str("\n{not json}\n");
    fs::write(&path, content).expect("write");

    match archive.list() {
        Err(StorageError::Corrupt { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[test]
fn test_failed_append_leaves_result_untouched() {
    let dir = tempdir().expect("Failed to create temp dir");
    // A directory where the archive file should be makes every append fail.
    let path = dir.path().join("runs.jsonl");
    fs::create_dir(&path).expect("mkdir");
    let archive = JsonlArchive::open(&path).expect("open");

    let graph = sample_graph().expect("sample");
    let result = compute(&graph, "A").expect("compute");
    let report = RunReport::new(&graph, &result, "G").expect("report");

    let err = archive.append(&RunRecord::from_report(&report)).unwrap_err();
    assert!(matches!(err, StorageError::Io { .. }));
    assert_eq!(result.distance("G"), 5.0);
    assert_eq!(result.path_to("G"), vec!["A", "D", "E", "G"]);
}

#[test]
fn test_recent_returns_tail_in_order() {
    let archive = MemoryArchive::new();
    let records: Vec<_> = ["B", "C", "D", "E"].iter().map(|t| record("A", t)).collect();
    for r in &records {
        archive.append(r).expect("append");
    }

    assert_eq!(archive.len(), 4);
    assert_eq!(archive.recent(2).expect("recent"), records[2..].to_vec());
    assert_eq!(archive.recent(10).expect("recent"), records);
    assert!(archive.recent(0).expect("recent").is_empty());
}

#[test]
fn test_concurrent_appends() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = Arc::new(JsonlArchive::open(dir.path().join("runs.jsonl")).expect("open"));
    let rec = record("A", "G");

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let archive = Arc::clone(&archive);
            let rec = rec.clone();
            scope.spawn(move || {
                for _ in 0..10 {
                    archive.append(&rec).expect("append");
                }
            });
        }
    });

    assert_eq!(archive.list().expect("list").len(), 80);
}

#[test]
fn test_list_during_appends_never_sees_partial_lines() {
    let dir = tempdir().expect("Failed to create temp dir");
    let archive = JsonlArchive::open(dir.path().join("runs.jsonl")).expect("open");
    let rec = record("A", "G");

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..25 {
                    archive.append(&rec).expect("append");
                }
            });
        }
        scope.spawn(|| {
            for _ in 0..50 {
                let listed = archive.list().expect("list while appending");
                assert!(listed.iter().all(|r| r == &rec));
            }
        });
    });

    assert_eq!(archive.list().expect("list").len(), 100);
}

#[test]
fn test_archive_from_config() {
    let disabled = archive_from_config(&ArchiveConfig::default()).expect("memory");
    disabled.append(&record("A", "B")).expect("append");
    assert_eq!(disabled.list().expect("list").len(), 1);

    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("runs.jsonl");
    let config = ArchiveConfig {
        enabled: true,
        path: path.to_string_lossy().into_owned(),
    };
    let archive = archive_from_config(&config).expect("jsonl");
    archive.append(&record("A", "B")).expect("append");
    assert!(path.exists());
}
