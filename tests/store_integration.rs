//! Integration tests for the JSON lines store and the save queue.
//!
//! These tests load the fixtures under `tests/fixtures`, copy them into
//! temporary directories before writing, and check exactly what lands on disk.

use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};

use belgianlake::error::{exit_codes, LakeError};
use belgianlake::model::Record;
use belgianlake::session::{handle, Effect, Input, Session};
use belgianlake::store::{JsonlStore, RecordStore, SaveQueue};
use rstest::rstest;
use tempfile::TempDir;

/// Get the path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Copy a fixture into a fresh temporary directory.
fn scratch_copy(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::copy(fixture_path(name), &path).unwrap();
    (dir, path)
}

fn read_lines(path: &Path) -> Vec<String> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

mod loading {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_load_sample_fixture() {
        let records = JsonlStore::new(fixture_path("sample.jsonl")).load().unwrap();

        assert_eq!(
            records,
            vec![
                Record::new(true, "/docs/report.pdf"),
                Record::new(false, "/docs/invoice-2024.pdf"),
                Record::new(false, "/scans/résumé.pdf"),
                Record::new(true, "/scans/receipt.png"),
            ]
        );
    }

    #[rstest]
    #[case::wrong_type("bad_type.jsonl", 2)]
    #[case::missing_field("missing_field.jsonl", 2)]
    #[case::not_json("garbage.jsonl", 2)]
    #[case::invalid_utf8("bad_utf8.jsonl", 2)]
    fn test_malformed_line_fails_whole_load(#[case] fixture: &str, #[case] bad_line: usize) {
        let err = JsonlStore::new(fixture_path(fixture)).load().unwrap_err();

        match &err {
            LakeError::FormatError { line, .. } => assert_eq!(*line, bad_line),
            other => panic!("expected a format error, got {other:?}"),
        }
        assert_eq!(err.exit_code(), exit_codes::EXIT_FORMAT_ERROR);
        assert!(err.to_string().contains(&format!("line {bad_line}")));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonlStore::new(dir.path().join("absent.jsonl"))
            .load()
            .unwrap_err();

        assert!(matches!(err, LakeError::FileNotFound { .. }));
        assert_eq!(err.exit_code(), exit_codes::EXIT_FILE_NOT_FOUND);
    }

    #[test]
    fn test_empty_file_loads_no_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.jsonl");
        std::fs::write(&path, "").unwrap();

        assert!(JsonlStore::new(&path).load().unwrap().is_empty());
    }
}

mod saving {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_save_rewrites_whole_file() {
        let (_dir, path) = scratch_copy("sample.jsonl");
        let store = JsonlStore::new(&path);
        let mut records = store.load().unwrap();
        records[1].toggle();

        store.save(&records).unwrap();

        // Blank lines and unknown fields are not preserved.
        assert_eq!(
            read_lines(&path),
            vec![
                r#"{"print":true,"file":"/docs/report.pdf"}"#,
                r#"{"print":true,"file":"/docs/invoice-2024.pdf"}"#,
                r#"{"print":false,"file":"/scans/résumé.pdf"}"#,
                r#"{"print":true,"file":"/scans/receipt.png"}"#,
            ]
        );
        assert_eq!(store.load().unwrap(), records);
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let (dir, path) = scratch_copy("sample.jsonl");
        let store = JsonlStore::new(&path);
        store.save(&[Record::new(true, "only.pdf")]).unwrap();

        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}

mod queue {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Drive a session over a real file, saving through the queue.
    #[tokio::test(flavor = "multi_thread")]
    async fn test_last_issued_save_wins_on_disk() {
        let (_dir, path) = scratch_copy("sample.jsonl");
        let store = Arc::new(JsonlStore::new(&path));
        let (done_tx, done_rx) = mpsc::channel();
        let mut queue = SaveQueue::spawn(
            &tokio::runtime::Handle::current(),
            store.clone(),
            move |outcome| {
                let _ = done_tx.send(outcome);
            },
        );

        let mut session = Session::new(store.load().unwrap());
        let inputs = [
            Input::Char('x'),
            Input::Char('t'),
            Input::Char('a'),
            Input::Enter,
            Input::Char('u'),
            Input::Char('e'),
        ];
        let mut issued = 0;
        for input in inputs {
            let (next, effect) = handle(session, input);
            session = next;
            if let Effect::Save(records) = effect {
                queue.submit(records).unwrap();
                issued += 1;
            }
        }
        queue.shutdown().await;

        let outcomes: Vec<_> = done_rx.try_iter().collect();
        assert_eq!(outcomes.len(), issued);
        assert!(outcomes.iter().all(|o| o.result.is_ok()));
        assert_eq!(store.load().unwrap(), session.records());
    }
}
