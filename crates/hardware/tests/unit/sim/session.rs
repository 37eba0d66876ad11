//! # Session Log Tests

use std::fs;

use lc3sim_core::sim::SessionLog;

#[test]
fn test_dumps_are_appended_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dumpsim");
    let mut log = SessionLog::create(&path).unwrap();
    log.record("first\n").unwrap();
    log.record("second\n").unwrap();
    assert_eq!(log.path(), path.as_path());
    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[test]
fn test_create_truncates_previous_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dumpsim");
    fs::write(&path, "stale").unwrap();
    let _log = SessionLog::create(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_unwritable_location_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("dumpsim");
    assert!(SessionLog::create(&path).is_err());
}
