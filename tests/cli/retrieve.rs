//! Tests for `secexport retrieve`.

use crate::support::*;

#[test]
fn test_retrieve_matches_create() {
    let t = Test::created();

    let output = t.retrieve(PASSWORD);
    assert_success(&output);
    assert_eq!(export_lines(&output), STANDARD_EXPORTS);
}

#[test]
fn test_retrieve_reads_record_not_source() {
    let t = Test::created();
    std::fs::remove_file(t.secrets_path()).unwrap();

    let output = t.retrieve(PASSWORD);
    assert_success(&output);
    assert_eq!(export_lines(&output).len(), STANDARD_EXPORTS.len());
}

#[test]
fn test_retrieve_wrong_password() {
    let t = Test::created();

    let output = t.retrieve("wrong");
    assert_runtime_error(&output, "invalid password");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_retrieve_tampered_record() {
    let t = Test::created();
    let record = t.records().pop().unwrap();
    let mut bytes = std::fs::read(&record).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x01;
    std::fs::write(&record, bytes).unwrap();

    let output = t.retrieve(PASSWORD);
    assert_runtime_error(&output, "invalid password");
}

#[test]
fn test_retrieve_without_record() {
    let t = Test::new();

    let output = t.retrieve(PASSWORD);
    assert_runtime_error(&output, "no record found");
    assert_stderr_contains(&output, "secexport create");
}

#[test]
fn test_retrieve_from_other_directory() {
    let t = Test::created();
    let elsewhere = tempfile::TempDir::new().unwrap();

    let output = t
        .cmd()
        .current_dir(elsewhere.path())
        .args(["retrieve", "-p", PASSWORD])
        .output()
        .unwrap();
    assert_runtime_error(&output, "no record found");
}
