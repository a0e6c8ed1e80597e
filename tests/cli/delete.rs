//! Tests for `secexport delete`.

use crate::support::*;

#[test]
fn test_delete_removes_record() {
    let t = Test::created();

    let output = t.delete(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, "record deleted");
    assert!(t.records().is_empty());

    assert_runtime_error(&t.retrieve(PASSWORD), "no record found");
}

#[test]
fn test_delete_wrong_password_keeps_record() {
    let t = Test::created();

    let output = t.delete("wrong");
    assert_runtime_error(&output, "invalid password");
    assert_eq!(t.records().len(), 1);
    assert_success(&t.retrieve(PASSWORD));
}

#[test]
fn test_delete_without_record() {
    let t = Test::new();

    assert_runtime_error(&t.delete(PASSWORD), "no record found");
}

#[test]
fn test_create_after_delete() {
    let t = Test::created();
    assert_success(&t.delete(PASSWORD));

    let output = t.create("new password");
    assert_success(&output);
    assert_success(&t.retrieve("new password"));
    assert_runtime_error(&t.retrieve(PASSWORD), "invalid password");
}
