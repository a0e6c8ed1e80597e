//! Tests for `secexport refresh`.

use crate::support::*;

#[test]
fn test_refresh_picks_up_new_values() {
    let t = Test::created();
    t.write_secrets(r#"[{"key": "token", "value": "rotated", "origin_id": "arn:token"}]"#);

    let output = t.refresh(PASSWORD);
    assert_success(&output);
    assert_eq!(export_lines(&output), vec!["export TOKEN='rotated'"]);

    let output = t.retrieve(PASSWORD);
    assert_eq!(export_lines(&output), vec!["export TOKEN='rotated'"]);
}

#[test]
fn test_refresh_wrong_password_keeps_record() {
    let t = Test::created();
    t.write_secrets("[]");

    assert_runtime_error(&t.refresh("wrong"), "invalid password");
    assert_eq!(export_lines(&t.retrieve(PASSWORD)), STANDARD_EXPORTS);
}

#[test]
fn test_refresh_failed_fetch_keeps_record() {
    let t = Test::created();
    std::fs::remove_file(t.secrets_path()).unwrap();

    assert_runtime_error(&t.refresh(PASSWORD), "failed to read secrets file");
    assert_eq!(export_lines(&t.retrieve(PASSWORD)), STANDARD_EXPORTS);
}

#[test]
fn test_refresh_without_record() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    assert_runtime_error(&t.refresh(PASSWORD), "no record found");
    assert!(t.records().is_empty());
}
