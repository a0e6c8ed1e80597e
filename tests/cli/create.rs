//! Tests for `secexport create`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_create_prints_exports() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.create(PASSWORD);
    assert_success(&output);
    assert_eq!(export_lines(&output), STANDARD_EXPORTS);
    assert_eq!(t.records().len(), 1);
}

#[test]
fn test_create_stdout_is_only_exports() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    t.cmd()
        .args(["--verbose", "create", "--from", SECRETS_FILE, "-p", PASSWORD])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^(export [A-Z0-9_]+='[^\n]*'\n)+$").unwrap());
}

#[test]
fn test_create_twice_is_refused() {
    let t = Test::created();

    let output = t.create(PASSWORD);
    assert_runtime_error(&output, "already exists");
    assert_stderr_contains(&output, "secexport delete");

    // The original record still opens.
    assert_success(&t.retrieve(PASSWORD));
}

#[test]
fn test_create_with_filters() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    let output = t.create_filtered(PASSWORD, &["db"]);
    assert_success(&output);
    assert_eq!(
        export_lines(&output),
        vec!["export DB_PASS='s3cr3t'", "export DB_USER='app'"]
    );
}

#[test]
fn test_create_quotes_values() {
    let t = Test::with_secrets(QUOTED_SECRETS);

    let output = t.create(PASSWORD);
    assert_success(&output);
    assert_stdout_contains(&output, r"export MOTD='it'\''s fine'");
}

#[test]
fn test_create_empty_source() {
    let t = Test::with_secrets("[]");

    let output = t.create(PASSWORD);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert_eq!(t.records().len(), 1);
}

#[test]
fn test_create_from_missing_file_writes_nothing() {
    let t = Test::new();

    let output = t.create(PASSWORD);
    assert_runtime_error(&output, "failed to read secrets file");
    assert!(t.records().is_empty());
}

#[test]
fn test_create_from_malformed_file() {
    let t = Test::with_secrets("{not json");

    let output = t.create(PASSWORD);
    assert_runtime_error(&output, "malformed secrets file");
    assert!(t.records().is_empty());
}

#[test]
fn test_create_password_from_env() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    t.cmd()
        .args(["create", "--from", SECRETS_FILE])
        .env("SECEXPORT_PASSWORD", PASSWORD)
        .assert()
        .success();

    assert_success(&t.retrieve(PASSWORD));
}

#[test]
fn test_create_records_are_per_directory() {
    let t = Test::created();
    let nested = t.dir.path().join("service");
    std::fs::create_dir(&nested).unwrap();
    std::fs::copy(t.secrets_path(), nested.join(SECRETS_FILE)).unwrap();

    t.cmd()
        .current_dir(&nested)
        .args(["create", "--from", SECRETS_FILE, "-p", "other"])
        .assert()
        .success();

    assert_eq!(t.records().len(), 2);
}

#[cfg(not(feature = "aws"))]
#[test]
fn test_create_aws_without_feature() {
    let t = Test::new();

    t.cmd()
        .args(["create", "prod", "-s", "true", "-m", "false", "-p", PASSWORD])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--features aws"));
    assert!(t.records().is_empty());
}

#[test]
fn test_create_without_filters_is_usage_error() {
    let t = Test::new();

    t.cmd()
        .args(["create", "-p", PASSWORD])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("FILTERS"));
    assert!(t.records().is_empty());
}

#[test]
fn test_create_aws_with_file_still_needs_filters() {
    let t = Test::with_secrets(STANDARD_SECRETS);

    t.cmd()
        .args(["create", "--from", SECRETS_FILE, "-s", "true", "-p", PASSWORD])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("needs at least one filter"));
    assert!(t.records().is_empty());
}
