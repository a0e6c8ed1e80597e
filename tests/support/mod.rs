//! Test support utilities for secexport integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;
pub mod skip;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir, home dir and record cache.
/// No process-global state is mutated; child processes use `.current_dir()`
/// and explicit env vars so tests can safely run in parallel.
pub struct Test {
    /// Working directory the commands run in
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Record cache root
    pub cache: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let cache = TempDir::new().expect("failed to create temp cache");

        Self { dir, home, cache }
    }

    /// Create a test environment with a secrets file in the project dir.
    pub fn with_secrets(json: &str) -> Self {
        let t = Self::new();
        t.write_secrets(json);
        t
    }

    /// Create a test environment with a record already created from
    /// [`STANDARD_SECRETS`] under [`PASSWORD`].
    pub fn created() -> Self {
        let t = Self::with_secrets(STANDARD_SECRETS);
        let output = t.create(PASSWORD);
        assert!(
            output.status.success(),
            "Failed to create record: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Write (or overwrite) the project's secrets file.
    pub fn write_secrets(&self, json: &str) -> PathBuf {
        let path = self.secrets_path();
        std::fs::write(&path, json).expect("failed to write secrets file");
        path
    }

    pub fn secrets_path(&self) -> PathBuf {
        self.dir.path().join(SECRETS_FILE)
    }

    /// Files currently in the record cache root.
    pub fn records(&self) -> Vec<PathBuf> {
        let root = self.cache.path().join("records");
        match std::fs::read_dir(&root) {
            Ok(entries) => entries.map(|e| e.unwrap().path()).collect(),
            Err(_) => Vec::new(),
        }
    }
}
