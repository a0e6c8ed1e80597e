//! Local file backend.
//!
//! Reads a JSON array of raw secrets:
//!
//! ```json
//! [
//!   { "key": "db", "value": "{\"user\":\"app\"}", "origin_id": "local:db" }
//! ]
//! ```
//!
//! Useful for offline setups and for seeding a record from an export.

use std::path::PathBuf;

use tracing::trace;

use super::SecretBackend;
use crate::core::domain::RawSecret;
use crate::core::types::Filter;
use crate::error::{Result, RetrievalError};

/// Raw secrets from a JSON file.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SecretBackend for FileBackend {
    fn name(&self) -> &'static str {
        "file"
    }

    /// A non-empty filter list keeps secrets whose key contains any filter.
    fn list(&self, filters: &[Filter]) -> Result<Vec<RawSecret>> {
        trace!(path = %self.path.display(), "reading secrets file");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| RetrievalError::File {
                path: self.path.clone(),
                source,
            })?;
        let secrets: Vec<RawSecret> =
            serde_json::from_str(&contents).map_err(|source| RetrievalError::FileFormat {
                path: self.path.clone(),
                source,
            })?;

        if filters.is_empty() {
            return Ok(secrets);
        }
        Ok(secrets
            .into_iter()
            .filter(|s| filters.iter().any(|f| s.key().contains(f.as_str())))
            .collect())
    }
}
