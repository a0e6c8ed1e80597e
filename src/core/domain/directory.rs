//! Directory fingerprint used as a record address.

use std::fmt;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{Result, StoreError};

/// Hex-encoded SHA-256 of a canonical directory path.
///
/// Always 64 lowercase hex characters, so it is safe to use directly as a
/// file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirectoryKey(String);

impl DirectoryKey {
    /// Length of the hex fingerprint.
    pub const LEN: usize = 64;

    /// Hash a path as given, without touching the filesystem.
    pub fn from_path(path: &Path) -> Self {
        let digest = Sha256::digest(path.as_os_str().as_encoded_bytes());
        Self(format!("{:x}", digest))
    }

    /// Canonicalize `path` (absolute, symlinks resolved) and hash it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Canonicalize` if the directory does not exist or
    /// cannot be resolved.
    pub fn for_dir(path: &Path) -> Result<Self> {
        let canonical = path
            .canonicalize()
            .map_err(|source| StoreError::Canonicalize {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_path(&canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirectoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
