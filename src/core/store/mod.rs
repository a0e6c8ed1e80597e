//! Encrypted record storage.
//!
//! One record per working directory, addressed by the directory's
//! [`DirectoryKey`](crate::core::domain::DirectoryKey). The store only moves
//! opaque bytes; it never decrypts, so password checks before a destructive
//! operation belong to the caller (see [`Vault`](crate::core::vault::Vault)).
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use std::path::PathBuf;

use crate::error::Result;

mod fs;

pub use fs::{record_path, Filesystem};

/// Record storage bound to a single directory.
pub trait Store {
    /// Where the record lives (or would live).
    fn path(&self) -> PathBuf;

    /// Check if a record exists.
    fn exists(&self) -> bool;

    /// Persist a new record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if a record is already present;
    /// the existing record is never overwritten.
    fn create(&self, bytes: &[u8]) -> Result<()>;

    /// Read the record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no record.
    fn read(&self) -> Result<Vec<u8>>;

    /// Remove the record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no record.
    fn delete(&self) -> Result<()>;

    /// Atomically swap the contents of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no record to replace.
    fn replace(&self, bytes: &[u8]) -> Result<()>;
}
