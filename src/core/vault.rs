//! Vault.
//!
//! The primary interface for secexport operations. Ties retrieval,
//! normalization, encryption and the per-directory record together.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::backend::{self, SecretBackend};
use crate::core::cipher::{Age, Cipher};
use crate::core::config::Config;
use crate::core::domain::{NormalizedSet, Password};
use crate::core::normalize;
use crate::core::store::{Filesystem, Store};
use crate::core::types::Filter;
use crate::error::{Result, StoreError};

/// The record of one directory plus the cipher that protects it.
#[derive(Debug)]
pub struct Vault<S = Filesystem, C = Age> {
    store: S,
    cipher: C,
}

impl Vault {
    /// Open the vault for the current working directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CacheDir` if no cache root can be resolved, or
    /// an error if the working directory cannot be canonicalized.
    pub fn open(config: &Config) -> Result<Self> {
        let store = Filesystem::for_current_dir(config.cache_root()?)?;
        Ok(Self::new(store, config.cipher()))
    }
}

impl<S: Store, C: Cipher> Vault<S, C> {
    pub fn new(store: S, cipher: C) -> Self {
        Self { store, cipher }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Check if this directory already has a record.
    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    // --- Operations ---

    /// Fetch, normalize, encrypt and persist a new record.
    ///
    /// The existence check runs before any backend is contacted; the store
    /// repeats it atomically on write.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if a record exists, or a
    /// `RetrievalError` if a backend fails. Nothing is written on failure.
    pub fn create(
        &self,
        backends: &[Box<dyn SecretBackend>],
        filters: &[Filter],
        password: &Password,
    ) -> Result<NormalizedSet> {
        if self.store.exists() {
            return Err(StoreError::AlreadyExists(self.store.path()).into());
        }

        let set = self.collect(backends, filters)?;
        let sealed = self.seal(&set, password)?;
        self.store.create(&sealed)?;

        info!(entries = set.len(), "record created");
        Ok(set)
    }

    /// Decrypt and return the stored set.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if there is no record and
    /// `CipherError::Authentication` if the password is wrong or the record
    /// was modified.
    pub fn retrieve(&self, password: &Password) -> Result<NormalizedSet> {
        let sealed = self.store.read()?;
        self.unseal(&sealed, password)
    }

    /// Delete the record after proving the password opens it.
    ///
    /// # Errors
    ///
    /// Same as [`Vault::retrieve`]; the record is untouched on failure.
    pub fn delete(&self, password: &Password) -> Result<()> {
        self.retrieve(password)?;
        self.store.delete()?;
        info!("record deleted");
        Ok(())
    }

    /// Re-fetch secrets and replace the existing record.
    ///
    /// The current record must open with `password` first.
    ///
    /// # Errors
    ///
    /// Same as [`Vault::retrieve`], plus any `RetrievalError`. The old
    /// record is kept if anything fails.
    pub fn refresh(
        &self,
        backends: &[Box<dyn SecretBackend>],
        filters: &[Filter],
        password: &Password,
    ) -> Result<NormalizedSet> {
        self.retrieve(password)?;

        let set = self.collect(backends, filters)?;
        let sealed = self.seal(&set, password)?;
        self.store.replace(&sealed)?;

        info!(entries = set.len(), "record refreshed");
        Ok(set)
    }

    // --- Internals ---

    fn collect(
        &self,
        backends: &[Box<dyn SecretBackend>],
        filters: &[Filter],
    ) -> Result<NormalizedSet> {
        let secrets = backend::fetch(backends, filters)?;
        Ok(normalize::normalize(&secrets))
    }

    fn seal(&self, set: &NormalizedSet, password: &Password) -> Result<Vec<u8>> {
        let plaintext = Zeroizing::new(serde_json::to_vec(set)?);
        debug!(cipher = self.cipher.name(), entries = set.len(), "sealing record");
        self.cipher.encrypt(&plaintext, password)
    }

    fn unseal(&self, sealed: &[u8], password: &Password) -> Result<NormalizedSet> {
        let plaintext = self.cipher.decrypt(sealed, password)?;
        Ok(serde_json::from_slice(&plaintext)?)
    }
}
