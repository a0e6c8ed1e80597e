//! Error types.
//!
//! A top-level [`Error`] wraps one enum per domain so callers can match on
//! the failure class (store, cipher, retrieval) without string inspection.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Local record store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("a record already exists for this directory")]
    AlreadyExists(PathBuf),

    #[error("no record found for this directory")]
    NotFound(PathBuf),

    #[error("unable to determine cache directory")]
    CacheDir,

    #[error("failed to write record: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("failed to read record: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to resolve directory {path}: {source}")]
    Canonicalize {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Encryption and decryption errors.
///
/// Every decryption failure is [`CipherError::Authentication`]; a wrong
/// password and a tampered record are indistinguishable.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("invalid password")]
    Authentication,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Errors while pulling raw secrets from a backend.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("{backend}: {message}")]
    Backend {
        backend: &'static str,
        message: String,
    },

    #[error("{backend} support not compiled. Rebuild with: cargo install secexport --features aws")]
    Unsupported { backend: &'static str },

    #[error("failed to read secrets file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed secrets file {path}: {source}")]
    FileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{backend} needs at least one filter; refusing to fetch every secret in the account")]
    FiltersRequired { backend: &'static str },

    #[error("no secret source enabled")]
    NoSources,
}

/// Per-entry flattening problems. Logged and skipped, never fatal, so
/// there is no [`Error`] variant for them.
#[derive(Error, Debug)]
pub enum NormalizeError {
    #[error("malformed payload at {key}: {source}")]
    MalformedPayload {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Password resolution errors.
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("password cannot be empty")]
    Empty,

    #[error("no password given: pass -p <password> or set SECEXPORT_PASSWORD")]
    Missing,
}

pub type Result<T> = std::result::Result<T, Error>;
