//! secexport - Cache cloud secrets per directory, encrypted at rest.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # Fetch and store a new record
//! │   ├── retrieve      # Print stored secrets as exports
//! │   ├── delete        # Remove a record after a password check
//! │   ├── refresh       # Re-fetch into an existing record
//! │   ├── status        # Where the record lives
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── backend/      # Secret sources
//!     │   ├── mod       # SecretBackend trait, fetch
//!     │   ├── aws       # Secrets Manager and Parameter Store (feature `aws`)
//!     │   └── file      # Local JSON file
//!     ├── normalize/    # Flattening and key collision handling
//!     ├── cipher/       # Encryption backends
//!     │   ├── mod       # Cipher trait
//!     │   └── age       # age passphrase (scrypt) implementation
//!     ├── store/        # Record storage
//!     │   ├── mod       # Store trait
//!     │   └── fs        # Filesystem storage implementation
//!     ├── vault         # create / retrieve / delete / refresh
//!     ├── export        # `export NAME='value'` rendering
//!     └── config        # config.toml and env overrides
//! ```
//!
//! # Features
//!
//! - Nested JSON secrets flattened to dotted keys
//! - Deterministic, collision-free key naming across sources
//! - Password-based encryption with age (scrypt)
//! - One record per directory, created atomically and never overwritten

pub mod cli;
pub mod core;
pub mod error;
