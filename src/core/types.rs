//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A flattened secret key path (e.g., `db.user`, `/app/prod/PORT`).
pub type SecretKey = String;

/// Globally unique identifier of a secret in its source store.
///
/// For AWS backends this is the ARN.
pub type OriginId = String;

/// A filter value passed to secret backends when listing.
pub type Filter = String;
