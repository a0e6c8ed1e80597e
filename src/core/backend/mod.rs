//! Secret retrieval.
//!
//! Each source of raw secrets implements [`SecretBackend`]. [`Sources`]
//! decides which backends take part in a retrieval, and [`fetch`] runs
//! them in order. AWS backends are never queried without a filter.
//!
//! ## Backends
//!
//! - **Secrets Manager**: Feature-gated (`aws`). `ListSecrets` + `GetSecretValue`.
//! - **Parameter Store**: Feature-gated (`aws`). `DescribeParameters` + `GetParameters`.
//! - **File**: Always available. A local JSON array of raw secrets.

use std::path::PathBuf;

use tracing::debug;

use crate::core::domain::RawSecret;
use crate::core::types::Filter;
use crate::error::{Result, RetrievalError};

#[cfg(feature = "aws")]
pub mod aws;
mod file;

pub use file::FileBackend;

/// A source of raw secrets.
pub trait SecretBackend {
    /// Backend name for display/logging.
    fn name(&self) -> &'static str;

    /// List and fetch every secret matching `filters`.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError` if the backend is unreachable or answers
    /// with something unusable.
    fn list(&self, filters: &[Filter]) -> Result<Vec<RawSecret>>;
}

/// Which backends to query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sources {
    pub secrets_manager: bool,
    pub parameter_store: bool,
    pub file: Option<PathBuf>,
    pub region: Option<String>,
}

impl Sources {
    /// Instantiate the enabled backends, in retrieval order.
    ///
    /// # Errors
    ///
    /// Returns `RetrievalError::FiltersRequired` if an AWS backend is enabled
    /// with no filters, `RetrievalError::Unsupported` if an AWS backend is
    /// requested in a build without the `aws` feature, or
    /// `RetrievalError::NoSources` if nothing is enabled.
    pub fn backends(&self, filters: &[Filter]) -> Result<Vec<Box<dyn SecretBackend>>> {
        if filters.is_empty() {
            let unfiltered = if self.secrets_manager {
                Some("secrets manager")
            } else if self.parameter_store {
                Some("parameter store")
            } else {
                None
            };
            if let Some(backend) = unfiltered {
                return Err(RetrievalError::FiltersRequired { backend }.into());
            }
        }

        let mut backends: Vec<Box<dyn SecretBackend>> = Vec::new();

        if self.secrets_manager {
            #[cfg(feature = "aws")]
            backends.push(Box::new(aws::SecretsManager::new(self.region.clone())));
            #[cfg(not(feature = "aws"))]
            return Err(RetrievalError::Unsupported {
                backend: "secrets manager",
            }
            .into());
        }

        if self.parameter_store {
            #[cfg(feature = "aws")]
            backends.push(Box::new(aws::ParameterStore::new(self.region.clone())));
            #[cfg(not(feature = "aws"))]
            return Err(RetrievalError::Unsupported {
                backend: "parameter store",
            }
            .into());
        }

        if let Some(path) = &self.file {
            backends.push(Box::new(FileBackend::new(path.clone())));
        }

        if backends.is_empty() {
            return Err(RetrievalError::NoSources.into());
        }
        Ok(backends)
    }
}

/// Fetch raw secrets from every backend, concatenated in backend order.
///
/// Any backend failure aborts the whole fetch.
pub fn fetch(backends: &[Box<dyn SecretBackend>], filters: &[Filter]) -> Result<Vec<RawSecret>> {
    let mut secrets = Vec::new();
    for backend in backends {
        let found = backend.list(filters)?;
        debug!(backend = backend.name(), count = found.len(), "fetched secrets");
        secrets.extend(found);
    }
    Ok(secrets)
}
