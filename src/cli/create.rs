//! Create command - fetch secrets and store a new record.

use tracing::info;

use crate::cli::password::{self, Prompt};
use crate::cli::{output, PasswordArg, SourceArgs};
use crate::core::config::Config;
use crate::core::export;
use crate::core::store::Store;
use crate::core::types::Filter;
use crate::core::vault::Vault;
use crate::error::{Result, StoreError};

/// Create the record for the current directory and print its exports.
pub fn execute(filters: &[Filter], sources: &SourceArgs, password: PasswordArg) -> Result<()> {
    let config = Config::load()?;
    let vault = Vault::open(&config)?;

    // Fail before prompting or touching the network.
    if vault.exists() {
        return Err(StoreError::AlreadyExists(vault.store().path()).into());
    }

    let backends = sources.resolve(&config).backends(filters)?;
    let password = password::resolve(password, Prompt::Confirm)?;

    info!(filters = filters.len(), backends = backends.len(), "creating record");
    let set = vault.create(&backends, filters, &password)?;

    output::exports(&export::render(&set));
    Ok(())
}
