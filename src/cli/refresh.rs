//! Refresh command - re-fetch secrets into an existing record.

use crate::cli::password::{self, Prompt};
use crate::cli::{output, PasswordArg, SourceArgs};
use crate::core::config::Config;
use crate::core::export;
use crate::core::types::Filter;
use crate::core::vault::Vault;
use crate::error::Result;

/// Replace the record for the current directory and print the new exports.
pub fn execute(filters: &[Filter], sources: &SourceArgs, password: PasswordArg) -> Result<()> {
    let config = Config::load()?;
    let vault = Vault::open(&config)?;
    let backends = sources.resolve(&config).backends(filters)?;
    let password = password::resolve(password, Prompt::Once)?;

    let set = vault.refresh(&backends, filters, &password)?;
    output::exports(&export::render(&set));
    Ok(())
}
