//! Retrieve command.

use crate::cli::password::{self, Prompt};
use crate::cli::{output, PasswordArg};
use crate::core::config::Config;
use crate::core::export;
use crate::core::vault::Vault;
use crate::error::Result;

/// Decrypt the record for the current directory and print its exports.
pub fn execute(password: PasswordArg) -> Result<()> {
    let config = Config::load()?;
    let vault = Vault::open(&config)?;
    let password = password::resolve(password, Prompt::Once)?;

    let set = vault.retrieve(&password)?;
    output::exports(&export::render(&set));
    Ok(())
}
