//! Delete command.

use crate::cli::password::{self, Prompt};
use crate::cli::{output, PasswordArg};
use crate::core::config::Config;
use crate::core::vault::Vault;
use crate::error::Result;

/// Delete the record for the current directory once the password checks out.
pub fn execute(password: PasswordArg) -> Result<()> {
    let config = Config::load()?;
    let vault = Vault::open(&config)?;
    let password = password::resolve(password, Prompt::Once)?;

    vault.delete(&password)?;
    output::success("record deleted");
    Ok(())
}
