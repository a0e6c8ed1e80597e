//! Status command.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::Store;
use crate::core::vault::Vault;
use crate::error::Result;

/// Show the current directory, its key, and whether a record exists.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let vault = Vault::open(&config)?;
    let store = vault.store();

    let cwd = std::env::current_dir()?;
    output::kv("directory", output::path(&cwd.display().to_string()));
    output::kv("key", store.key());
    output::kv("path", output::path(&store.path().display().to_string()));
    output::kv("record", if vault.exists() { "present" } else { "none" });
    Ok(())
}
