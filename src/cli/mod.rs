//! Command-line interface.

pub mod completions;
pub mod create;
pub mod delete;
pub mod output;
pub mod password;
pub mod refresh;
pub mod retrieve;
pub mod status;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::backend::Sources;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::types::Filter;

/// secexport - Cache cloud secrets per directory, encrypted at rest.
#[derive(Parser)]
#[command(
    name = "secexport",
    about = "Cache cloud secrets per directory and print them as shell exports",
    version,
    after_help = "Load into the current shell with: eval \"$(secexport retrieve)\""
)]
pub struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Fetch secrets and store them for the current directory
    Create {
        /// Name filters passed to the backends (optional with --from)
        #[arg(required_unless_present = "file")]
        filters: Vec<Filter>,
        #[command(flatten)]
        sources: SourceArgs,
        #[command(flatten)]
        password: PasswordArg,
    },

    /// Print the stored secrets as export statements
    Retrieve {
        #[command(flatten)]
        password: PasswordArg,
    },

    /// Delete the record for the current directory
    Delete {
        #[command(flatten)]
        password: PasswordArg,
    },

    /// Re-fetch secrets and replace the stored record
    Refresh {
        /// Name filters passed to the backends (optional with --from)
        #[arg(required_unless_present = "file")]
        filters: Vec<Filter>,
        #[command(flatten)]
        sources: SourceArgs,
        #[command(flatten)]
        password: PasswordArg,
    },

    /// Show where the record for the current directory lives
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Which backends to query.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Query AWS Secrets Manager
    #[arg(short = 's', long, value_name = "BOOL")]
    pub secrets_manager: Option<bool>,

    /// Query AWS SSM Parameter Store
    #[arg(
        short = 'm',
        long = "parameter-store",
        visible_alias = "pm",
        value_name = "BOOL"
    )]
    pub parameter_store: Option<bool>,

    /// Read raw secrets from a JSON file
    #[arg(short = 'f', long = "from", value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl SourceArgs {
    /// Merge flags over config defaults.
    ///
    /// With `--from`, AWS backends are only queried when asked for
    /// explicitly.
    pub fn resolve(&self, config: &Config) -> Sources {
        let (sm_default, pm_default) = if self.file.is_some() {
            (false, false)
        } else {
            (config.secrets_manager, config.parameter_store)
        };

        Sources {
            secrets_manager: self.secrets_manager.unwrap_or(sm_default),
            parameter_store: self.parameter_store.unwrap_or(pm_default),
            file: self.file.clone(),
            region: config.region.clone(),
        }
    }
}

/// Password flag shared by every command that opens a record.
#[derive(Args, Debug, Clone, Default)]
pub struct PasswordArg {
    /// Record password (prompted for when omitted on a terminal)
    #[arg(
        short = 'p',
        long = "password",
        env = constants::ENV_PASSWORD,
        hide_env_values = true
    )]
    pub password: Option<String>,
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Create {
            filters,
            sources,
            password,
        } => create::execute(&filters, &sources, password),
        Retrieve { password } => retrieve::execute(password),
        Delete { password } => delete::execute(password),
        Refresh {
            filters,
            sources,
            password,
        } => refresh::execute(&filters, &sources, password),
        Status => status::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
