//! secexport - Cache cloud secrets per directory, encrypted at rest.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secexport::cli::output;
use secexport::cli::{execute, Cli};
use secexport::core::constants;
use secexport::error::{Error, StoreError};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only export statements.
    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("secexport=debug")
        } else {
            EnvFilter::new("secexport=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Store(StoreError::NotFound(_)) => Some("run: secexport create <filters>"),
            Error::Store(StoreError::AlreadyExists(_)) => {
                Some("run: secexport delete, or secexport refresh")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
