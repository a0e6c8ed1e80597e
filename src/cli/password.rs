//! Password resolution for commands that open or seal a record.

use std::io::IsTerminal;

use tracing::debug;

use crate::cli::PasswordArg;
use crate::core::domain::Password;
use crate::error::{PasswordError, Result};

/// Whether a freshly typed password should be asked for twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Once,
    Confirm,
}

/// Resolve the password from the flag or environment, falling back to a
/// hidden prompt when stdin is a terminal.
///
/// # Errors
///
/// Returns `PasswordError::Missing` when no source is available and
/// `PasswordError::Empty` for an empty password.
pub fn resolve(arg: PasswordArg, prompt: Prompt) -> Result<Password> {
    if let Some(password) = arg.password {
        return Password::new(password);
    }

    if !std::io::stdin().is_terminal() {
        return Err(PasswordError::Missing.into());
    }

    debug!("prompting for password");
    let mut input = dialoguer::Password::new().with_prompt("Password");
    if prompt == Prompt::Confirm {
        input = input.with_confirmation("Confirm password", "passwords do not match");
    }
    Password::new(input.interact()?)
}
