//! Record password.

use std::fmt;

use zeroize::Zeroizing;

use crate::error::{PasswordError, Result};

/// User-supplied password for a record.
///
/// Wiped from memory on drop and redacted from `Debug`.
#[derive(Clone)]
pub struct Password(Zeroizing<String>);

impl Password {
    /// Wrap a password, rejecting empty input.
    ///
    /// # Errors
    ///
    /// Returns `PasswordError::Empty` for an empty string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(PasswordError::Empty.into());
        }
        Ok(Self(value))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}
