//! Domain types.

mod directory;
mod password;
mod secret;

pub use directory::DirectoryKey;
pub use password::Password;
pub use secret::{NormalizedEntry, NormalizedSet, RawSecret};
