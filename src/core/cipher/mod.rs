//! Password-based encryption of record payloads.
//!
//! Provides the encryption/decryption abstraction and the default
//! implementation.
//!
//! ## Backends
//!
//! - **age**: Default, always available. scrypt passphrase recipient with
//!   ChaCha20-Poly1305 payload encryption. The salt and work factor live in
//!   the ciphertext header, so only the password is needed to decrypt.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! Whatever the backend, `decrypt` must authenticate before returning and
//! must report every failure as `CipherError::Authentication`.

use zeroize::Zeroizing;

use crate::core::domain::Password;
use crate::error::Result;

mod age;

pub use self::age::Age;

/// Password-based authenticated encryption.
pub trait Cipher {
    /// Encrypt `plaintext` under `password`.
    ///
    /// The output is self-describing: salt, nonce and authenticated
    /// ciphertext are all included.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if encryption fails.
    fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>>;

    /// Decrypt and authenticate `ciphertext` with `password`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` for a wrong password, a
    /// tampered or truncated ciphertext, or an unparseable header.
    fn decrypt(&self, ciphertext: &[u8], password: &Password) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}
