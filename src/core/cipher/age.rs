//! Age passphrase backend.
//!
//! Wraps a random file key with an scrypt-derived key (fresh salt per
//! record), then encrypts the payload with age's ChaCha20-Poly1305 STREAM.
//! The header carries its own MAC, so any modification of salt, work
//! factor, nonce or payload fails authentication.

use std::io::{Read, Write};
use std::iter;

use ::age::secrecy::SecretString;
use ::age::{scrypt, Decryptor, Encryptor};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::domain::Password;
use crate::error::{CipherError, Result};

/// Age-based passphrase cipher.
///
/// `work_factor` is log2 of the scrypt N parameter used when encrypting;
/// `None` lets age calibrate it to roughly one second on this machine.
/// `max_work_factor` caps what a record header may demand on decrypt.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age {
    work_factor: Option<u8>,
    max_work_factor: Option<u8>,
}

impl Age {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the scrypt work factor for encryption. Must be in `1..64`.
    pub fn with_work_factor(mut self, log_n: u8) -> Self {
        self.work_factor = Some(log_n);
        self
    }

    /// Reject records whose header asks for more than `log_n`. Must be in `1..64`.
    pub fn with_max_work_factor(mut self, log_n: u8) -> Self {
        self.max_work_factor = Some(log_n);
        self
    }
}

fn secret(password: &Password) -> SecretString {
    SecretString::from(password.expose().to_owned())
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], password: &Password) -> Result<Vec<u8>> {
        trace!(
            plaintext_len = plaintext.len(),
            work_factor = ?self.work_factor,
            "encrypting"
        );

        let mut recipient = scrypt::Recipient::new(secret(password));
        if let Some(log_n) = self.work_factor {
            recipient.set_work_factor(log_n);
        }

        let encryptor = Encryptor::with_recipients(iter::once(&recipient as &dyn ::age::Recipient))
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::with_capacity(plaintext.len() + 256);
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer
            .write_all(plaintext)
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");
        Ok(encrypted)
    }

    fn decrypt(&self, ciphertext: &[u8], password: &Password) -> Result<Zeroizing<Vec<u8>>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let decryptor = Decryptor::new(ciphertext).map_err(|e| {
            debug!(error = %e, "unreadable ciphertext header");
            CipherError::Authentication
        })?;

        let mut identity = scrypt::Identity::new(secret(password));
        if let Some(log_n) = self.max_work_factor {
            identity.set_max_work_factor(log_n);
        }

        let mut reader = decryptor
            .decrypt(iter::once(&identity as &dyn ::age::Identity))
            .map_err(|e| {
                debug!(error = %e, "header authentication failed");
                CipherError::Authentication
            })?;

        let mut decrypted = Zeroizing::new(Vec::new());
        reader.read_to_end(&mut decrypted).map_err(|e| {
            debug!(error = %e, "payload authentication failed");
            CipherError::Authentication
        })?;

        trace!(plaintext_len = decrypted.len(), "decrypted");
        Ok(decrypted)
    }
}
