//! AES-256-GCM encryption of note content.

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};

use crate::cipher::envelope::{Envelope, IV_LENGTH};
use crate::cipher::key::ContentKey;
use crate::error::{Result, SealnoteError};

/// AES-256-GCM with a 128-bit nonce, matching the envelope's 16-byte IV.
type ContentAead = AesGcm<Aes256, U16>;

/// Encrypts and decrypts note bodies under the fixed server-side key.
///
/// Stateless apart from the injected key; one instance is safe to share
/// across arbitrarily many concurrent requests.
///
/// # Examples
///
/// ```
/// use sealnote_core::cipher::{ContentCipher, ContentKey};
///
/// let cipher = ContentCipher::new(ContentKey::generate().unwrap());
/// let envelope = cipher.encrypt("grocery list: eggs, oat milk").unwrap();
/// let plaintext = cipher.decrypt(&envelope).unwrap();
/// assert_eq!(plaintext, "grocery list: eggs, oat milk");
/// ```
pub struct ContentCipher {
    key: ContentKey,
}

impl ContentCipher {
    /// Build a cipher around an injected key.
    pub fn new(key: ContentKey) -> Self {
        Self { key }
    }

    fn aead(&self) -> Result<ContentAead> {
        ContentAead::new_from_slice(self.key.as_bytes())
            .map_err(|e| SealnoteError::Encryption(format!("Invalid key: {}", e)))
    }

    /// Encrypt a note body, returning the textual envelope.
    ///
    /// A fresh random 128-bit IV is drawn from OS entropy on every call, so
    /// repeated encryptions of the same plaintext never produce the same
    /// envelope.
    pub fn encrypt(&self, plaintext: &str) -> Result<String> {
        let mut iv = [0u8; IV_LENGTH];
        getrandom::getrandom(&mut iv)
            .map_err(|e| SealnoteError::Encryption(format!("Failed to generate IV: {}", e)))?;

        let ciphertext = self
            .aead()?
            .encrypt(Nonce::from_slice(&iv), plaintext.as_bytes())
            .map_err(|_| SealnoteError::Encryption("Cipher operation failed".to_string()))?;

        Ok(Envelope::new(iv, ciphertext).to_string())
    }

    /// Decrypt a stored envelope back to the note body.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::Decryption` if the envelope is malformed, the
    /// key is wrong, or the ciphertext has been tampered with or truncated.
    /// GCM authentication guarantees this never yields partial or garbled
    /// plaintext.
    pub fn decrypt(&self, envelope: &str) -> Result<String> {
        let envelope: Envelope = envelope.parse()?;

        let plaintext = self
            .aead()?
            .decrypt(Nonce::from_slice(&envelope.iv), envelope.ciphertext.as_ref())
            .map_err(|_| {
                SealnoteError::Decryption("Authentication failed: wrong key or tampered data".to_string())
            })?;

        String::from_utf8(plaintext)
            .map_err(|_| SealnoteError::Decryption("Decrypted content is not valid UTF-8".to_string()))
    }
}
