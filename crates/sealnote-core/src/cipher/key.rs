//! The fixed server-side content encryption key.
//!
//! Loaded once from process configuration at startup and injected into the
//! cipher; never read ad hoc from global state, so the cipher stays testable
//! with arbitrary keys.

use zeroize::ZeroizeOnDrop;

use crate::error::{Result, SealnoteError};

/// Key length in bytes (32 bytes = 256 bits for AES-256).
pub const KEY_LENGTH: usize = 32;

/// A 256-bit symmetric key for note content encryption.
///
/// Key material is securely zeroized from memory when dropped, reducing the
/// window of exposure.
#[derive(Clone, ZeroizeOnDrop)]
pub struct ContentKey {
    /// The raw key bytes (zeroized on drop)
    key: [u8; KEY_LENGTH],
}

impl ContentKey {
    /// Create a `ContentKey` from raw bytes.
    ///
    /// # Security
    ///
    /// The caller is responsible for ensuring the bytes come from a secure
    /// source.
    pub fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Create a `ContentKey` from a byte slice, rejecting wrong lengths.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key: [u8; KEY_LENGTH] = bytes.try_into().map_err(|_| {
            SealnoteError::Encryption(format!(
                "Key must be exactly {} bytes (got {})",
                KEY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self::from_bytes(key))
    }

    /// Parse a `ContentKey` from a hex string (64 hex characters).
    pub fn from_hex(hex_key: &str) -> Result<Self> {
        let bytes = hex::decode(hex_key)
            .map_err(|e| SealnoteError::Encryption(format!("Key is not valid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Generate a fresh random key from OS entropy.
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LENGTH];
        getrandom::getrandom(&mut bytes)
            .map_err(|e| SealnoteError::Encryption(format!("Failed to generate key: {}", e)))?;
        Ok(Self::from_bytes(bytes))
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate
    /// encryption operations.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }

    /// Hex-encode the key for operator display (keygen output).
    pub fn to_hex(&self) -> String {
        hex::encode(self.key)
    }
}

impl std::fmt::Debug for ContentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}
