//! The encrypted content envelope.
//!
//! Every encrypt call produces a single opaque string combining the random
//! initialization value and the ciphertext: `<iv-hex>:<ciphertext-hex>`.
//! Callers persist it as plain text and hand it back verbatim for
//! decryption; only this module understands its structure.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, SealnoteError};

/// IV length in bytes (16 bytes = 128 bits).
pub const IV_LENGTH: usize = 16;

/// Parsed form of the two-field encrypted content envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Per-encryption random initialization value
    pub iv: [u8; IV_LENGTH],
    /// Ciphertext, including the GCM authentication tag
    pub ciphertext: Vec<u8>,
}

impl Envelope {
    /// Assemble an envelope from its parts.
    pub fn new(iv: [u8; IV_LENGTH], ciphertext: Vec<u8>) -> Self {
        Self { iv, ciphertext }
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", hex::encode(self.iv), hex::encode(&self.ciphertext))
    }
}

impl FromStr for Envelope {
    type Err = SealnoteError;

    /// Parse the textual envelope, splitting on the first colon.
    ///
    /// # Errors
    ///
    /// Returns `SealnoteError::Decryption` if the separator is missing,
    /// either field is empty or not valid hex, or the IV is not exactly
    /// 128 bits.
    fn from_str(s: &str) -> Result<Self> {
        let (iv_hex, ciphertext_hex) = s
            .split_once(':')
            .ok_or_else(|| SealnoteError::Decryption("Malformed envelope: missing separator".to_string()))?;

        if iv_hex.is_empty() || ciphertext_hex.is_empty() {
            return Err(SealnoteError::Decryption(
                "Malformed envelope: empty field".to_string(),
            ));
        }

        let iv_bytes = hex::decode(iv_hex)
            .map_err(|e| SealnoteError::Decryption(format!("Malformed envelope: bad IV hex: {}", e)))?;
        let iv: [u8; IV_LENGTH] = iv_bytes.as_slice().try_into().map_err(|_| {
            SealnoteError::Decryption(format!(
                "Malformed envelope: IV must be {} bytes (got {})",
                IV_LENGTH,
                iv_bytes.len()
            ))
        })?;

        let ciphertext = hex::decode(ciphertext_hex).map_err(|e| {
            SealnoteError::Decryption(format!("Malformed envelope: bad ciphertext hex: {}", e))
        })?;

        Ok(Self { iv, ciphertext })
    }
}
