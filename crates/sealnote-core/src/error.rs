//! Error types for SealNote core operations.
//!
//! This module defines the error hierarchy for the credential and
//! data-protection core. Errors are descriptive at the core level; the
//! service layer maps them to HTTP statuses. Messages never contain
//! plaintext passwords, raw key bytes, or note content.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Result type alias for SealNote operations.
pub type Result<T> = std::result::Result<T, SealnoteError>;

/// Core error type for SealNote operations.
#[derive(Debug, Error)]
pub enum SealnoteError {
    /// Password strength rule failed; the message names the first unmet rule
    #[error("Validation error: {0}")]
    Validation(String),

    /// Credential mismatch during login
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Account temporarily barred by the lockout policy
    #[error("Account locked. Try again after {until}")]
    Lockout {
        /// Instant at which the lock expires
        until: DateTime<Utc>,
    },

    /// Malformed stored credential (missing salt, bad PHC string).
    /// Fatal for the account; never treated as a failed password.
    #[error("Invalid stored credential: {0}")]
    Credential(String),

    /// Encryption failure (missing or wrong-length key, primitive error)
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// Decryption failure (malformed envelope, wrong key, tampered data)
    #[error("Decryption error: {0}")]
    Decryption(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
