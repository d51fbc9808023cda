//! # SealNote Core
//!
//! Credential and data-protection core for SealNote - an encrypted personal
//! notes service.
//!
//! This crate provides the security-sensitive primitives consumed by the
//! account and note services, independent of any transport or storage layer:
//!
//! - **password**: strength validation, Argon2id credential derivation and
//!   verification, and the brute-force lockout state machine
//! - **cipher**: AES-256-GCM note encryption with a per-write random IV,
//!   serialized as a portable `<iv-hex>:<ciphertext-hex>` envelope
//!
//! ## Security Model
//!
//! - Only salted, one-way derived credentials are ever stored; the salt is
//!   embedded in the PHC output string and regenerated on every derivation
//! - Credential verification compares in constant time
//! - Note content is encrypted at rest under a fixed 256-bit server key,
//!   injected at cipher construction (never read from global state)
//! - Key material is zeroized from memory on drop
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the stored credential and note databases
//! - Offline brute-force attacks on passwords
//! - Online password guessing (progressive account lockout)
//!
//! We do NOT defend against:
//! - Compromised server process / memory access
//! - Network-level attacks (transport security belongs to the HTTP layer)

pub mod cipher;
pub mod error;
pub mod password;

pub use cipher::{ContentCipher, ContentKey, Envelope};
pub use error::{Result, SealnoteError};
pub use password::{
    derive_credential, evaluate_login_attempt, validate_password_strength, verify_credential,
    CredentialRecord, LoginAttempt, LoginOutcome,
};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
