//! Credential derivation and verification using Argon2id.
//!
//! Passwords are never stored. Registration derives a one-way credential
//! string in PHC format (algorithm, parameters, and a fresh random salt all
//! embedded), and login verifies a presented password against it. The
//! derivation is deliberately expensive to resist offline guessing.

use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;

use crate::error::{Result, SealnoteError};

/// Argon2id parameters.
///
/// These values balance security and interactive login latency:
/// - Memory: 64 MB (64 * 1024 KB)
/// - Iterations: 3
/// - Parallelism: 1 (single-threaded for simplicity)
const ARGON2_MEMORY_KB: u32 = 64 * 1024;
const ARGON2_ITERATIONS: u32 = 3;
const ARGON2_PARALLELISM: u32 = 1;

fn hasher() -> Result<Argon2<'static>> {
    let params = argon2::Params::new(ARGON2_MEMORY_KB, ARGON2_ITERATIONS, ARGON2_PARALLELISM, None)
        .map_err(|e| SealnoteError::Credential(format!("Failed to create Argon2 params: {}", e)))?;

    Ok(Argon2::new(
        argon2::Algorithm::Argon2id,
        argon2::Version::V0x13,
        params,
    ))
}

/// Derive a storable credential from a plaintext password.
///
/// A fresh random salt is generated on every call, so re-deriving after a
/// password change never reuses a salt - even for the same password.
///
/// # Returns
///
/// Returns the credential as a PHC string
/// (`$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`), suitable for storage
/// in place of the password.
///
/// # Examples
///
/// ```
/// use sealnote_core::password::{derive_credential, verify_credential};
///
/// let credential = derive_credential("P@ssw0rd1").unwrap();
/// assert!(verify_credential("P@ssw0rd1", &credential).unwrap());
/// ```
pub fn derive_credential(password: &str) -> Result<String> {
    if password.is_empty() {
        return Err(SealnoteError::InvalidInput(
            "Password cannot be empty".to_string(),
        ));
    }

    let salt = SaltString::generate(&mut OsRng);
    let hash = hasher()?
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| SealnoteError::Credential(format!("Credential derivation failed: {}", e)))?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored derived credential.
///
/// The final hash comparison runs in constant time, so a mismatch leaks no
/// information about how close the guess was.
///
/// # Errors
///
/// Returns `SealnoteError::Credential` if the stored credential is not a
/// well-formed PHC string (missing salt, unknown algorithm, truncated data).
/// A malformed record is a fatal per-account condition and is never reported
/// as a failed password.
pub fn verify_credential(password: &str, derived_credential: &str) -> Result<bool> {
    let parsed = PasswordHash::new(derived_credential)
        .map_err(|e| SealnoteError::Credential(format!("Malformed credential: {}", e)))?;

    match hasher()?.verify_password(password.as_bytes(), &parsed) {
        Ok(()) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(SealnoteError::Credential(format!(
            "Credential verification failed: {}",
            e
        ))),
    }
}
