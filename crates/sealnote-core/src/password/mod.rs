//! Password handling for SealNote accounts.
//!
//! This module provides the three credential-side services of the core:
//! - **strength**: registration-time password policy checks
//! - **credential**: Argon2id derivation and constant-time verification
//! - **lockout**: the progressive brute-force lockout state machine
//!
//! ## Security Model
//!
//! - Plaintext passwords exist only as transient function arguments and are
//!   never stored or logged
//! - Argon2id with a fresh random salt per derivation (memory-hard,
//!   resistant to GPU attacks); the salt travels inside the PHC string
//! - Five failed attempts lock the account for a fixed cooldown window;
//!   attempts against a locked account are rejected without running the
//!   verifier, so they consume no attempt and leak no timing signal

pub mod credential;
pub mod lockout;
pub mod strength;

pub use credential::{derive_credential, verify_credential};
pub use lockout::{
    evaluate_login_attempt, evaluate_login_attempt_now, CredentialRecord, LoginAttempt,
    LoginOutcome, LOCKOUT_WINDOW_MINUTES, MAX_FAILED_ATTEMPTS,
};
pub use strength::validate_password_strength;
