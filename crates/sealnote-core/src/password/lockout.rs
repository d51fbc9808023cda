//! Brute-force lockout state machine.
//!
//! Repeated failed logins against one account progressively lock it: five
//! failures engage a fixed cooldown window during which every attempt is
//! rejected outright. The machine is expressed as pure transition functions
//! over a [`CredentialRecord`] snapshot - the caller reads the record,
//! evaluates one attempt, and persists the returned record as a single
//! atomic read-modify-write. Concurrent attempts against the same account
//! must be serialized by the persistence layer.

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SealnoteError};
use crate::password::credential::verify_credential;

/// Failed attempts that trigger a lock.
pub const MAX_FAILED_ATTEMPTS: u32 = 5;

/// Cooldown window applied when a lock engages.
pub const LOCKOUT_WINDOW_MINUTES: i64 = 15;

/// The credential subset of an account record, owned by the account service
/// and handed to the core before each login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    /// One-way derived credential (PHC string); replaces the password
    pub derived_credential: String,
    /// Consecutive failed attempts since the last success or unlock
    #[serde(default)]
    pub failed_login_attempts: u32,
    /// Whether the lockout policy has engaged
    #[serde(default)]
    pub account_locked: bool,
    /// Lock expiry; meaningful only while `account_locked` is true
    #[serde(default)]
    pub lock_until: Option<DateTime<Utc>>,
}

impl CredentialRecord {
    /// Create a fresh record around a derived credential, with counters at
    /// their defaults.
    pub fn new(derived_credential: String) -> Self {
        Self {
            derived_credential,
            failed_login_attempts: 0,
            account_locked: false,
            lock_until: None,
        }
    }

    /// Replace the stored credential, resetting lockout state.
    ///
    /// Used on password change after the new password has passed strength
    /// validation and been re-derived with a fresh salt.
    pub fn with_credential(self, derived_credential: String) -> Self {
        Self::new(derived_credential)
    }

    fn state(&self, now: DateTime<Utc>) -> LockState {
        if !self.account_locked {
            return LockState::Open;
        }
        match self.lock_until {
            Some(until) if until > now => LockState::Locked { until },
            _ => LockState::ExpiredLock,
        }
    }

    fn reopened(&self) -> Self {
        Self {
            derived_credential: self.derived_credential.clone(),
            failed_login_attempts: 0,
            account_locked: false,
            lock_until: None,
        }
    }
}

/// Lock state derived from a record snapshot and an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LockState {
    Open,
    Locked { until: DateTime<Utc> },
    /// Lock flag still set but the window has passed; resolved to `Open`
    /// at the start of the next attempt.
    ExpiredLock,
}

/// Result of evaluating one login attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Password verified; counters reset
    Success,
    /// Password rejected; counter incremented
    Failure {
        /// Attempts left before the lock engages
        attempts_remaining: u32,
    },
    /// Account locked; attempt rejected without running the verifier
    Locked {
        /// Instant at which the lock expires
        until: DateTime<Utc>,
    },
}

/// Outcome of one attempt plus the record snapshot to persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    /// What the caller should tell the user
    pub outcome: LoginOutcome,
    /// Updated record; must be written back atomically per attempt
    pub record: CredentialRecord,
}

impl LoginAttempt {
    /// Convert a non-success outcome into the corresponding error, for
    /// callers that map login results onto the error taxonomy rather than
    /// matching on [`LoginOutcome`] directly.
    pub fn require_success(&self) -> Result<()> {
        match self.outcome {
            LoginOutcome::Success => Ok(()),
            LoginOutcome::Failure { attempts_remaining } => {
                Err(SealnoteError::Authentication(format!(
                    "Invalid password ({} attempts left)",
                    attempts_remaining
                )))
            }
            LoginOutcome::Locked { until } => Err(SealnoteError::Lockout { until }),
        }
    }
}

/// Evaluate one login attempt against a credential record at instant `now`.
///
/// Transitions:
///
/// - Locked and unexpired: reject immediately. The verifier never runs, so
///   the attempt consumes nothing and the counter is untouched.
/// - Locked but expired: reopen (clear flag, zero counter, null timestamp),
///   then evaluate the presented password normally in the same call.
/// - Open, password matches: reset all lockout state.
/// - Open, password rejected: increment the counter; the fifth failure sets
///   `account_locked` and stamps `lock_until = now + 15 minutes`.
///
/// # Errors
///
/// Returns `SealnoteError::Credential` if the stored credential is
/// malformed. The record is returned untouched in spirit: no counter is
/// consumed for an attempt the core could not evaluate.
pub fn evaluate_login_attempt(
    record: &CredentialRecord,
    password: &str,
    now: DateTime<Utc>,
) -> Result<LoginAttempt> {
    let record = match record.state(now) {
        LockState::Locked { until } => {
            return Ok(LoginAttempt {
                outcome: LoginOutcome::Locked { until },
                record: record.clone(),
            });
        }
        LockState::ExpiredLock => record.reopened(),
        LockState::Open => record.clone(),
    };

    if verify_credential(password, &record.derived_credential)? {
        return Ok(LoginAttempt {
            outcome: LoginOutcome::Success,
            record: record.reopened(),
        });
    }

    let attempts = record.failed_login_attempts + 1;
    let mut updated = record;
    updated.failed_login_attempts = attempts;

    if attempts >= MAX_FAILED_ATTEMPTS {
        updated.account_locked = true;
        updated.lock_until = Some(now + TimeDelta::minutes(LOCKOUT_WINDOW_MINUTES));
    }

    Ok(LoginAttempt {
        outcome: LoginOutcome::Failure {
            attempts_remaining: MAX_FAILED_ATTEMPTS.saturating_sub(attempts),
        },
        record: updated,
    })
}

/// [`evaluate_login_attempt`] with the current wall-clock time.
pub fn evaluate_login_attempt_now(record: &CredentialRecord, password: &str) -> Result<LoginAttempt> {
    evaluate_login_attempt(record, password, Utc::now())
}
