//! Password strength validation.
//!
//! Enforces the registration password policy. Rules are checked in a fixed
//! order and the first unmet rule determines the error message, so callers
//! (and tests) can rely on exact wording per boundary case.

use crate::error::{Result, SealnoteError};

/// Minimum password length in characters.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a candidate password against the account password policy.
///
/// # Requirements
///
/// All of the following must hold, checked in order:
///
/// - At least 8 characters long
/// - At least one uppercase letter
/// - At least one lowercase letter
/// - At least one digit
/// - At least one special (non-alphanumeric) character
///
/// # Returns
///
/// Returns `Ok(())` if valid, or `SealnoteError::Validation` naming the
/// first unmet rule.
///
/// # Examples
///
/// ```
/// use sealnote_core::password::validate_password_strength;
///
/// assert!(validate_password_strength("P@ssw0rd1").is_ok());
/// assert!(validate_password_strength("Password1").is_err()); // no symbol
/// ```
pub fn validate_password_strength(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(SealnoteError::Validation(format!(
            "Password must be at least {} characters long",
            MIN_PASSWORD_LENGTH
        )));
    }

    if !password.chars().any(|c| c.is_uppercase()) {
        return Err(SealnoteError::Validation(
            "Password must contain at least one uppercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_lowercase()) {
        return Err(SealnoteError::Validation(
            "Password must contain at least one lowercase letter".to_string(),
        ));
    }

    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(SealnoteError::Validation(
            "Password must contain at least one number".to_string(),
        ));
    }

    if !password.chars().any(|c| !c.is_alphanumeric()) {
        return Err(SealnoteError::Validation(
            "Password must contain at least one special character".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(password: &str) -> String {
        validate_password_strength(password)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_valid_passwords() {
        assert!(validate_password_strength("P@ssw0rd1").is_ok());
        assert!(validate_password_strength("Str0ng&Secret").is_ok());
        assert!(validate_password_strength("Aa1!Aa1!").is_ok());
    }

    #[test]
    fn test_too_short() {
        assert!(message("Aa1!x").contains("at least 8 characters"));
        // Length is checked first even when other rules also fail
        assert!(message("abc").contains("at least 8 characters"));
    }

    #[test]
    fn test_missing_uppercase() {
        assert!(message("p@ssw0rd1").contains("uppercase letter"));
    }

    #[test]
    fn test_missing_lowercase() {
        assert!(message("P@SSW0RD1").contains("lowercase letter"));
    }

    #[test]
    fn test_missing_digit() {
        assert!(message("P@ssword!").contains("number"));
    }

    #[test]
    fn test_missing_symbol() {
        // 9 chars, upper/lower/digit present, no symbol
        assert!(message("Password1").contains("special character"));
    }

    #[test]
    fn test_exactly_min_length() {
        let exactly_8 = "Aa1!bcde";
        assert_eq!(exactly_8.len(), 8);
        assert!(validate_password_strength(exactly_8).is_ok());
    }

    #[test]
    fn test_rule_ordering_is_deterministic() {
        // All rules unmet after length: uppercase is reported first
        assert!(message("        ").contains("uppercase letter"));
    }
}
