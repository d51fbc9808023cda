use serde_json::json;

use sealnote_core::password::{derive_credential, validate_password_strength, verify_credential};
use sealnote_core::SealnoteError;

use crate::cli::{PasswordCheckArgs, PasswordHashArgs, PasswordVerifyArgs};
use crate::helpers::password_or_prompt;

pub fn handle_check(args: &PasswordCheckArgs) -> anyhow::Result<()> {
    let password = password_or_prompt(args.password.as_deref(), "Password to check")?;

    let result = validate_password_strength(&password);
    let (valid, message) = match &result {
        Ok(()) => (true, "Password meets the strength policy".to_string()),
        Err(e) => (false, strip_kind(e)),
    };

    if args.json {
        println!("{}", json!({ "valid": valid, "message": message }));
    } else {
        println!("{}", message);
    }

    if valid {
        Ok(())
    } else {
        std::process::exit(1);
    }
}

pub fn handle_hash(args: &PasswordHashArgs) -> anyhow::Result<()> {
    let password = password_or_prompt(args.password.as_deref(), "Password to hash")?;

    if !args.no_policy {
        validate_password_strength(&password).map_err(|e| anyhow::anyhow!(e))?;
    }

    let credential = derive_credential(&password).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", credential);
    Ok(())
}

pub fn handle_verify(args: &PasswordVerifyArgs) -> anyhow::Result<()> {
    let password = password_or_prompt(args.password.as_deref(), "Password to verify")?;

    let matched =
        verify_credential(&password, &args.credential).map_err(|e| anyhow::anyhow!(e))?;

    if matched {
        println!("Password matches the stored credential");
        Ok(())
    } else {
        println!("Password does NOT match the stored credential");
        std::process::exit(1);
    }
}

/// Collaborators report the rule text without the error-kind prefix.
fn strip_kind(error: &SealnoteError) -> String {
    match error {
        SealnoteError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}
