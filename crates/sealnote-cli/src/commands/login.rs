use std::path::Path;

use sealnote_core::password::{evaluate_login_attempt_now, CredentialRecord, LoginOutcome};

use crate::cli::LoginArgs;
use crate::helpers::password_or_prompt;

/// Simulate one login attempt: read the record, evaluate, write the updated
/// record back. The read-modify-write per attempt mirrors what the account
/// service does in production.
pub fn handle_login(args: &LoginArgs, quiet: bool) -> anyhow::Result<()> {
    let path = Path::new(&args.record);
    let record = read_record(path)?;
    let password = password_or_prompt(args.password.as_deref(), "Password")?;

    let attempt = evaluate_login_attempt_now(&record, &password).map_err(|e| anyhow::anyhow!(e))?;

    if !args.dry_run {
        write_record(path, &attempt.record)?;
    }

    match attempt.outcome {
        LoginOutcome::Success => {
            if !quiet {
                println!("Login OK");
            }
            Ok(())
        }
        LoginOutcome::Failure { attempts_remaining } => {
            println!("Invalid password ({} attempts left)", attempts_remaining);
            std::process::exit(1);
        }
        LoginOutcome::Locked { until } => {
            println!("Account locked. Try again after {}", until);
            std::process::exit(1);
        }
    }
}

fn read_record(path: &Path) -> anyhow::Result<CredentialRecord> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read record {}: {}", path.display(), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse record {}: {}", path.display(), e))
}

fn write_record(path: &Path, record: &CredentialRecord) -> anyhow::Result<()> {
    let contents = serde_json::to_string_pretty(record)
        .map_err(|e| anyhow::anyhow!("Failed to serialize record: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write record {}: {}", path.display(), e))
}
