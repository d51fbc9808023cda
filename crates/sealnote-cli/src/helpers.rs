//! Shared input helpers for command handlers.

use std::io::Read;

use dialoguer::Password;
use zeroize::Zeroizing;

/// Use the provided password or prompt for it with hidden input.
pub fn password_or_prompt(password: Option<&str>, prompt: &str) -> anyhow::Result<Zeroizing<String>> {
    if let Some(password) = password {
        return Ok(Zeroizing::new(password.to_string()));
    }

    let entered = Password::new()
        .with_prompt(prompt)
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))?;
    Ok(Zeroizing::new(entered))
}

/// Use the provided value or read the whole of stdin.
pub fn arg_or_stdin(value: Option<&str>) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    // Shells append a trailing newline; strip exactly one
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}
