//! Content key resolution and keyfile handling.
//!
//! The server key is configured once per process; the CLI mirrors that by
//! resolving it in a fixed order (flag/env, then keyfile) and injecting the
//! result into the cipher. Keyfiles hold the hex key and are written with
//! owner-only permissions.

use std::path::Path;

use zeroize::Zeroizing;

use sealnote_core::cipher::ContentKey;

use crate::cli::KeyArgs;

/// Resolve the content key from the CLI arguments.
///
/// Order: `--key-hex` / `SEALNOTE_KEY` env, then `--keyfile`.
pub fn resolve_key(args: &KeyArgs) -> anyhow::Result<ContentKey> {
    if let Some(hex_key) = &args.key_hex {
        return ContentKey::from_hex(hex_key).map_err(|e| anyhow::anyhow!(e));
    }

    if let Some(path) = &args.keyfile {
        return read_keyfile(Path::new(path));
    }

    Err(anyhow::anyhow!(
        "No content key configured. Pass --key-hex, set SEALNOTE_KEY, or point --keyfile at a key file."
    ))
}

/// Read a hex-encoded key from a keyfile.
pub fn read_keyfile(path: &Path) -> anyhow::Result<ContentKey> {
    let contents = Zeroizing::new(
        std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read keyfile {}: {}", path.display(), e))?,
    );
    ContentKey::from_hex(contents.trim()).map_err(|e| anyhow::anyhow!(e))
}

/// Write a hex-encoded key to a new keyfile with owner-only permissions.
pub fn write_keyfile(path: &Path, key: &ContentKey) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                anyhow::anyhow!(
                    "Failed to create keyfile directory {}: {}",
                    parent.display(),
                    e
                )
            })?;
        }
    }
    if path.exists() {
        return Err(anyhow::anyhow!(
            "Keyfile already exists: {}",
            path.display()
        ));
    }

    std::fs::write(path, key.to_hex())
        .map_err(|e| anyhow::anyhow!("Failed to write keyfile {}: {}", path.display(), e))?;
    set_file_permissions(path)?;
    Ok(())
}

#[cfg(unix)]
fn set_file_permissions(path: &Path) -> anyhow::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let permissions = std::fs::Permissions::from_mode(0o600);
    std::fs::set_permissions(path, permissions)
        .map_err(|e| anyhow::anyhow!("Failed to set keyfile permissions: {}", e))
}

#[cfg(not(unix))]
fn set_file_permissions(_path: &Path) -> anyhow::Result<()> {
    Ok(())
}
