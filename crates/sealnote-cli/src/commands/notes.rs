use sealnote_core::cipher::ContentCipher;

use crate::cli::{DecryptArgs, EncryptArgs};
use crate::helpers::arg_or_stdin;
use crate::keysource::resolve_key;

pub fn handle_encrypt(args: &EncryptArgs) -> anyhow::Result<()> {
    let key = resolve_key(&args.key)?;
    let content = arg_or_stdin(args.content.as_deref())?;

    let cipher = ContentCipher::new(key);
    let envelope = cipher.encrypt(&content).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", envelope);
    Ok(())
}

pub fn handle_decrypt(args: &DecryptArgs) -> anyhow::Result<()> {
    let key = resolve_key(&args.key)?;
    let envelope = arg_or_stdin(args.envelope.as_deref())?;

    let cipher = ContentCipher::new(key);
    let content = cipher.decrypt(envelope.trim()).map_err(|e| anyhow::anyhow!(e))?;
    println!("{}", content);
    Ok(())
}
