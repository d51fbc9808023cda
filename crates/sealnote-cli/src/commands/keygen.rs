use std::path::Path;

use sealnote_core::cipher::ContentKey;

use crate::cli::KeygenArgs;
use crate::keysource::write_keyfile;

pub fn handle_keygen(args: &KeygenArgs, quiet: bool) -> anyhow::Result<()> {
    let key = ContentKey::generate().map_err(|e| anyhow::anyhow!(e))?;

    match &args.out {
        Some(path) => {
            let path = Path::new(path);
            write_keyfile(path, &key)?;
            if !quiet {
                println!("Wrote 256-bit content key to {}", path.display());
            }
        }
        None => {
            // Hex on stdout so it can be piped straight into SEALNOTE_KEY
            println!("{}", key.to_hex());
        }
    }

    Ok(())
}
