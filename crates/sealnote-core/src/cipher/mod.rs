//! Note content encryption for SealNote.
//!
//! This module encrypts note bodies at rest using AES-256-GCM under a fixed
//! server-side key:
//! - **key**: the 256-bit [`ContentKey`], zeroized on drop
//! - **envelope**: the `<iv-hex>:<ciphertext-hex>` textual serialization
//! - **content**: the [`ContentCipher`] encrypt/decrypt operations
//!
//! ## Security Model
//!
//! - A fresh random 128-bit IV is drawn from OS entropy for every encrypt
//!   call, so identical plaintexts never share ciphertext
//! - GCM authentication rejects any tampered or truncated envelope outright;
//!   decryption never yields partial or garbled plaintext
//! - The key is injected at cipher construction and lives for the process;
//!   rotation is out of scope

pub mod content;
pub mod envelope;
pub mod key;

pub use content::ContentCipher;
pub use envelope::Envelope;
pub use key::ContentKey;
