use clap::{Args, Parser, Subcommand};

use sealnote_core::VERSION;

/// SealNote - operator tooling for the encrypted notes core
#[derive(Parser)]
#[command(name = "sealnote")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a 256-bit content encryption key
    Keygen(KeygenArgs),

    /// Password policy and credential operations
    #[command(subcommand)]
    Password(PasswordSubcommand),

    /// Simulate a login attempt against a stored credential record
    Login(LoginArgs),

    /// Encrypt note content into an envelope
    Encrypt(EncryptArgs),

    /// Decrypt an envelope back to note content
    Decrypt(DecryptArgs),
}

/// Arguments for the `keygen` command
#[derive(Args)]
pub struct KeygenArgs {
    /// Write the key to a file (0600) instead of stdout
    #[arg(long, value_name = "PATH")]
    pub out: Option<String>,
}

#[derive(Subcommand)]
pub enum PasswordSubcommand {
    /// Check a password against the strength policy
    Check(PasswordCheckArgs),

    /// Derive a storable credential from a password
    Hash(PasswordHashArgs),

    /// Verify a password against a derived credential
    Verify(PasswordVerifyArgs),
}

/// Arguments for `password check`
#[derive(Args)]
pub struct PasswordCheckArgs {
    /// Password to check (prompted interactively if omitted)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `password hash`
#[derive(Args)]
pub struct PasswordHashArgs {
    /// Password to derive from (prompted interactively if omitted)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Skip the strength policy check
    #[arg(long)]
    pub no_policy: bool,
}

/// Arguments for `password verify`
#[derive(Args)]
pub struct PasswordVerifyArgs {
    /// Stored derived credential (PHC string)
    #[arg(value_name = "CREDENTIAL")]
    pub credential: String,

    /// Password to verify (prompted interactively if omitted)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,
}

/// Arguments for the `login` command
#[derive(Args)]
pub struct LoginArgs {
    /// Path to the JSON credential record file
    #[arg(value_name = "RECORD")]
    pub record: String,

    /// Password to present (prompted interactively if omitted)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Evaluate only; do not write the updated record back
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `encrypt` command
#[derive(Args)]
pub struct EncryptArgs {
    /// Note content (reads stdin if omitted)
    #[arg(value_name = "CONTENT")]
    pub content: Option<String>,

    #[command(flatten)]
    pub key: KeyArgs,
}

/// Arguments for the `decrypt` command
#[derive(Args)]
pub struct DecryptArgs {
    /// Envelope string (reads stdin if omitted)
    #[arg(value_name = "ENVELOPE")]
    pub envelope: Option<String>,

    #[command(flatten)]
    pub key: KeyArgs,
}

/// Content key source, resolved flag -> env -> keyfile.
#[derive(Args)]
pub struct KeyArgs {
    /// Content key as 64 hex characters
    #[arg(long, value_name = "HEX", env = "SEALNOTE_KEY")]
    pub key_hex: Option<String>,

    /// Path to a keyfile holding the hex key
    #[arg(long, value_name = "PATH")]
    pub keyfile: Option<String>,
}
