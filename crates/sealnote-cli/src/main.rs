//! SealNote CLI - operator tooling for the encrypted notes core
//!
//! This binary exposes the credential and content-encryption core for
//! operators and for local testing: key generation, password policy checks,
//! credential derivation/verification, login simulation against a stored
//! record, and note encryption/decryption.

mod cli;
mod commands;
mod helpers;
mod keysource;

use clap::Parser;
use owo_colors::OwoColorize;

use crate::cli::{Cli, Commands, PasswordSubcommand};
use crate::commands::{keygen, login, notes, password};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(2);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Keygen(args) => keygen::handle_keygen(args, cli.quiet),
        Commands::Password(sub) => match sub {
            PasswordSubcommand::Check(args) => password::handle_check(args),
            PasswordSubcommand::Hash(args) => password::handle_hash(args),
            PasswordSubcommand::Verify(args) => password::handle_verify(args),
        },
        Commands::Login(args) => login::handle_login(args, cli.quiet),
        Commands::Encrypt(args) => notes::handle_encrypt(args),
        Commands::Decrypt(args) => notes::handle_decrypt(args),
    }
}
