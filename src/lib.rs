//! Core library entry for the `hopshare` CLI.

pub mod adapters;
pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod format;
pub mod identity;
pub mod model;
pub mod ports;
pub mod validate;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// Loads `.env` (if present) before reading configuration.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let _ = dotenvy::dotenv();
    let cli = match cli::Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) if err.kind() == clap::error::ErrorKind::DisplayHelp
            || err.kind() == clap::error::ErrorKind::DisplayVersion =>
        {
            print!("{err}");
            return Ok(());
        }
        Err(err) => return Err(err.to_string()),
    };
    commands::dispatch(&cli.command)
}
