//! Profile CLI commands
//!
//! Implements login/logout and profile deletion. Profiles are lightweight
//! name-keyed workspaces, not authenticated accounts.

use std::io::{self, Write};

use clap::Subcommand;

use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::services::SessionService;
use crate::storage::Storage;

/// Profile management subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Permanently delete the current profile and its envelopes
    Delete {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Handle the login command
pub fn handle_login(storage: &Storage, profile: &str) -> MoneyfoldResult<()> {
    let service = SessionService::new(storage);
    service.login(profile)?;

    let count = storage.envelopes.count()?;
    println!("Logged in as '{}'.", profile.trim());
    if count == 0 {
        println!("No envelopes yet. Run 'moneyfold envelope add <title>' to create one.");
    } else {
        println!("{} envelope(s) loaded.", count);
    }
    Ok(())
}

/// Handle the logout command
pub fn handle_logout(storage: &Storage) -> MoneyfoldResult<()> {
    let service = SessionService::new(storage);

    match service.current()? {
        Some(profile) => {
            service.logout()?;
            println!("Logged out of '{}'.", profile);
        }
        None => println!("No profile is logged in."),
    }
    Ok(())
}

/// Handle the whoami command
pub fn handle_whoami(storage: &Storage) -> MoneyfoldResult<()> {
    let service = SessionService::new(storage);

    match service.current()? {
        Some(profile) => println!("{}", profile),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// Handle a profile management command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> MoneyfoldResult<()> {
    let service = SessionService::new(storage);

    match cmd {
        UserCommands::Delete { yes } => {
            let profile = service.require_current()?;

            if !yes {
                let answer = prompt_string(&format!(
                    "Delete profile '{}' and all its envelopes? [y/N]: ",
                    profile
                ))?;
                if !answer.eq_ignore_ascii_case("y") {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            let deleted = service.delete_current_profile()?;
            println!("Deleted profile '{}'.", deleted);
        }
    }

    Ok(())
}

/// Prompt for a string input
pub(crate) fn prompt_string(prompt: &str) -> MoneyfoldResult<String> {
    print!("{}", prompt);
    io::stdout()
        .flush()
        .map_err(|e| MoneyfoldError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| MoneyfoldError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}
