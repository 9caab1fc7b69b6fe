use anyhow::Result;
use clap::{Parser, Subcommand};

use moneyfold::cli::{
    handle_envelope_command, handle_import_command, handle_login, handle_logout,
    handle_user_command, handle_whoami,
};
use moneyfold::config::paths::MoneyfoldPaths;
use moneyfold::storage::Storage;

#[derive(Parser)]
#[command(
    name = "moneyfold",
    author = "Kaylee Beyene",
    version,
    about = "Envelope budgeting from the command line",
    long_about = "Moneyfold is an envelope-budgeting tool for the terminal. \
                  Import your bank's CSV export, fold income into envelopes, \
                  and let merchant memory suggest where each expense goes."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in as a profile, creating it on first use
    Login {
        /// Profile name
        profile: String,
    },

    /// Log out of the current profile
    Logout,

    /// Show the current profile
    Whoami,

    /// Profile management commands
    #[command(subcommand)]
    User(moneyfold::cli::UserCommands),

    /// Envelope management commands
    #[command(subcommand, alias = "env")]
    Envelope(moneyfold::cli::EnvelopeCommands),

    /// Import a bank CSV export and walk through allocation
    Import {
        /// Path to the CSV file
        file: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = MoneyfoldPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Login { profile }) => {
            handle_login(&storage, &profile)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&storage)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&storage)?;
        }
        Some(Commands::User(cmd)) => {
            handle_user_command(&storage, cmd)?;
        }
        Some(Commands::Envelope(cmd)) => {
            handle_envelope_command(&storage, cmd)?;
        }
        Some(Commands::Import { file }) => {
            handle_import_command(&storage, &file)?;
        }
        Some(Commands::Config) => {
            println!("Moneyfold Configuration");
            println!("=======================");
            println!("Data directory:      {}", paths.data_dir().display());
            println!("Session file:        {}", paths.session_file().display());
            println!("Merchant memory:     {}", paths.merchant_memory_file().display());
            match storage.session.current_profile()? {
                Some(profile) => println!("Current profile:     {}", profile),
                None => println!("Current profile:     (not logged in)"),
            }
        }
        None => {
            println!("Moneyfold - envelope budgeting from the command line");
            println!();
            println!("Run 'moneyfold --help' for usage information.");
            println!("Run 'moneyfold login <name>' to get started.");
        }
    }

    Ok(())
}
