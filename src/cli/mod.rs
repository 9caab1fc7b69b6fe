//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod envelope;
pub mod import;
pub mod user;

pub use envelope::{handle_envelope_command, EnvelopeCommands};
pub use import::handle_import_command;
pub use user::{handle_login, handle_logout, handle_user_command, handle_whoami, UserCommands};
