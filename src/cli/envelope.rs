//! Envelope CLI commands
//!
//! Implements CLI commands for envelope management.

use clap::Subcommand;

use crate::display::envelope::format_envelope_list;
use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::models::Money;
use crate::services::{CreateEnvelopeInput, EditEnvelopeInput, EnvelopeService};
use crate::storage::Storage;

/// Envelope subcommands
#[derive(Subcommand)]
pub enum EnvelopeCommands {
    /// Create a new envelope
    Add {
        /// Envelope title
        title: String,
        /// Starting balance (e.g., "100.00" or "100")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Savings target (e.g., "500.00"); omit for no target
        #[arg(short, long)]
        target: Option<String>,
    },
    /// List all envelopes with balances and targets
    List,
    /// Edit an envelope
    Edit {
        /// Envelope title or ID
        envelope: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New balance
        #[arg(short, long)]
        balance: Option<String>,
        /// New savings target
        #[arg(short, long)]
        target: Option<String>,
    },
    /// Delete an envelope
    Delete {
        /// Envelope title or ID
        envelope: String,
    },
}

/// Handle an envelope command
pub fn handle_envelope_command(storage: &Storage, cmd: EnvelopeCommands) -> MoneyfoldResult<()> {
    let service = EnvelopeService::new(storage);

    match cmd {
        EnvelopeCommands::Add {
            title,
            balance,
            target,
        } => {
            let balance = parse_money_arg(&balance, "balance")?;
            let target = match target {
                Some(t) => parse_money_arg(&t, "target")?,
                None => Money::zero(),
            };

            let envelope = service.create(CreateEnvelopeInput {
                title,
                balance,
                target,
            })?;

            println!("Created envelope: {}", envelope.title);
            println!("  Balance: {}", envelope.balance);
            if envelope.has_target() {
                println!("  Target:  {}", envelope.target);
            }
            println!("  ID:      {}", envelope.id);
        }

        EnvelopeCommands::List => {
            let envelopes = service.list()?;
            print!("{}", format_envelope_list(&envelopes));
        }

        EnvelopeCommands::Edit {
            envelope,
            title,
            balance,
            target,
        } => {
            if title.is_none() && balance.is_none() && target.is_none() {
                println!("No changes specified. Use --title, --balance, or --target.");
                return Ok(());
            }

            let balance = balance
                .map(|b| parse_money_arg(&b, "balance"))
                .transpose()?;
            let target = target.map(|t| parse_money_arg(&t, "target")).transpose()?;

            let updated = service.edit(
                &envelope,
                EditEnvelopeInput {
                    title,
                    balance,
                    target,
                },
            )?;
            println!("Updated envelope: {}", updated.title);
        }

        EnvelopeCommands::Delete { envelope } => {
            let deleted = service.delete(&envelope)?;
            println!("Deleted envelope: {}", deleted.title);
        }
    }

    Ok(())
}

/// Parse an explicit money argument, rejecting garbage instead of zeroing it
fn parse_money_arg(value: &str, field: &str) -> MoneyfoldResult<Money> {
    Money::parse(value).map_err(|e| {
        MoneyfoldError::Validation(format!(
            "Invalid {} '{}'. Use a format like '100.00' or '100'. Error: {}",
            field, value, e
        ))
    })
}
