//! CLI command handler for CSV import
//!
//! Drives the full import workflow: read and normalize the file, review
//! the income set, allocate income across envelopes, then walk the
//! expense set one transaction at a time.

use std::path::Path;

use crate::display::envelope::format_envelope_list;
use crate::display::transaction::{format_transaction_register, format_transaction_row};
use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::models::{Envelope, Money};
use crate::services::{
    read_rows, AllocationSession, CategorizationPrompt, CategorizationSession,
    CategorizationState, ImportBatch, SessionService,
};
use crate::storage::Storage;

use super::user::prompt_string;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &str) -> MoneyfoldResult<()> {
    SessionService::new(storage).require_current()?;

    let path = Path::new(file);
    if !path.exists() {
        return Err(MoneyfoldError::Import(format!("File not found: {}", file)));
    }

    let rows = read_rows(path)?;
    let batch = ImportBatch::from_rows(&rows);

    if batch.is_empty() {
        println!("No transactions found in {}.", file);
        return Ok(());
    }

    println!("Imported {} transaction(s):", batch.transactions().len());
    println!();
    print!("{}", format_transaction_register(batch.transactions()));
    println!();

    let has_income = batch.has_income();
    let (income, expenses) = batch.into_sets();

    let categorization = if has_income {
        run_allocation(storage, AllocationSession::new(income, expenses))?
    } else {
        println!("No income found in this file.");
        CategorizationSession::new(expenses)
    };

    run_categorization(storage, categorization)?;

    println!();
    print!("{}", format_envelope_list(&storage.envelopes.get_all()?));
    Ok(())
}

/// Review the income set, collect per-envelope allocations, and commit
fn run_allocation(
    storage: &Storage,
    mut session: AllocationSession,
) -> MoneyfoldResult<CategorizationSession> {
    loop {
        println!("Income to allocate (total {}):", session.income_total());
        for (i, transaction) in session.income().iter().enumerate() {
            println!("  {}. {}", i + 1, format_transaction_row(transaction));
        }

        let answer =
            prompt_string("Move an item to expenses? Enter its number, or press Enter to continue: ")?;
        if answer.is_empty() {
            break;
        }

        match answer.parse::<usize>() {
            Ok(n) if n >= 1 => match session.remove_income_item(n - 1) {
                Some(moved) => {
                    println!("Moved '{}' to the expense set.", moved.description);
                    if session.income().is_empty() {
                        println!("No income left to allocate.");
                        break;
                    }
                }
                None => println!("No item numbered {}.", n),
            },
            _ => println!("Enter a number from the list, or press Enter to continue."),
        }
        println!();
    }

    if !session.income().is_empty() {
        let envelopes = storage.envelopes.get_all()?;
        if envelopes.is_empty() {
            println!("No envelopes to allocate to; income is left unallocated.");
        } else {
            println!();
            println!("Enter an amount per envelope; press Enter to leave one at zero.");
            for envelope in &envelopes {
                let answer = prompt_string(&format!("  Allocate to '{}': ", envelope.title))?;
                if answer.is_empty() {
                    continue;
                }
                session.set_allocation(envelope.id, Money::parse_lenient(&answer));
            }

            println!();
            println!(
                "Allocated {} of {}; remaining {}.",
                session.allocated_total(),
                session.income_total(),
                session.remaining()
            );
            if session.is_over_allocated() {
                println!("Warning: allocations exceed income. Committing anyway.");
            }
        }
    }

    session.commit(storage)
}

/// Walk the expense set, prompting for an envelope choice per transaction
fn run_categorization(
    storage: &Storage,
    mut session: CategorizationSession,
) -> MoneyfoldResult<()> {
    if session.is_empty() {
        println!("No expenses to categorize.");
        return Ok(());
    }

    println!();
    println!("Categorizing {} expense(s).", session.len());

    loop {
        match session.state(storage)? {
            CategorizationState::Done => break,
            CategorizationState::AwaitingChoice {
                index,
                transaction,
                prompt,
                ..
            } => {
                println!();
                println!(
                    "Expense {}/{}: {}",
                    index + 1,
                    session.len(),
                    format_transaction_row(&transaction)
                );

                match prompt {
                    CategorizationPrompt::Suggestion { envelope } => {
                        let answer = prompt_string(&format!(
                            "Assign to '{}' like last time? [Y/n/s]: ",
                            envelope.title
                        ))?;
                        match answer.to_lowercase().as_str() {
                            "s" | "skip" => session.skip(),
                            "n" | "no" => {
                                let envelopes = storage.envelopes.get_all()?;
                                choose_from_list(storage, &mut session, &envelopes)?;
                            }
                            _ => session.apply(storage, envelope.id)?,
                        }
                    }
                    CategorizationPrompt::ChooseFrom { envelopes } => {
                        choose_from_list(storage, &mut session, &envelopes)?;
                    }
                }
            }
        }
    }

    println!();
    println!("Categorization complete.");
    Ok(())
}

/// Present the full envelope list and apply or skip based on the answer
///
/// An unparseable answer leaves the cursor in place, so the same
/// transaction is presented again.
fn choose_from_list(
    storage: &Storage,
    session: &mut CategorizationSession,
    envelopes: &[Envelope],
) -> MoneyfoldResult<()> {
    if envelopes.is_empty() {
        println!("No envelopes to assign; skipping.");
        session.skip();
        return Ok(());
    }

    for (i, envelope) in envelopes.iter().enumerate() {
        println!("  {}. {} ({})", i + 1, envelope.title, envelope.balance);
    }

    let answer = prompt_string(&format!(
        "Choose an envelope [1-{}], or s to skip: ",
        envelopes.len()
    ))?;

    if answer.eq_ignore_ascii_case("s") {
        session.skip();
        return Ok(());
    }

    match answer.parse::<usize>() {
        Ok(n) if n >= 1 && n <= envelopes.len() => {
            let envelope = &envelopes[n - 1];
            session.apply(storage, envelope.id)?;
            println!("Assigned to '{}'.", envelope.title);
        }
        _ => println!("Enter a number from the list, or s to skip."),
    }

    Ok(())
}
