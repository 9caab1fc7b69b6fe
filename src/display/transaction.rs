//! Transaction display formatting
//!
//! Formats imported transactions for terminal display as a register view.

use crate::models::Transaction;

/// Format a single transaction for display (register row)
pub fn format_transaction_row(transaction: &Transaction) -> String {
    format!(
        "{:10} {:30} {:>12}",
        truncate(&transaction.date, 10),
        truncate(&transaction.description, 30),
        transaction.amount
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:30} {:>12}\n",
        "Date", "Description", "Amount"
    ));
    output.push_str(&"-".repeat(54));
    output.push('\n');

    for transaction in transactions {
        output.push_str(&format_transaction_row(transaction));
        output.push('\n');
    }

    output
}

/// Truncate a string to a maximum length, cutting on a char boundary
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}
