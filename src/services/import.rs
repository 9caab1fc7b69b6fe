//! Batch import service
//!
//! Reads a bank CSV export into raw rows, normalizes every row, and
//! partitions the survivors into income and expense sets for the
//! allocation and categorization workflows. Order is preserved relative
//! to the source file throughout.

use std::path::Path;

use crate::error::{MoneyfoldError, MoneyfoldResult};
use crate::models::Transaction;

use super::normalize::{normalize_row, RawRow};

/// Read a CSV export into raw rows, preserving original column names
///
/// Only `.csv` files are accepted; anything else is rejected up front with
/// no partial processing. Spreadsheet formats like `.xlsx` are not decoded.
pub fn read_rows(path: &Path) -> MoneyfoldResult<Vec<RawRow>> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension != "csv" {
        return Err(MoneyfoldError::Import(format!(
            "Unsupported file type '{}': please upload a .csv export",
            if extension.is_empty() {
                "(none)".to_string()
            } else {
                extension
            }
        )));
    }

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(|e| MoneyfoldError::Import(format!("Failed to open {}: {}", path.display(), e)))?;

    let headers = reader
        .headers()
        .map_err(|e| MoneyfoldError::Import(format!("Failed to read CSV headers: {}", e)))?
        .clone();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result
            .map_err(|e| MoneyfoldError::Import(format!("Failed to read CSV record: {}", e)))?;

        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name, value))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// One upload's worth of normalized transactions, split by sign
///
/// Income is every transaction with a strictly positive amount; everything
/// else is an expense. Both sets keep source order.
#[derive(Debug, Clone)]
pub struct ImportBatch {
    transactions: Vec<Transaction>,
    income: Vec<Transaction>,
    expenses: Vec<Transaction>,
}

impl ImportBatch {
    /// Normalize raw rows into a batch
    ///
    /// Rejected rows are dropped silently. Transactions whose every field
    /// is empty are also dropped; that is defensive, since the zero-amount
    /// rejection normally catches them first.
    pub fn from_rows(rows: &[RawRow]) -> Self {
        let transactions: Vec<Transaction> = rows
            .iter()
            .filter_map(normalize_row)
            .filter(|tx| !tx.is_empty())
            .collect();

        let income = transactions
            .iter()
            .filter(|tx| tx.is_income())
            .cloned()
            .collect();
        let expenses = transactions
            .iter()
            .filter(|tx| tx.is_expense())
            .cloned()
            .collect();

        Self {
            transactions,
            income,
            expenses,
        }
    }

    /// All normalized transactions, for the reference table
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Whether any income transactions were found
    pub fn has_income(&self) -> bool {
        !self.income.is_empty()
    }

    /// Whether the batch produced no transactions at all
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Split the batch into its (income, expense) sets
    pub fn into_sets(self) -> (Vec<Transaction>, Vec<Transaction>) {
        (self.income, self.expenses)
    }
}
