//! Row normalization
//!
//! Converts one raw heterogeneous row record (as exported by any bank) into
//! a canonical [`Transaction`], or rejects it. Banks disagree on column
//! names and on whether amounts live in one signed column or two unsigned
//! ones, so the normalizer tries an ordered list of amount schemas and the
//! first schema with any relevant column present wins.
//!
//! Rejection is silent: rows with no recognizable amount, a zero amount,
//! or running-balance metadata simply produce no transaction.

use crate::models::{Money, Transaction};

/// One raw row from a bank export: ordered column name → cell text pairs,
/// preserving the original column names verbatim.
#[derive(Debug, Clone, Default)]
pub struct RawRow {
    columns: Vec<(String, String)>,
}

impl RawRow {
    /// Look up a cell by exact column name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the column exists in this row (even with an empty cell)
    pub fn has(&self, name: &str) -> bool {
        self.columns.iter().any(|(n, _)| n == name)
    }

    /// Iterate the column names in original order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(n, _)| n.as_str())
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        Self {
            columns: iter
                .into_iter()
                .map(|(n, v)| (n.into(), v.into()))
                .collect(),
        }
    }
}

/// Column name fallbacks for the description, in priority order
const DESCRIPTION_COLUMNS: &[&str] = &[
    "Description",
    "Details",
    "Transaction Description",
    "Transaction Details",
];

/// Column name fallbacks for the date, in priority order
const DATE_COLUMNS: &[&str] = &["Date", "Transaction Date", "Post Date"];

/// An amount schema: a column that adds to the amount and optionally one
/// that subtracts from it. Schemas are mutually exclusive per file and
/// tried in priority order.
struct AmountSchema {
    plus: &'static str,
    minus: Option<&'static str>,
}

/// Known amount schemas, highest priority first. A single signed `Amount`
/// column beats paired unsigned columns when a file carries both.
const AMOUNT_SCHEMAS: &[AmountSchema] = &[
    AmountSchema {
        plus: "Amount",
        minus: None,
    },
    AmountSchema {
        plus: "Credit",
        minus: Some("Debit"),
    },
    AmountSchema {
        plus: "Income",
        minus: Some("Expense"),
    },
    // Schwab-style exports
    AmountSchema {
        plus: "Deposit",
        minus: Some("Withdrawal"),
    },
];

impl AmountSchema {
    /// Whether any of this schema's columns is present in the row
    fn matches(&self, row: &RawRow) -> bool {
        row.has(self.plus) || self.minus.is_some_and(|name| row.has(name))
    }

    /// Compute the signed amount. Each side is parsed leniently; a missing
    /// or unparseable cell counts as zero.
    fn amount(&self, row: &RawRow) -> Money {
        let plus = row
            .get(self.plus)
            .map(Money::parse_lenient)
            .unwrap_or_default();
        let minus = self
            .minus
            .and_then(|name| row.get(name))
            .map(Money::parse_lenient)
            .unwrap_or_default();
        plus - minus
    }
}

/// First non-empty cell among the named columns
fn first_non_empty<'a>(row: &'a RawRow, names: &[&str]) -> Option<&'a str> {
    names
        .iter()
        .filter_map(|name| row.get(name))
        .find(|value| !value.is_empty())
}

/// Normalize one raw row into a transaction, or reject it
///
/// Rejects running-balance metadata rows and rows whose amount resolves to
/// exactly zero (header noise, unknown schemas, unparseable cells).
pub fn normalize_row(row: &RawRow) -> Option<Transaction> {
    let description = first_non_empty(row, DESCRIPTION_COLUMNS)
        .unwrap_or("")
        .to_string();

    // Running-balance rows are metadata, not transactions
    if description.to_lowercase().contains("runningbalance") {
        return None;
    }

    let amount = AMOUNT_SCHEMAS
        .iter()
        .find(|schema| schema.matches(row))
        .map(|schema| schema.amount(row))
        .unwrap_or_default();

    if amount.is_zero() {
        return None;
    }

    let date = first_non_empty(row, DATE_COLUMNS).unwrap_or("").to_string();

    Some(Transaction::new(date, description, amount))
}

/// Normalize a merchant string for memory lookups
///
/// Lowercases, strips every character that is not a letter or whitespace,
/// collapses whitespace runs, and trims. Store numbers, punctuation, and
/// card-terminal suffixes all wash out, so "AMAZON.COM*123" and "Amazon com"
/// share one key. Returns an empty string for empty or all-noise input.
pub fn normalize_merchant(description: &str) -> String {
    let kept: String = description
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_single_amount_column() {
        let tx = normalize_row(&row(&[
            ("Date", "2025-01-15"),
            ("Description", "Coffee Shop"),
            ("Amount", "-4.50"),
        ]))
        .unwrap();

        assert_eq!(tx.date, "2025-01-15");
        assert_eq!(tx.description, "Coffee Shop");
        assert_eq!(tx.amount.cents(), -450);
    }

    #[test]
    fn test_schema_priority_amount_wins() {
        // A row carrying both Amount and Credit/Debit uses Amount only
        let tx = normalize_row(&row(&[
            ("Description", "Mixed"),
            ("Amount", "10.00"),
            ("Credit", "999.00"),
            ("Debit", "1.00"),
        ]))
        .unwrap();

        assert_eq!(tx.amount.cents(), 1000);
    }

    #[test]
    fn test_credit_debit_schema() {
        let tx = normalize_row(&row(&[
            ("Description", "Deposit"),
            ("Credit", "100.00"),
            ("Debit", ""),
        ]))
        .unwrap();
        assert_eq!(tx.amount.cents(), 10000);

        let tx = normalize_row(&row(&[
            ("Description", "Purchase"),
            ("Credit", ""),
            ("Debit", "25.50"),
        ]))
        .unwrap();
        assert_eq!(tx.amount.cents(), -2550);
    }

    #[test]
    fn test_currency_formatted_cells() {
        let tx = normalize_row(&row(&[
            ("Description", "Payroll"),
            ("Credit", "$1,200.50"),
            ("Debit", "$0.00"),
        ]))
        .unwrap();
        assert_eq!(tx.amount.cents(), 120050);
    }

    #[test]
    fn test_income_expense_schema() {
        let tx = normalize_row(&row(&[
            ("Description", "Side gig"),
            ("Income", "250.00"),
            ("Expense", ""),
        ]))
        .unwrap();
        assert_eq!(tx.amount.cents(), 25000);
    }

    #[test]
    fn test_withdrawal_deposit_schema() {
        let tx = normalize_row(&row(&[
            ("Description", "ATM"),
            ("Withdrawal", "60.00"),
            ("Deposit", ""),
        ]))
        .unwrap();
        assert_eq!(tx.amount.cents(), -6000);
    }

    #[test]
    fn test_running_balance_rejected() {
        let result = normalize_row(&row(&[
            ("Description", "RunningBalance forward"),
            ("Amount", "500"),
        ]));
        assert!(result.is_none());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(normalize_row(&row(&[("Amount", "0"), ("Description", "Header noise")])).is_none());
        assert!(normalize_row(&row(&[("Amount", ""), ("Description", "Blank cell")])).is_none());
    }

    #[test]
    fn test_unknown_schema_rejected() {
        let result = normalize_row(&row(&[
            ("Description", "No amount columns here"),
            ("Balance", "1234.00"),
        ]));
        assert!(result.is_none());
    }

    #[test]
    fn test_unparseable_amount_is_zero_and_rejected() {
        let result = normalize_row(&row(&[("Description", "Bad cell"), ("Amount", "n/a")]));
        assert!(result.is_none());
    }

    #[test]
    fn test_description_fallback_order() {
        let tx = normalize_row(&row(&[
            ("Description", ""),
            ("Details", "From Details column"),
            ("Amount", "5.00"),
        ]))
        .unwrap();
        assert_eq!(tx.description, "From Details column");

        let tx = normalize_row(&row(&[
            ("Transaction Description", "Long-form header"),
            ("Amount", "5.00"),
        ]))
        .unwrap();
        assert_eq!(tx.description, "Long-form header");
    }

    #[test]
    fn test_date_fallback_order() {
        let tx = normalize_row(&row(&[
            ("Post Date", "01/20/2025"),
            ("Description", "Posted"),
            ("Amount", "5.00"),
        ]))
        .unwrap();
        assert_eq!(tx.date, "01/20/2025");

        // Missing date columns leave the date empty
        let tx = normalize_row(&row(&[("Description", "Dateless"), ("Amount", "5.00")])).unwrap();
        assert_eq!(tx.date, "");
    }

    #[test]
    fn test_normalize_merchant() {
        assert_eq!(normalize_merchant("Trader Joe's #042"), "trader joes");
        assert_eq!(normalize_merchant("AMAZON.COM*123"), "amazoncom");
        assert_eq!(normalize_merchant("  Gas   Station  "), "gas station");
        assert_eq!(normalize_merchant(""), "");
        assert_eq!(normalize_merchant("#42 *** 7"), "");
    }

    #[test]
    fn test_same_merchant_different_formatting() {
        assert_eq!(
            normalize_merchant("AMAZON MKTPL*12345"),
            normalize_merchant("amazon mktpl 998877")
        );
    }
}
