//! Envelope display formatting
//!
//! Formats envelopes for terminal output in table views, including target
//! progress indicators.

use crate::models::{Envelope, Money};

/// Format a single envelope for display (table row)
pub fn format_envelope_row(envelope: &Envelope, name_width: usize) -> String {
    let target_str = if envelope.has_target() {
        format!(
            "{:>10}  {}",
            envelope.target,
            format_progress(envelope.target_progress())
        )
    } else {
        format!("{:>10}", "-")
    };

    format!(
        "{:<width$}  {:>12}  {}",
        truncate(&envelope.title, name_width),
        envelope.balance,
        target_str,
        width = name_width
    )
}

/// Format a list of envelopes as a table with a total line
pub fn format_envelope_list(envelopes: &[Envelope]) -> String {
    if envelopes.is_empty() {
        return "No envelopes found.\n\nRun 'moneyfold envelope add <title>' to create one.\n"
            .to_string();
    }

    let name_width = envelopes
        .iter()
        .map(|e| e.title.len())
        .max()
        .unwrap_or(8)
        .clamp(8, 30);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<width$}  {:>12}  {:>10}\n",
        "Envelope",
        "Balance",
        "Target",
        width = name_width
    ));
    output.push_str(&format!(
        "{:-<width$}  {:->12}  {:->10}\n",
        "",
        "",
        "",
        width = name_width
    ));

    for envelope in envelopes {
        output.push_str(&format_envelope_row(envelope, name_width));
        output.push('\n');
    }

    let total: Money = envelopes.iter().map(|e| e.balance).sum();
    output.push_str(&format!(
        "{:-<width$}  {:->12}\n",
        "",
        "",
        width = name_width
    ));
    output.push_str(&format!(
        "{:<width$}  {:>12}\n",
        "Total",
        total,
        width = name_width
    ));

    output
}

/// Render target progress as a small bar plus percentage
fn format_progress(percent: u8) -> String {
    let filled = (usize::from(percent) * 10) / 100;
    let bar: String = "#".repeat(filled) + &".".repeat(10 - filled);
    format!("[{}] {:>3}%", bar, percent)
}

/// Truncate a string to a maximum length, cutting on a char boundary
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len - 3).collect();
        format!("{}...", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_empty_list() {
        let formatted = format_envelope_list(&[]);
        assert!(formatted.contains("No envelopes found"));
    }

    #[test]
    fn test_format_list_with_total() {
        let envelopes = vec![
            Envelope::new("Groceries", Money::from_cents(5000), Money::zero()),
            Envelope::new("Rent", Money::from_cents(120000), Money::from_cents(150000)),
        ];

        let formatted = format_envelope_list(&envelopes);
        assert!(formatted.contains("Groceries"));
        assert!(formatted.contains("$50.00"));
        assert!(formatted.contains("$1200.00"));
        assert!(formatted.contains("Total"));
        assert!(formatted.contains("$1250.00"));
    }

    #[test]
    fn test_progress_bar_for_targeted_envelope() {
        let envelope = Envelope::new(
            "Vacation",
            Money::from_cents(5000),
            Money::from_cents(10000),
        );

        let row = format_envelope_row(&envelope, 10);
        assert!(row.contains("50%"));
        assert!(row.contains("[#####.....]"));
    }

    #[test]
    fn test_long_multibyte_title_truncates_cleanly() {
        // Accented title longer than the widest column; the cut must not
        // split a multibyte character
        let envelope = Envelope::new(
            "EPARGNE VACANCES FAMILLE Née 2027 et au-delà",
            Money::from_cents(5000),
            Money::zero(),
        );

        let formatted = format_envelope_list(&[envelope]);
        assert!(formatted.contains("EPARGNE"));
        assert!(formatted.contains("..."));
    }

    #[test]
    fn test_no_target_shows_dash() {
        let envelope = Envelope::new("Misc", Money::zero(), Money::zero());
        let row = format_envelope_row(&envelope, 10);
        assert!(row.contains('-'));
        assert!(!row.contains('%'));
    }
}
