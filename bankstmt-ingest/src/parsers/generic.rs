//! Generic fallback parser for statements from unrecognized issuers.
//!
//! No grammar: every line containing a digit becomes an unclassified record
//! (debit = credit = amount = 0), with the first whitespace token offered to
//! the date normalizer. Crude, but unknown issuers still yield structured
//! output instead of an error.

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};

use bankstmt_core::{
    normalize_date_with_year, normalize_transactions, summarize, Candidate, CardType,
    LedgerResult,
};

use crate::error::StatementError;
use crate::pdf::extract_pages;

const BANK_NAME: &str = "unknown";

/// Parse any extracted page text into an unclassified ledger.
pub fn parse_generic_pages(pages: &[String], fill_year: i32) -> Result<LedgerResult> {
    let mut candidates = Vec::new();

    for text in pages {
        for line in text.lines() {
            let raw = line.trim();
            if raw.is_empty() || !raw.chars().any(|c| c.is_ascii_digit()) {
                continue;
            }

            let token = raw.split_whitespace().next().unwrap_or("");

            candidates.push(Candidate {
                transaction_date: normalize_date_with_year(token, None, fill_year),
                description: raw.to_string(),
                ..Default::default()
            });
        }
    }

    let transactions = normalize_transactions(candidates, BANK_NAME, CardType::Debit);
    Ok(LedgerResult {
        bank: BANK_NAME.to_string(),
        card_type: CardType::Debit,
        summary: summarize(&transactions),
        transactions,
        from_date: None,
        to_date: None,
    })
}

pub fn parse_generic(path: &Path, password: Option<&str>) -> Result<LedgerResult, StatementError> {
    let pages = extract_pages(path, password)?;
    parse_generic_pages(&pages, Local::now().year())
        .map_err(|e| StatementError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_pages_yield_zero_records() {
        let result = parse_generic_pages(&[], 2025).unwrap();
        assert_eq!(result.summary.record_count, 0);

        let result = parse_generic_pages(&[String::new()], 2025).unwrap();
        assert_eq!(result.summary.record_count, 0);
    }

    #[test]
    fn test_digit_lines_become_unclassified_records() {
        let pages = vec![
            "SOME BANK PLC\n15/08/2025 COFFEE SHOP 12.50\nno digits here\n".to_string(),
        ];
        let result = parse_generic_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 1);

        let t = &result.transactions[0];
        assert_eq!(t.transaction_date, "2025-08-15");
        assert_eq!(t.description, "15/08/2025 COFFEE SHOP 12.50");
        assert_eq!(t.debit, 0.0);
        assert_eq!(t.credit, 0.0);
        assert_eq!(t.amount, 0.0);
        assert_eq!(t.bank, "unknown");
    }

    #[test]
    fn test_non_date_leading_token_leaves_date_empty() {
        let pages = vec!["REF 123456 SOMETHING\n".to_string()];
        let result = parse_generic_pages(&pages, 2025).unwrap();
        assert_eq!(result.transactions[0].transaction_date, "");
    }
}
