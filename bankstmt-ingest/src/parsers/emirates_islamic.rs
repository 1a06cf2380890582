//! Emirates Islamic credit-card statement parser (text)
//!
//! Expected extracted-text rows (posting date, transaction date, description,
//! amount, optional CR suffix):
//!   14 AUG 12 AUG RTA-ETISALAT DUBAI ARE 100.00
//!   20 AUG 20 AUG PAYMENT RECEIVED 2,500.00CR
//!
//! The statement period is not printed as a range; it is derived backwards
//! from the "Statement Date" line (one calendar month, day-clamped).

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local, Months, NaiveDate};
use regex::Regex;

use bankstmt_core::{
    clean_amount, normalize_date_with_year, normalize_transactions, summarize, Candidate,
    CardType, LedgerResult, StatementPeriod,
};

use crate::error::StatementError;
use crate::pdf::extract_pages;

/// Boilerplate rows that would otherwise satisfy the transaction grammar.
const SKIP_KEYWORDS: &[&str] = &[
    "opening balance",
    "primary card no",
    "rewards summary",
    "cashback",
    "card limit",
    "minimum payment due",
    "payment due date",
    "profit/other charges",
    "current balance",
    "profit reversal",
    "finance charges",
];

/// Parse extracted Emirates Islamic page text into a ledger.
pub fn parse_emirates_islamic_pages(pages: &[String], fill_year: i32) -> Result<LedgerResult> {
    let line_re = Regex::new(
        r"(?i)^(\d{2}\s+[A-Z]{3})\s+(\d{2}\s+[A-Z]{3})\s+(.+?)\s+([\d,]+\.\d{2})(CR)?$",
    )?;
    let stmt_date_re = Regex::new(r"(?i)statement\s+date\s*:?\s*(\d{2}/\d{2}/\d{4})")?;

    let mut candidates = Vec::new();
    let mut period = StatementPeriod::default();

    for text in pages {
        for line in text.lines() {
            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }

            if period.to_date.is_none() {
                if let Some(caps) = stmt_date_re.captures(raw) {
                    if let Ok(stmt_date) = NaiveDate::parse_from_str(&caps[1], "%d/%m/%Y") {
                        period.from_date = stmt_date
                            .checked_sub_months(Months::new(1))
                            .map(|d| d.format("%Y-%m-%d").to_string());
                        period.to_date = Some(stmt_date.format("%Y-%m-%d").to_string());
                    }
                    continue;
                }
            }

            let low = raw.to_lowercase();
            if SKIP_KEYWORDS.iter().any(|k| low.contains(k)) {
                continue;
            }

            let Some(caps) = line_re.captures(raw) else {
                continue;
            };

            // group 1 is the posting date; the transaction date is group 2
            let txn_date = caps[2].trim().to_string();
            let desc = caps[3].trim().to_string();
            let amount = clean_amount(&caps[4]);

            let (debit, credit) =
                if caps.get(5).is_some() || desc.to_lowercase().contains("payment received") {
                    (0.0, amount)
                } else {
                    (amount, 0.0)
                };

            candidates.push(Candidate {
                transaction_date: normalize_date_with_year(&txn_date, Some("%d %b"), fill_year),
                description: desc,
                debit,
                credit,
                amount,
                ..Default::default()
            });
        }
    }

    let transactions = normalize_transactions(candidates, "Emirates Islamic", CardType::Credit);
    Ok(LedgerResult {
        bank: "Emirates Islamic".to_string(),
        card_type: CardType::Credit,
        summary: summarize(&transactions),
        transactions,
        from_date: period.from_date,
        to_date: period.to_date,
    })
}

pub fn parse_emirates_islamic(
    path: &Path,
    password: Option<&str>,
) -> Result<LedgerResult, StatementError> {
    let pages = extract_pages(path, password)?;
    parse_emirates_islamic_pages(&pages, Local::now().year())
        .map_err(|e| StatementError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_rows_with_and_without_cr() {
        let pages = vec![
            "Emirates Islamic Card Statement\n\
             14 AUG 12 AUG RTA-ETISALAT DUBAI ARE 100.00\n\
             20 AUG 20 AUG PAYMENT RECEIVED 2,500.00CR\n"
                .to_string(),
        ];

        let result = parse_emirates_islamic_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 2);

        let rta = &result.transactions[0];
        assert_eq!(rta.transaction_date, "2025-08-12");
        assert_eq!(rta.debit, 100.00);
        assert_eq!(rta.credit, 0.0);

        let payment = &result.transactions[1];
        assert_eq!(payment.credit, 2500.00);
        assert_eq!(payment.debit, 0.0);
        assert_eq!(payment.amount, 2500.00);
    }

    #[test]
    fn test_skip_keywords_filter_boilerplate() {
        let pages = vec![
            "01 AUG 01 AUG OPENING BALANCE 5,000.00\n\
             14 AUG 12 AUG NOON.COM DUBAI 75.50\n\
             31 AUG 31 AUG MINIMUM PAYMENT DUE 250.00\n"
                .to_string(),
        ];

        let result = parse_emirates_islamic_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 1);
        assert!(result.transactions[0].description.contains("NOON.COM"));
    }

    #[test]
    fn test_statement_period_derived_from_statement_date() {
        let pages = vec![
            "Statement Date: 14/08/2025\n14 AUG 12 AUG NOON.COM DUBAI 75.50\n".to_string(),
        ];

        let result = parse_emirates_islamic_pages(&pages, 2025).unwrap();
        assert_eq!(result.from_date.as_deref(), Some("2025-07-14"));
        assert_eq!(result.to_date.as_deref(), Some("2025-08-14"));
    }

    #[test]
    fn test_statement_period_day_clamped() {
        let pages = vec!["Statement Date: 31/07/2025\n".to_string()];
        let result = parse_emirates_islamic_pages(&pages, 2025).unwrap();
        // June has 30 days
        assert_eq!(result.from_date.as_deref(), Some("2025-06-30"));
        assert_eq!(result.to_date.as_deref(), Some("2025-07-31"));
    }

    #[test]
    fn test_summary_totals() {
        let pages = vec![
            "14 AUG 12 AUG RTA-ETISALAT DUBAI ARE 100.00\n\
             20 AUG 20 AUG PAYMENT RECEIVED 2,500.00CR\n"
                .to_string(),
        ];
        let result = parse_emirates_islamic_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.total_debit, 100.00);
        assert_eq!(result.summary.total_credit, 2500.00);
        assert_eq!(result.summary.net_change, 2400.00);
    }
}
