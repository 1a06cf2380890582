//! Mashreq credit-card statement parser (text)
//!
//! Expected extracted-text rows (transaction date, posting date, description,
//! amount, sometimes a trailing dash column):
//!   15/08 16/08 CARREFOUR MALL OF EMIRATES DUBAI 1,234.56
//!   18/08 18/08 PAYMENT RECEIVED - THANK YOU 2,000.00-

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};
use regex::Regex;

use bankstmt_core::{
    clean_amount, normalize_date_with_year, normalize_transactions, summarize, Candidate,
    CardType, LedgerResult,
};

use crate::error::StatementError;
use crate::pdf::extract_pages;

const CREDIT_KEYWORDS: &[&str] = &[
    "inward",
    "credit",
    "uaefts",
    "payment received",
    "refund",
    "reversal",
    "salary",
];

/// Split an amount into (debit, credit) from description keywords. Mashreq
/// rows carry no sign column or Cr marker at all.
fn classify(desc: &str, amount: f64) -> (f64, f64) {
    let lower = desc.to_lowercase();
    if CREDIT_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        (0.0, amount)
    } else {
        (amount, 0.0)
    }
}

/// Parse extracted Mashreq page text into a ledger.
///
/// `fill_year` completes the `dd/mm` transaction dates.
pub fn parse_mashreq_pages(pages: &[String], fill_year: i32) -> Result<LedgerResult> {
    let row_re =
        Regex::new(r"(\d{2}/\d{2})\s+(\d{2}/\d{2})\s+(.+?)\s+(\d{1,3}(?:,\d{3})*\.\d{2})(?:\s|-)")?;

    let mut candidates = Vec::new();

    for text in pages {
        if text.trim().is_empty() {
            continue;
        }

        for caps in row_re.captures_iter(text) {
            let desc = caps[3].trim().to_string();
            let value = clean_amount(&caps[4]);
            let (debit, credit) = classify(&desc, value);

            candidates.push(Candidate {
                transaction_date: normalize_date_with_year(&caps[1], Some("%d/%m"), fill_year),
                description: desc,
                debit,
                credit,
                amount: value,
                ..Default::default()
            });
        }
    }

    let transactions = normalize_transactions(candidates, "Mashreq", CardType::Credit);
    Ok(LedgerResult {
        bank: "Mashreq".to_string(),
        card_type: CardType::Credit,
        summary: summarize(&transactions),
        transactions,
        from_date: None,
        to_date: None,
    })
}

pub fn parse_mashreq(path: &Path, password: Option<&str>) -> Result<LedgerResult, StatementError> {
    let pages = extract_pages(path, password)?;
    parse_mashreq_pages(&pages, Local::now().year())
        .map_err(|e| StatementError::Internal(e.to_string()))
}
