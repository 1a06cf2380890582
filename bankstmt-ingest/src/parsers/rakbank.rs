//! RAKBANK credit-card statement parser (text)
//!
//! Two line grammars per transaction:
//!   AED leg:  02/08/2025 NOON.COM DUBAI AED 372.05 - 4,821.55
//!   FX leg:   05/08/2025 GBP 75.00 4.9600 372.05
//!
//! The merchant narrative for an FX row (and sometimes an AED row) arrives
//! on the lines before the match, so non-matching lines buffer as a pending
//! description until a grammar consumes or a page ends. Statement headers,
//! card-number lines, and page markers in that buffer are junk and are
//! dropped before the flush.

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

/// Summary rows that would otherwise satisfy a transaction grammar.
const SKIP_KEYWORDS: &[&str] = &[
    "opening balance",
    "closing balance",
    "available credit",
    "minimum payment due",
    "payment due date",
    "credit limit",
];

/// Document boilerplate that poisons a buffered description.
const DROP_HINTS: &[&str] = &[
    "your credit card statement",
    "statement period",
    "product name",
    "card number",
    "page[",
];

fn is_credit(cr_flag: bool, desc: &str) -> bool {
    let d = desc.to_lowercase();
    cr_flag || d.contains("payment") || d.contains("refund")
}

fn flush_buffer(buffer: &mut Vec<String>) -> String {
    let joined = buffer.join(" ");
    buffer.clear();

    let low = joined.to_lowercase();
    if DROP_HINTS.iter().any(|h| low.contains(h)) {
        return String::new();
    }
    joined
}

/// Parse extracted RAKBANK page text into a ledger.
pub fn parse_rakbank_pages(pages: &[String], fill_year: i32) -> Result<LedgerResult> {
    let aed_re = Regex::new(
        r"(?i)^(\d{2}/\d{2}/\d{4})\s+(.+?)\s+AED\s+([\d,]+\.\d{2})(\s*CR)?\s+-\s+([\d,]+\.\d{2})(?:\s*CR)?$",
    )?;
    let fx_re = Regex::new(
        r"(?i)^(\d{2}/\d{2}/\d{4})\s+([A-Z]{3})\s+([\d,]+\.\d{2})\s+([\d,]+\.\d+)\s+([\d,]+\.\d{2})(\s*CR)?$",
    )?;

    let mut candidates = Vec::new();

    for text in pages {
        let mut buffer: Vec<String> = Vec::new();

        for line in text.lines() {
            let raw = line.trim();
            if raw.is_empty() {
                continue;
            }

            let low = raw.to_lowercase();
            if SKIP_KEYWORDS.iter().any(|k| low.contains(k)) {
                continue;
            }

            if let Some(caps) = aed_re.captures(raw) {
                let pending = flush_buffer(&mut buffer);
                let desc = format!("{} {}", pending, caps[2].trim()).trim().to_string();
                let amount = clean_amount(&caps[3]);
                let balance = clean_amount(&caps[5]);

                let (debit, credit) = if is_credit(caps.get(4).is_some(), &desc) {
                    (0.0, amount)
                } else {
                    (amount, 0.0)
                };

                candidates.push(Candidate {
                    transaction_date: normalize_date_with_year(&caps[1], Some("%d/%m/%Y"), fill_year),
                    description: desc,
                    debit,
                    credit,
                    amount,
                    balance: Some(balance),
                    ..Default::default()
                });
                continue;
            }

            if let Some(caps) = fx_re.captures(raw) {
                let desc = flush_buffer(&mut buffer);
                let aed_amount = clean_amount(&caps[5]);

                // polarity uses the converted local amount, never the FX leg
                let (debit, credit) = if is_credit(caps.get(6).is_some(), &desc) {
                    (0.0, aed_amount)
                } else {
                    (aed_amount, 0.0)
                };

                candidates.push(Candidate {
                    transaction_date: normalize_date_with_year(&caps[1], Some("%d/%m/%Y"), fill_year),
                    description: desc,
                    debit,
                    credit,
                    amount: aed_amount,
                    fx_currency: Some(caps[2].to_uppercase()),
                    fx_amount: clean_amount(&caps[3]),
                    fx_rate: clean_amount(&caps[4]),
                    ..Default::default()
                });
                continue;
            }

            buffer.push(raw.to_string());
        }
    }

    let transactions = normalize_transactions(candidates, "RAKBANK", CardType::Credit);
    Ok(LedgerResult {
        bank: "RAKBANK".to_string(),
        card_type: CardType::Credit,
        summary: summarize(&transactions),
        transactions,
        from_date: None,
        to_date: None,
    })
}

pub fn parse_rakbank(path: &Path, password: Option<&str>) -> Result<LedgerResult, StatementError> {
    let pages = extract_pages(path, password)?;
    parse_rakbank_pages(&pages, Local::now().year())
        .map_err(|e| StatementError::Internal(e.to_string()))
}
