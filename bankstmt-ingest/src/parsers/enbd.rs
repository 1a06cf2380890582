//! ENBD account statement parser (text)
//!
//! ENBD statements are fully free-form: a line holding only a compact date
//! (`03AUG25`, optionally followed by the start of the narrative) opens a
//! transaction block, continuation lines extend the narrative, and the block
//! closes on an `amount balance Cr` tail or a bare `balance Cr` line.
//!
//! There is no sign column. Polarity comes from comparing each closing
//! balance to the last known one (seeded by the "brought forward" row);
//! only when the balance does not move does a keyword hint decide.

use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};
use regex::Regex;

use bankstmt_core::{
    clean_amount, normalize_date_with_year, normalize_transactions, summarize, Candidate,
    CardType, LedgerResult, StatementPeriod,
};

use crate::error::StatementError;
use crate::pdf::extract_pages;

const CREDIT_HINTS: &[&str] = &[
    "salary",
    "credit",
    "inward",
    "uaefts",
    "refund",
    "reversal",
    "ipp customer credit",
    "sdm deposit",
    "deposit",
    "tt ref",
    "customer credit",
];

/// Lines announcing the statement coverage range, in the issuer's wording.
const PERIOD_ALIASES: &[&str] = &["statement period", "statement from", "for the period"];

fn looks_credit(desc: &str) -> bool {
    let d = desc.to_lowercase();
    // "credit card payment" is a debit; the bare "credit" hint must not win
    if d.contains("credit card payment") {
        return false;
    }
    CREDIT_HINTS.iter().any(|k| d.contains(k))
}

struct EnbdGrammar {
    date: Regex,
    amount_tail: Regex,
    balance_only: Regex,
    period_token: Regex,
    period_labeled: Regex,
}

impl EnbdGrammar {
    fn new() -> Result<Self> {
        Ok(Self {
            // e.g. "03AUG25" or "03AUG25 POS-PURCHASE"
            date: Regex::new(r"^(\d{2}[A-Z]{3}\d{2})(?:\s+(.*))?$")?,
            amount_tail: Regex::new(r"(?i)(?:^|\s)([\d,]+\.\d{2})\s+([\d,]+\.\d{2})\s*Cr\b")?,
            balance_only: Regex::new(r"(?i)(?:^|\s)([\d,]+\.\d{2})\s*Cr\b")?,
            period_token: Regex::new(r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b")?,
            period_labeled: Regex::new(r"(?i)from\s+(\d{2}/\d{2}/\d{4})\s+to\s+(\d{2}/\d{2}/\d{4})")?,
        })
    }
}

/// Scan the current line plus up to two following lines for the two period
/// bounds: first a permissive dd/mm/yyyy-family token finder, then the
/// stricter labeled "from ... to ..." shape.
fn find_period(grammar: &EnbdGrammar, window: &str, fill_year: i32) -> Option<(String, String)> {
    let tokens: Vec<String> = grammar
        .period_token
        .find_iter(window)
        // the token finder accepts dashes but the normalizer only knows
        // slash forms
        .map(|m| normalize_date_with_year(&m.as_str().replace('-', "/"), None, fill_year))
        .filter(|d| !d.is_empty())
        .collect();
    if tokens.len() >= 2 {
        return Some((tokens[0].clone(), tokens[1].clone()));
    }

    let caps = grammar.period_labeled.captures(window)?;
    let from = normalize_date_with_year(&caps[1], Some("%d/%m/%Y"), fill_year);
    let to = normalize_date_with_year(&caps[2], Some("%d/%m/%Y"), fill_year);
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from, to))
}

/// Parse extracted ENBD page text into a ledger.
///
/// The accumulator, running balance, and statement period all survive page
/// boundaries, so pages collapse into one linear line stream up front.
pub fn parse_enbd_pages(pages: &[String], fill_year: i32) -> Result<LedgerResult> {
    let grammar = EnbdGrammar::new()?;

    let lines: Vec<&str> = pages
        .iter()
        .flat_map(|text| text.lines())
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut transactions: Vec<Candidate> = Vec::new();
    let mut current: Option<Candidate> = None;
    let mut last_balance: Option<f64> = None;
    let mut period = StatementPeriod::default();

    for (i, &line) in lines.iter().enumerate() {
        let low = line.to_lowercase();

        if period.from_date.is_none() && PERIOD_ALIASES.iter().any(|a| low.contains(a)) {
            let end = lines.len().min(i + 3);
            let window = lines[i..end].join(" ");
            if let Some((from, to)) = find_period(&grammar, &window, fill_year) {
                period.from_date = Some(from);
                period.to_date = Some(to);
            }
            continue;
        }

        // starting balance seed
        if low.contains("brought forward") {
            if let Some(caps) = grammar.balance_only.captures(line) {
                last_balance = Some(clean_amount(&caps[1]));
            }
            continue;
        }

        // new transaction block
        if let Some(caps) = grammar.date.captures(line) {
            if let Some(pending) = current.take() {
                // a block that never resolved a balance is incomplete
                if pending.balance.is_some() {
                    transactions.push(pending);
                } else {
                    tracing::debug!(date = %pending.transaction_date, "dropping block with no balance");
                }
            }

            current = Some(Candidate {
                transaction_date: normalize_date_with_year(&caps[1], Some("%d%b%y"), fill_year),
                description: caps
                    .get(2)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
                ..Default::default()
            });
            continue;
        }

        let Some(mut block) = current.take() else {
            continue;
        };

        if let Some(caps) = grammar.amount_tail.captures(line) {
            let amount = clean_amount(&caps[1]);
            let balance = clean_amount(&caps[2]);
            block.amount = amount;
            block.balance = Some(balance);

            match last_balance {
                Some(prev) if balance > prev => block.credit = amount,
                Some(prev) if balance < prev => block.debit = amount,
                _ => {
                    // balance unchanged or unseeded: keyword hint decides
                    if looks_credit(&block.description) {
                        block.credit = amount;
                    } else {
                        block.debit = amount;
                    }
                }
            }

            last_balance = Some(balance);
            transactions.push(block);
            continue;
        }

        if let Some(caps) = grammar.balance_only.captures(line) {
            let balance = clean_amount(&caps[1]);
            block.balance = Some(balance);
            last_balance = Some(balance);
            transactions.push(block);
            continue;
        }

        // carry rows must not leak into narratives
        if !low.contains("brought forward") && !low.contains("carried forward") {
            if block.description.is_empty() {
                block.description = line.to_string();
            } else {
                block.description.push(' ');
                block.description.push_str(line);
            }
        }
        current = Some(block);
    }

    if let Some(pending) = current.take() {
        if pending.balance.is_some() {
            transactions.push(pending);
        }
    }

    let clean: Vec<Candidate> = transactions
        .into_iter()
        .filter(|t| {
            let d = t.description.to_lowercase();
            !t.transaction_date.is_empty()
                && !t.description.is_empty()
                && !d.contains("brought forward")
                && !d.contains("carried forward")
        })
        .collect();

    let transactions = normalize_transactions(clean, "ENBD", CardType::Debit);
    Ok(LedgerResult {
        bank: "ENBD".to_string(),
        card_type: CardType::Debit,
        summary: summarize(&transactions),
        transactions,
        from_date: period.from_date,
        to_date: period.to_date,
    })
}

pub fn parse_enbd(path: &Path, password: Option<&str>) -> Result<LedgerResult, StatementError> {
    let pages = extract_pages(path, password)?;
    parse_enbd_pages(&pages, Local::now().year()).map_err(|e| StatementError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_from_balance_movement() {
        // 100.00 -> 150.00 (credit 50) -> 120.00 (debit 30), keywords irrelevant
        let pages = vec![
            "BALANCE BROUGHT FORWARD 100.00 Cr\n\
             02AUG25\n\
             SOME OPAQUE NARRATIVE\n\
             50.00 150.00 Cr\n\
             03AUG25\n\
             SALARY-LOOKING WORDS GO HERE\n\
             30.00 120.00 Cr\n"
                .to_string(),
        ];

        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 2);

        assert_eq!(result.transactions[0].credit, 50.00);
        assert_eq!(result.transactions[0].debit, 0.0);

        // description contains "salary" but the balance fell, so debit wins
        assert_eq!(result.transactions[1].debit, 30.00);
        assert_eq!(result.transactions[1].credit, 0.0);
    }

    #[test]
    fn test_keyword_hint_when_unseeded() {
        let pages = vec![
            "01AUG25 SALARY TRANSFER ACME LLC\n9,500.00 9,500.00 Cr\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.transactions[0].credit, 9500.00);
    }

    #[test]
    fn test_credit_card_payment_carve_out() {
        let pages = vec![
            "01AUG25 CREDIT CARD PAYMENT 4521XXXX\n1,000.00 1,000.00 Cr\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        // "credit" substring must not classify this as a credit
        assert_eq!(result.transactions[0].debit, 1000.00);
        assert_eq!(result.transactions[0].credit, 0.0);
    }

    #[test]
    fn test_multi_line_description_accumulates() {
        let pages = vec![
            "03AUG25 POS-PURCHASE\n\
             CARREFOUR MALL OF THE EMIRATES\n\
             DUBAI ARE\n\
             250.00 750.00 Cr\n"
                .to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(
            result.transactions[0].description,
            "POS-PURCHASE CARREFOUR MALL OF THE EMIRATES DUBAI ARE"
        );
        assert_eq!(result.transactions[0].transaction_date, "2025-08-03");
    }

    #[test]
    fn test_block_without_balance_is_dropped() {
        let pages = vec![
            "03AUG25 DANGLING NARRATIVE WITH NO AMOUNT LINE\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 0);
    }

    #[test]
    fn test_balance_only_line_closes_block() {
        let pages = vec![
            "03AUG25 INTEREST ADJUSTMENT\n1,234.00 Cr\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 1);
        assert_eq!(result.transactions[0].amount, 0.0);
    }

    #[test]
    fn test_statement_period_lookahead() {
        let pages = vec![
            "Account Statement\nStatement Period\n01/08/2025 to\n31/08/2025\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.from_date.as_deref(), Some("2025-08-01"));
        assert_eq!(result.to_date.as_deref(), Some("2025-08-31"));
    }

    #[test]
    fn test_statement_period_on_single_line() {
        let pages = vec![
            "Statement Period from 01/08/2025 to 31/08/2025\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.from_date.as_deref(), Some("2025-08-01"));
        assert_eq!(result.to_date.as_deref(), Some("2025-08-31"));
    }

    #[test]
    fn test_statement_period_with_dash_separators() {
        let pages = vec![
            "Statement Period 01-08-2025 to 31-08-2025\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.from_date.as_deref(), Some("2025-08-01"));
        assert_eq!(result.to_date.as_deref(), Some("2025-08-31"));
    }

    #[test]
    fn test_state_survives_page_boundary() {
        let pages = vec![
            "BALANCE BROUGHT FORWARD 500.00 Cr\n03AUG25 POS-PURCHASE\n".to_string(),
            "CARREFOUR DUBAI\n100.00 400.00 Cr\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 1);
        assert_eq!(result.transactions[0].debit, 100.00);
    }

    #[test]
    fn test_carry_forward_rows_excluded() {
        let pages = vec![
            "03AUG25\nBALANCE CARRIED FORWARD\n100.00 400.00 Cr\n".to_string(),
        ];
        let result = parse_enbd_pages(&pages, 2025).unwrap();
        assert_eq!(result.summary.record_count, 0);
    }
}
