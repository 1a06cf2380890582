//! Per-issuer statement parsers and the flat dispatch table.

pub mod emirates_islamic;
pub mod enbd;
pub mod generic;
pub mod mashreq;
pub mod rakbank;

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::Path;

use bankstmt_core::LedgerResult;

use crate::bank::{detect_bank, Bank};
use crate::error::StatementError;

pub use emirates_islamic::{parse_emirates_islamic, parse_emirates_islamic_pages};
pub use enbd::{parse_enbd, parse_enbd_pages};
pub use generic::{parse_generic, parse_generic_pages};
pub use mashreq::{parse_mashreq, parse_mashreq_pages};
pub use rakbank::{parse_rakbank, parse_rakbank_pages};

/// One full-pipeline parser: PDF path + optional password in, ledger or
/// tagged error out.
pub type ParseFn = fn(&Path, Option<&str>) -> Result<LedgerResult, StatementError>;

/// Route an issuer id to its parser. Case-insensitive, synonym-aware; any
/// unrecognized id (including ADCB, which has no dedicated grammar) gets the
/// generic fallback.
pub fn get_parser(bank_id: &str) -> ParseFn {
    match Bank::from_id(bank_id) {
        Bank::Mashreq => parse_mashreq,
        Bank::Enbd => parse_enbd,
        Bank::EmiratesIslamic => parse_emirates_islamic,
        Bank::Rakbank => parse_rakbank,
        Bank::Adcb | Bank::Unknown => parse_generic,
    }
}

/// Full pipeline: detect the issuer when none is supplied, dispatch, and
/// keep any internal parser fault inside the tagged-error contract. The
/// request layer must always see a well-formed value.
pub fn parse_statement(
    path: &Path,
    password: Option<&str>,
    bank: Option<&str>,
) -> Result<LedgerResult, StatementError> {
    let id = match bank {
        Some(b) if !b.trim().is_empty() => b.trim().to_string(),
        _ => detect_bank(path, password)
            .map(|b| b.id().to_string())
            .unwrap_or_else(|| "unknown".to_string()),
    };

    let parser = get_parser(&id);
    match catch_unwind(AssertUnwindSafe(|| parser(path, password))) {
        Ok(result) => result,
        Err(_) => Err(StatementError::Internal(format!(
            "parser for '{id}' panicked"
        ))),
    }
}
