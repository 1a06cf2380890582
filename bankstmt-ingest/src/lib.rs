//! bankstmt-ingest: PDF text-extraction boundary, issuer detection, and the
//! per-issuer statement parsers.

pub mod bank;
pub mod error;
pub mod parsers;
pub mod pdf;

pub use bank::{detect_bank, detect_bank_pages, Bank};
pub use error::StatementError;
pub use parsers::{get_parser, parse_statement, ParseFn};
pub use pdf::extract_pages;
