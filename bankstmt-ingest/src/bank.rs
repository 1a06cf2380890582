//! Issuer identification: a closed set of supported banks plus fingerprint
//! detection over the first pages of extracted text.

use std::path::Path;

use bankstmt_core::CardType;

use crate::pdf::extract_pages;

/// Supported statement issuers. `Unknown` routes to the generic fallback
/// parser; ADCB is detectable but has no dedicated grammar yet and also
/// falls back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bank {
    Mashreq,
    Enbd,
    Adcb,
    EmiratesIslamic,
    Rakbank,
    Unknown,
}

/// Fingerprint substrings per issuer, tested against lower-cased page text.
/// Declared order is detection order: first match wins, so more specific
/// entries must come before issuers whose keywords could shadow them.
const BANK_KEYWORDS: &[(Bank, &[&str])] = &[
    (Bank::Mashreq, &["mashreq", "mashreqbank"]),
    (Bank::Enbd, &["emirates nbd", "dubai bank"]),
    (Bank::Adcb, &["adcb", "abu dhabi commercial bank"]),
    (Bank::EmiratesIslamic, &["emirates islamic"]),
    (Bank::Rakbank, &["rakbank", "national bank of ras al khaimah"]),
];

impl Bank {
    /// Case-insensitive, synonym-aware id lookup. Anything unrecognized is
    /// `Unknown`.
    pub fn from_id(id: &str) -> Bank {
        match id.trim().to_lowercase().as_str() {
            "mashreq" => Bank::Mashreq,
            "enbd" => Bank::Enbd,
            "adcb" => Bank::Adcb,
            "emiratesislamic" | "emirates islamic" => Bank::EmiratesIslamic,
            "rakbank" => Bank::Rakbank,
            _ => Bank::Unknown,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Bank::Mashreq => "mashreq",
            Bank::Enbd => "enbd",
            Bank::Adcb => "adcb",
            Bank::EmiratesIslamic => "emiratesislamic",
            Bank::Rakbank => "rakbank",
            Bank::Unknown => "unknown",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Bank::Mashreq => "Mashreq",
            Bank::Enbd => "ENBD",
            Bank::Adcb => "ADCB",
            Bank::EmiratesIslamic => "Emirates Islamic",
            Bank::Rakbank => "RAKBANK",
            Bank::Unknown => "unknown",
        }
    }

    /// Account flavor is fixed per issuer layout.
    pub fn card_type(self) -> CardType {
        match self {
            Bank::Mashreq | Bank::EmiratesIslamic | Bank::Rakbank => CardType::Credit,
            Bank::Enbd | Bank::Adcb | Bank::Unknown => CardType::Debit,
        }
    }
}

/// Detect the issuer from extracted page text. Only the first two pages are
/// consulted; some banks put the letterhead on page two.
pub fn detect_bank_pages(pages: &[String]) -> Option<Bank> {
    for page in pages.iter().take(2) {
        let text = page.to_lowercase();
        for (bank, keywords) in BANK_KEYWORDS {
            if keywords.iter().any(|kw| text.contains(kw)) {
                return Some(*bank);
            }
        }
    }
    None
}

/// Detect the issuer from a statement PDF. Returns `None` when the document
/// cannot be opened (wrong password, corrupt file) or nothing matches.
pub fn detect_bank(path: &Path, password: Option<&str>) -> Option<Bank> {
    let pages = extract_pages(path, password).ok()?;
    detect_bank_pages(&pages)
}
