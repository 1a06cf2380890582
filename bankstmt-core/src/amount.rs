//! Amount normalization for issuer-formatted numeric strings.
//!
//! Statement amounts arrive with thousands separators ("1,234.56"), a
//! trailing credit marker ("1,234.56Cr") or a lone "-" placeholder column.
//! Polarity is never inferred here; callers decide debit vs credit from
//! issuer-specific rules.

/// Convert an issuer-formatted amount string into a non-negative magnitude.
///
/// Empty, `-`, or unparsable input yields `0.0`.
pub fn clean_amount(raw: &str) -> f64 {
    let mut s = raw.trim().replace(',', "");

    // trailing Cr / CR marker
    let bytes = s.as_bytes();
    if bytes.len() >= 2 && bytes[bytes.len() - 2..].eq_ignore_ascii_case(b"cr") {
        s.truncate(s.len() - 2);
    }

    let s = s.trim();
    if s.is_empty() || s == "-" {
        return 0.0;
    }

    s.parse::<f64>().map(f64::abs).unwrap_or(0.0)
}
