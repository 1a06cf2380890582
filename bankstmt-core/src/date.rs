//! Date normalization for issuer-specific date tokens.
//!
//! Statements carry dates in many partial shapes: `15/08/2025`, `15/08`,
//! `14 AUG`, `03AUG25`. Everything funnels into ISO `YYYY-MM-DD`; tokens
//! with no year component get the fill year (the current calendar year at
//! the outermost wrapper, injected explicitly everywhere else so tests stay
//! deterministic).

use chrono::format::{Parsed, StrftimeItems};
use chrono::{Datelike, Local, NaiveDate};

/// Formats tried in order when the caller supplies no explicit format.
/// Compact forms come before the spaced ones: chrono lets a format space
/// match empty input, so `%d %b %Y` would otherwise swallow `03AUG25` and
/// read "25" as the year.
const FALLBACK_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d/%m/%y",
    "%d/%m",
    "%d%b%y",
    "%d%b%Y",
    "%d %b %Y",
    "%d %b",
];

fn parse_with_fill(raw: &str, fmt: &str, fill_year: i32) -> Option<NaiveDate> {
    let mut parsed = Parsed::new();
    chrono::format::parse(&mut parsed, raw, StrftimeItems::new(fmt)).ok()?;

    match parsed.to_naive_date() {
        Ok(date) => Some(date),
        Err(_) => {
            // token carried no year (e.g. "15/08", "14 AUG")
            parsed.set_year(i64::from(fill_year)).ok()?;
            parsed.to_naive_date().ok()
        }
    }
}

/// Normalize a raw date token into `YYYY-MM-DD`, with an explicit year to
/// fill into year-less tokens. Returns an empty string on failure; callers
/// treat that as "undated" rather than an error.
pub fn normalize_date_with_year(raw: &str, fmt: Option<&str>, fill_year: i32) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let cleaned = raw.trim().to_uppercase().replace(['.', ','], "");

    let formats: &[&str] = match &fmt {
        Some(f) => std::slice::from_ref(f),
        None => FALLBACK_FORMATS,
    };

    for f in formats {
        if let Some(date) = parse_with_fill(&cleaned, f, fill_year) {
            return date.format("%Y-%m-%d").to_string();
        }
    }

    String::new()
}

/// Normalize a raw date token, filling missing years with the current year.
pub fn normalize_date(raw: &str, fmt: Option<&str>) -> String {
    normalize_date_with_year(raw, fmt, Local::now().year())
}
