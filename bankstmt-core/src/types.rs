use serde::{Deserialize, Serialize};

/// Whether a statement belongs to a checking (debit) account or a credit card.
/// Fixed per issuer, stamped onto every record during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Debit,
    Credit,
}

/// The one ledger-entry shape all issuer parsers converge to.
///
/// Exactly one of `debit`/`credit` is non-zero, or both are zero (the
/// generic fallback leaves amounts unclassified). `amount` is the matched
/// magnitude from the statement line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalTransaction {
    /// ISO `YYYY-MM-DD`, or empty when the raw token was unrecoverable.
    pub transaction_date: String,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub amount: f64,
    pub bank: String,
    pub card_type: CardType,
}

/// Ledger-level statistics over one parsed statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    pub record_count: usize,
    pub total_debit: f64,
    pub total_credit: f64,
    pub net_change: f64,
}

/// Statement coverage bounds, when the issuer states (or implies) them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementPeriod {
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// The API-facing artifact of one parse call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerResult {
    pub bank: String,
    pub card_type: CardType,
    pub summary: LedgerSummary,
    pub transactions: Vec<CanonicalTransaction>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
}

/// Mutable accumulator built while scanning the lines of one statement.
///
/// Superset of the fields any single issuer fills in; whatever a parser
/// leaves untouched defaults to its zero value and is dropped or zeroed
/// during normalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub transaction_date: String,
    pub description: String,
    pub debit: f64,
    pub credit: f64,
    pub amount: f64,
    /// Running balance after the transaction (checking statements).
    pub balance: Option<f64>,
    /// Foreign-currency leg (RAKBANK FX rows only).
    pub fx_currency: Option<String>,
    pub fx_amount: f64,
    pub fx_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CardType::Debit).unwrap(), "\"debit\"");
        assert_eq!(serde_json::to_string(&CardType::Credit).unwrap(), "\"credit\"");
    }

    #[test]
    fn test_ledger_result_json_shape() {
        let result = LedgerResult {
            bank: "ENBD".to_string(),
            card_type: CardType::Debit,
            summary: LedgerSummary::default(),
            transactions: vec![],
            from_date: Some("2025-08-01".to_string()),
            to_date: None,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["bank"], "ENBD");
        assert_eq!(json["card_type"], "debit");
        assert_eq!(json["summary"]["record_count"], 0);
        assert_eq!(json["from_date"], "2025-08-01");
        assert!(json["to_date"].is_null());
    }
}
