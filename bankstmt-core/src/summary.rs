//! Ledger-level statistics over a canonical transaction list.

use crate::types::{CanonicalTransaction, LedgerSummary};

/// Compute summary statistics. Defined (all zeros) on an empty list.
pub fn summarize(transactions: &[CanonicalTransaction]) -> LedgerSummary {
    let total_debit: f64 = transactions.iter().map(|t| t.debit).sum();
    let total_credit: f64 = transactions.iter().map(|t| t.credit).sum();

    LedgerSummary {
        record_count: transactions.len(),
        total_debit,
        total_credit,
        net_change: total_credit - total_debit,
    }
}
