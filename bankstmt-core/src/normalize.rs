//! Collapse the heterogeneous per-issuer candidate shape into the canonical
//! ledger-entry shape. Pure and total: absent fields already defaulted to
//! zero on [`Candidate`], extra fields (balance, FX leg) are dropped here.

use crate::types::{Candidate, CanonicalTransaction, CardType};

/// Map parser candidates into canonical records, stamping the issuer display
/// name and card type onto every one.
pub fn normalize_transactions(
    candidates: Vec<Candidate>,
    bank: &str,
    card_type: CardType,
) -> Vec<CanonicalTransaction> {
    candidates
        .into_iter()
        .map(|c| CanonicalTransaction {
            transaction_date: c.transaction_date,
            description: c.description.trim().to_string(),
            debit: c.debit,
            credit: c.credit,
            amount: c.amount,
            bank: bank.to_string(),
            card_type,
        })
        .collect()
}
