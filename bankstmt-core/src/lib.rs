//! bankstmt-core: canonical transaction ledger model and the normalization
//! primitives shared by every issuer parser (amounts, dates, record shape,
//! summary statistics).

pub mod amount;
pub mod date;
pub mod normalize;
pub mod summary;
pub mod types;

pub use amount::clean_amount;
pub use date::{normalize_date, normalize_date_with_year};
pub use normalize::normalize_transactions;
pub use summary::summarize;
pub use types::{
    Candidate, CanonicalTransaction, CardType, LedgerResult, LedgerSummary, StatementPeriod,
};
