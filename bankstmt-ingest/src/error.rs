use thiserror::Error;

/// Tagged errors crossing the parsing boundary. The request layer maps these
/// to a client-visible `{"error": ...}` payload; nothing else escapes.
#[derive(Debug, Error)]
pub enum StatementError {
    #[error("Invalid password for PDF")]
    InvalidPassword,

    #[error("Failed to open PDF: {0}")]
    Unreadable(String),

    #[error("Parser failure: {0}")]
    Internal(String),
}
