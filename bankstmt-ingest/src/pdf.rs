//! PDF collaborator boundary: file in, ordered per-page plain text out.
//!
//! Everything downstream works on extracted text only, so the parsers stay
//! testable against string fixtures without a PDF in sight.

use std::path::Path;

use lopdf::Document;

use crate::error::StatementError;

/// Open a statement PDF and extract each page's text, in page order.
///
/// Wrong passwords and unreadable files come back as tagged errors; a page
/// whose text extraction fails yields an empty string, which parsers skip.
pub fn extract_pages(path: &Path, password: Option<&str>) -> Result<Vec<String>, StatementError> {
    let mut doc =
        Document::load(path).map_err(|e| StatementError::Unreadable(e.to_string()))?;

    if doc.is_encrypted() {
        doc.decrypt(password.unwrap_or(""))
            .map_err(|_| StatementError::InvalidPassword)?;
    }

    let pages = doc
        .get_pages()
        .keys()
        .map(|number| {
            doc.extract_text(&[*number]).unwrap_or_else(|e| {
                tracing::debug!(page = *number, error = %e, "no extractable text on page");
                String::new()
            })
        })
        .collect();

    Ok(pages)
}
