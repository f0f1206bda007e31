//! Precondition guards for document operations.
//!
//! Each guard passes silently or returns the [`DocumentError`] for the
//! violated precondition. Operations chain them with `?`, so when several
//! preconditions fail at once the first guard in the chain decides the
//! reported error.

use bonnenote_core::error::DocumentError;
use bonnenote_core::result::DocumentResult;
use bonnenote_entity::document::Document;

/// Require a document reference to be present.
///
/// Lookups by id return `None` when nothing matches; that case is reported
/// the same way as an absent document.
pub fn is_valid<T>(doc: Option<T>) -> DocumentResult<T> {
    doc.ok_or(DocumentError::InvalidDocument)
}

/// Require a name to be non-empty.
pub fn is_valid_name(name: &str) -> DocumentResult<()> {
    if name.is_empty() {
        return Err(DocumentError::InvalidName);
    }
    Ok(())
}

/// Require the document not to be archived.
pub fn is_not_archived(doc: &Document) -> DocumentResult<()> {
    if doc.archived {
        return Err(DocumentError::DocumentArchived);
    }
    Ok(())
}

/// Require the document not to be signed.
pub fn is_not_signed(doc: &Document) -> DocumentResult<()> {
    if doc.signed {
        return Err(DocumentError::DocumentSigned);
    }
    Ok(())
}
