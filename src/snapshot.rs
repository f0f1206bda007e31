//! Loading collection snapshots from JSON files.

use std::path::Path;

use bonnenote_core::error::AppError;
use bonnenote_entity::document::{CreateDocument, Document};

/// Read a JSON array of [`CreateDocument`] and build the collection,
/// allocating ids in file order.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Document>, AppError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        AppError::with_source(
            bonnenote_core::error::ErrorKind::Storage,
            format!("Failed to read snapshot '{}': {e}", path.display()),
            e,
        )
    })?;

    let documents = parse(&raw)?;

    tracing::debug!(path = %path.display(), count = documents.len(), "Snapshot loaded");

    Ok(documents)
}

/// Parse a JSON snapshot held in memory.
pub fn parse(raw: &str) -> Result<Vec<Document>, AppError> {
    let entries: Vec<CreateDocument> = serde_json::from_str(raw)?;
    Ok(entries.into_iter().map(Document::new).collect())
}
