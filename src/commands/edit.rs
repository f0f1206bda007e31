//! Mutating commands: rename, duplicate, move, delete, clear.
//!
//! Results are printed only; snapshots on disk are never rewritten.

use serde_json::json;

use bonnenote_core::error::AppError;
use bonnenote_core::types::DocumentId;
use bonnenote_entity::document::Document;

use super::Services;
use crate::output::{self, OutputFormat};

/// Rename a document and print it
pub fn rename(
    services: &Services,
    collection: &mut [Document],
    id: DocumentId,
    name: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let doc = services.documents.rename_document(collection, id, name)?;
    output::print_document(doc, format);
    Ok(())
}

/// Duplicate a document and print the copy
pub fn duplicate(
    services: &Services,
    collection: &mut Vec<Document>,
    id: DocumentId,
    format: OutputFormat,
) -> Result<(), AppError> {
    let copy = services.documents.duplicate_document(collection, id)?;
    output::print_document(&copy, format);
    Ok(())
}

/// Move a document to the target collection and print both collections
pub fn move_to(
    services: &Services,
    collection: &mut Vec<Document>,
    id: DocumentId,
    target: &mut Vec<Document>,
    format: OutputFormat,
) -> Result<(), AppError> {
    services.documents.move_document(collection, id, target)?;

    match format {
        OutputFormat::Json => {
            let body = json!({ "source": collection, "target": target });
            println!(
                "{}",
                serde_json::to_string_pretty(&body).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            output::print_header("Source", format);
            output::print_documents(collection.iter(), format);
            output::print_header("Target", format);
            output::print_documents(target.iter(), format);
        }
    }

    Ok(())
}

/// Delete a document by id and print the remaining collection
pub fn delete(
    services: &Services,
    collection: &mut Vec<Document>,
    id: DocumentId,
    format: OutputFormat,
) -> Result<(), AppError> {
    match services.documents.delete_by_id(collection, id) {
        Some(removed) => tracing::debug!(document_id = %removed.id(), "Removed from snapshot"),
        None => output::print_error(&format!("No document with id {id}")),
    }
    output::print_documents(collection.iter(), format);
    Ok(())
}

/// Delete every document
pub fn clear(
    services: &Services,
    collection: &mut Vec<Document>,
    format: OutputFormat,
) -> Result<(), AppError> {
    let count = collection.len();
    services.documents.delete_all(collection);
    match format {
        OutputFormat::Table => output::print_success(&format!("Deleted {count} document(s)")),
        OutputFormat::Json => output::print_documents(collection.iter(), format),
    }
    Ok(())
}
