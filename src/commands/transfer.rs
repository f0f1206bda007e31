//! Transfer commands: download, send.

use bonnenote_core::error::{AppError, DocumentError};
use bonnenote_core::types::DocumentId;
use bonnenote_entity::document::Document;

use super::Services;
use crate::output::{self, OutputFormat};

/// Print the download link of a document
pub fn download(
    services: &Services,
    collection: &[Document],
    id: DocumentId,
    format: OutputFormat,
) -> Result<(), AppError> {
    let url = services.download.download_document(collection, id)?;
    output::print_value(&url, format);
    Ok(())
}

/// Send a document and print the outcome
pub fn send(
    services: &Services,
    collection: &[Document],
    id: DocumentId,
    recipient: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let doc = collection
        .iter()
        .find(|doc| doc.id() == id)
        .ok_or(DocumentError::InvalidDocument)?;
    let status = services.send.send_document(doc, recipient)?;
    output::print_value(status, format);
    Ok(())
}
