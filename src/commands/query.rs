//! Read-only commands: list, find, sort.

use bonnenote_core::error::AppError;
use bonnenote_core::types::{DocumentSortField, SortDirection};
use bonnenote_entity::document::Document;

use super::Services;
use crate::output::{self, OutputFormat};

/// Print the whole collection
pub fn list(
    services: &Services,
    collection: &[Document],
    format: OutputFormat,
) -> Result<(), AppError> {
    output::print_documents(services.documents.find_all(collection), format);
    Ok(())
}

/// Print documents whose name contains `name`
pub fn find(
    services: &Services,
    collection: &[Document],
    name: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let found = services.documents.find_by_name(collection, name)?;
    output::print_documents(found, format);
    Ok(())
}

/// Sort the collection and print it
pub fn sort(
    services: &Services,
    collection: &mut [Document],
    field: DocumentSortField,
    direction: SortDirection,
    format: OutputFormat,
) -> Result<(), AppError> {
    let sorted = services
        .documents
        .sort_documents(collection, field, direction);
    output::print_documents(sorted, format);
    Ok(())
}
