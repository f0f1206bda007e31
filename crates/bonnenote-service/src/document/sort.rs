//! In-place sorting of document collections.

use std::cmp::Ordering;

use bonnenote_core::types::{DocumentSortField, SortDirection};
use bonnenote_entity::document::Document;

/// Compare two documents on a single field in ascending order.
pub fn compare(a: &Document, b: &Document, field: DocumentSortField) -> Ordering {
    match field {
        DocumentSortField::Name => a.name.cmp(&b.name),
        DocumentSortField::Date => a.date.cmp(&b.date),
        DocumentSortField::Size => a.size.cmp(&b.size),
        DocumentSortField::Author => a.author.cmp(&b.author),
    }
}

/// Sort `documents` in place.
///
/// Descending order is the stable ascending sort reversed, so documents with
/// equal keys come out in the opposite relative order to the ascending sort.
pub fn sort_in_place(
    documents: &mut [Document],
    field: DocumentSortField,
    direction: SortDirection,
) {
    documents.sort_by(|a, b| compare(a, b, field));
    if direction == SortDirection::Desc {
        documents.reverse();
    }
}
