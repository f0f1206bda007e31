//! Document collection operations and guarded mutations.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use bonnenote_core::error::DocumentError;
use bonnenote_core::result::DocumentResult;
use bonnenote_core::types::{DocumentId, DocumentSortField, SortDirection};
use bonnenote_entity::document::{CreateDocument, Document};

use crate::document::sort;
use crate::validation::{is_not_archived, is_not_signed, is_valid, is_valid_name};

/// Creates, queries, and mutates documents held in caller-owned collections.
///
/// The service holds no state. Every operation works on the collection it is
/// given and preserves the relative order of documents it does not touch.
#[derive(Debug, Clone, Default)]
pub struct DocumentService;

impl DocumentService {
    /// Creates a new document service.
    pub fn new() -> Self {
        Self
    }

    /// Creates a document with a freshly allocated id. No validation is done.
    #[allow(clippy::too_many_arguments)]
    pub fn create_document(
        &self,
        name: impl Into<String>,
        content: impl Into<String>,
        date: DateTime<Utc>,
        size: u64,
        signed: bool,
        author: impl Into<String>,
        archived: bool,
    ) -> Document {
        Document::new(CreateDocument {
            name: name.into(),
            content: content.into(),
            date,
            size,
            signed,
            author: author.into(),
            archived,
        })
    }

    /// Appends a document to the end of the collection.
    pub fn save_document(&self, collection: &mut Vec<Document>, doc: Document) {
        info!(document_id = %doc.id(), name = %doc.name, "Document saved");
        collection.push(doc);
    }

    /// Returns the whole collection unchanged.
    pub fn find_all<'a>(&self, collection: &'a [Document]) -> &'a [Document] {
        collection
    }

    /// Returns every document whose name contains `name` (case-sensitive),
    /// in collection order.
    ///
    /// Fails with [`DocumentError::InvalidSource`] on an empty collection and
    /// with [`DocumentError::InvalidName`] when nothing matches.
    pub fn find_by_name<'a>(
        &self,
        collection: &'a [Document],
        name: &str,
    ) -> DocumentResult<Vec<&'a Document>> {
        if collection.is_empty() {
            return Err(DocumentError::InvalidSource);
        }

        let matches: Vec<&Document> = collection
            .iter()
            .filter(|doc| doc.name.contains(name))
            .collect();

        if matches.is_empty() {
            return Err(DocumentError::InvalidName);
        }

        debug!(pattern = %name, count = matches.len(), "Documents matched by name");

        Ok(matches)
    }

    /// Removes the first document with the given id and returns it.
    ///
    /// An unknown id leaves the collection untouched.
    pub fn delete_by_id(
        &self,
        collection: &mut Vec<Document>,
        id: DocumentId,
    ) -> Option<Document> {
        let index = collection.iter().position(|doc| doc.id() == id)?;
        let removed = collection.remove(index);
        info!(document_id = %id, "Document deleted");
        Some(removed)
    }

    /// Empties the collection in place.
    pub fn delete_all(&self, collection: &mut Vec<Document>) {
        let count = collection.len();
        collection.clear();
        info!(count, "All documents deleted");
    }

    /// Sorts the collection in place by `field` and returns it.
    pub fn sort_documents<'a>(
        &self,
        collection: &'a mut [Document],
        field: DocumentSortField,
        direction: SortDirection,
    ) -> &'a [Document] {
        sort::sort_in_place(collection, field, direction);
        debug!(%field, %direction, count = collection.len(), "Documents sorted");
        collection
    }

    /// Renames the document with the given id.
    ///
    /// The name must not be used by any document in the collection, the
    /// target included. The document must then exist, the name must be
    /// non-empty, and the document must be neither archived nor signed.
    pub fn rename_document<'a>(
        &self,
        collection: &'a mut [Document],
        id: DocumentId,
        new_name: &str,
    ) -> DocumentResult<&'a Document> {
        if collection.iter().any(|doc| doc.name == new_name) {
            warn!(document_id = %id, name = %new_name, "Rename rejected: name already used");
            return Err(DocumentError::NameAlreadyUsed);
        }

        let doc = is_valid(collection.iter_mut().find(|doc| doc.id() == id))
            .and_then(|doc| {
                is_valid_name(new_name)?;
                is_not_archived(doc)?;
                is_not_signed(doc)?;
                Ok(doc)
            })
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Rename rejected"))?;

        let old_name = std::mem::replace(&mut doc.name, new_name.to_string());

        info!(document_id = %id, from = %old_name, to = %new_name, "Document renamed");

        Ok(&*doc)
    }

    /// Duplicates the document with the given id into the same collection.
    ///
    /// The copy gets a new id and the name suffixed with `" (copy)"`; all
    /// other fields are copied. The source must exist and be neither archived
    /// nor signed.
    pub fn duplicate_document(
        &self,
        collection: &mut Vec<Document>,
        id: DocumentId,
    ) -> DocumentResult<Document> {
        let source = is_valid(collection.iter().find(|doc| doc.id() == id))
            .and_then(|doc| {
                is_not_archived(doc)?;
                is_not_signed(doc)?;
                Ok(doc)
            })
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Duplicate rejected"))?;

        let copy = source.duplicate();

        info!(source_id = %id, new_id = %copy.id(), name = %copy.name, "Document duplicated");

        self.save_document(collection, copy.clone());

        Ok(copy)
    }

    /// Moves the document with the given id from `source` to the end of
    /// `target` and returns the target.
    ///
    /// Only existence is checked: archived and signed documents can be moved.
    /// The document keeps its id.
    pub fn move_document<'t>(
        &self,
        source: &mut Vec<Document>,
        id: DocumentId,
        target: &'t mut Vec<Document>,
    ) -> DocumentResult<&'t [Document]> {
        let doc = is_valid(source.iter().find(|doc| doc.id() == id))
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Move rejected"))?
            .clone();

        self.save_document(target, doc);
        self.delete_by_id(source, id);

        info!(document_id = %id, "Document moved");

        Ok(target.as_slice())
    }
}
