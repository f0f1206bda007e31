//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bonnenote_core::types::DocumentId;

/// Suffix appended to the name of a duplicated document.
pub const COPY_SUFFIX: &str = " (copy)";

/// A document held in a collection.
///
/// The constructor performs no validation: empty names and contents are
/// accepted and only rejected by the operations that require them.
///
/// Only serialization is derived. Documents are built from a
/// [`CreateDocument`] so every id comes from the shared counter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    /// Unique document identifier, fixed at creation.
    id: DocumentId,
    /// Display name.
    pub name: String,
    /// Text content.
    pub content: String,
    /// Document date.
    pub date: DateTime<Utc>,
    /// Size of the content.
    pub size: u64,
    /// Whether the document has been signed.
    pub signed: bool,
    /// Author name.
    pub author: String,
    /// Whether the document has been archived.
    pub archived: bool,
}

impl Document {
    /// Create a document from its creation payload, allocating a fresh id.
    pub fn new(data: CreateDocument) -> Self {
        Self {
            id: DocumentId::next(),
            name: data.name,
            content: data.content,
            date: data.date,
            size: data.size,
            signed: data.signed,
            author: data.author,
            archived: data.archived,
        }
    }

    /// Return the document identifier.
    pub fn id(&self) -> DocumentId {
        self.id
    }

    /// Build a copy of this document with a fresh id and the copy suffix
    /// appended to the name. An existing suffix is never collapsed.
    pub fn duplicate(&self) -> Self {
        Self {
            id: DocumentId::next(),
            name: format!("{}{}", self.name, COPY_SUFFIX),
            ..self.clone()
        }
    }
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Display name.
    pub name: String,
    /// Text content.
    #[serde(default)]
    pub content: String,
    /// Document date.
    pub date: DateTime<Utc>,
    /// Size of the content.
    #[serde(default)]
    pub size: u64,
    /// Whether the document is signed.
    #[serde(default)]
    pub signed: bool,
    /// Author name.
    #[serde(default)]
    pub author: String,
    /// Whether the document is archived.
    #[serde(default)]
    pub archived: bool,
}

impl From<CreateDocument> for Document {
    fn from(data: CreateDocument) -> Self {
        Self::new(data)
    }
}
