//! Download link generation.

use tracing::{debug, warn};

use bonnenote_core::config::transfer::TransferConfig;
use bonnenote_core::result::DocumentResult;
use bonnenote_core::types::DocumentId;
use bonnenote_entity::document::Document;

use crate::validation::is_valid;

/// Builds download links served by the external download service.
///
/// No network call is made: the link is plain string construction.
#[derive(Debug, Clone)]
pub struct DownloadService {
    /// Base URL links are built from, without a trailing slash.
    base_url: String,
}

impl DownloadService {
    /// Creates a new download service from the transfer configuration.
    pub fn new(config: &TransferConfig) -> Self {
        Self {
            base_url: config
                .download_base_url
                .trim_end_matches('/')
                .to_string(),
        }
    }

    /// Returns `{base_url}/{id}/{name}` for the document with the given id.
    ///
    /// The name is used as-is, without URL encoding.
    pub fn download_document(
        &self,
        collection: &[Document],
        id: DocumentId,
    ) -> DocumentResult<String> {
        let doc = is_valid(collection.iter().find(|doc| doc.id() == id))
            .inspect_err(|e| warn!(document_id = %id, error = %e, "Download rejected"))?;

        let url = self.link_for(doc);
        debug!(document_id = %id, %url, "Download link generated");

        Ok(url)
    }

    /// Builds the link for a document already in hand.
    pub fn link_for(&self, doc: &Document) -> String {
        format!("{}/{}/{}", self.base_url, doc.id(), doc.name)
    }
}

impl Default for DownloadService {
    fn default() -> Self {
        Self::new(&TransferConfig::default())
    }
}
