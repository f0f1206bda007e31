//! Sending documents to recipients.

use tracing::{info, warn};

use bonnenote_core::config::transfer::TransferConfig;
use bonnenote_core::error::DocumentError;
use bonnenote_core::result::DocumentResult;
use bonnenote_entity::document::Document;

/// Validates send requests and reports the outcome.
///
/// Actual delivery belongs to an external transport; this service only
/// checks the preconditions and simulates a successful hand-off.
#[derive(Debug, Clone)]
pub struct SendService {
    /// Indicator returned on success.
    success_message: String,
}

impl SendService {
    /// Creates a new send service from the transfer configuration.
    pub fn new(config: &TransferConfig) -> Self {
        Self {
            success_message: config.send_success_message.clone(),
        }
    }

    /// Sends `doc` to `recipient`.
    ///
    /// The recipient is checked first, then the document's name and content.
    pub fn send_document(&self, doc: &Document, recipient: &str) -> DocumentResult<&str> {
        if recipient.is_empty() {
            warn!(document_id = %doc.id(), "Send rejected: empty recipient");
            return Err(DocumentError::InvalidRecipient);
        }

        if doc.name.is_empty() || doc.content.is_empty() {
            warn!(document_id = %doc.id(), "Send rejected: empty name or content");
            return Err(DocumentError::IncompleteDocument);
        }

        info!(document_id = %doc.id(), %recipient, "Document sent");

        Ok(self.success_message.as_str())
    }
}

impl Default for SendService {
    fn default() -> Self {
        Self::new(&TransferConfig::default())
    }
}
