//! Integration tests for download links and sending.

use bonnenote_core::config::transfer::TransferConfig;
use bonnenote_core::error::{AppError, DocumentError, ErrorKind};
use bonnenote_service::SendService;

use crate::helpers::TestApp;

#[test]
fn test_download_document_link() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");
    let docs = vec![doc1.clone()];

    let url = app.download.download_document(&docs, doc1.id()).unwrap();

    assert_eq!(url, format!("https://bonne-note.fr/download/{}/doc1", doc1.id()));
}

#[test]
fn test_download_uses_current_name() {
    let app = TestApp::new();
    let doc = app.doc("draft");
    let mut docs = vec![doc.clone()];
    app.documents.rename_document(&mut docs, doc.id(), "final").unwrap();

    let url = app.download.download_document(&docs, doc.id()).unwrap();

    assert!(url.ends_with(&format!("/{}/final", doc.id())));
}

#[test]
fn test_send_document_successfully() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");

    assert_eq!(
        app.send.send_document(&doc1, "recipient1"),
        Ok("Document sent successfully")
    );
}

#[test]
fn test_send_invalid_recipient() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");

    let err = app.send.send_document(&doc1, "").unwrap_err();

    assert_eq!(err, DocumentError::InvalidRecipient);
    assert_eq!(err.to_string(), "Invalid recipient");
}

#[test]
fn test_send_invalid_title_or_content() {
    let app = TestApp::new();
    let untitled = app
        .documents
        .create_document("", "content2", chrono::Utc::now(), 100, false, "author1", false);
    let empty = app
        .documents
        .create_document("title2", "", chrono::Utc::now(), 100, false, "author1", false);

    for doc in [&untitled, &empty] {
        let err = app.send.send_document(doc, "recipient2").unwrap_err();
        assert_eq!(err, DocumentError::IncompleteDocument);
        assert_eq!(err.to_string(), "Invalid document");
    }
}

#[test]
fn test_send_error_maps_to_app_error() {
    let doc = TestApp::new().doc("doc1");
    let service = SendService::new(&TransferConfig::default());

    let err: AppError = service.send_document(&doc, "").unwrap_err().into();

    assert_eq!(err.kind, ErrorKind::Validation);
    assert_eq!(err.message, "Invalid recipient");
}
