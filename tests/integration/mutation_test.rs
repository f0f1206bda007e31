//! Integration tests for rename, duplicate and move.

use bonnenote_core::error::DocumentError;
use bonnenote_entity::document::Document;

use crate::helpers::{TestApp, names};

#[test]
fn test_rename_document() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");
    let mut docs = vec![doc1.clone()];

    let renamed = app.documents.rename_document(&mut docs, doc1.id(), "doc2").unwrap();

    assert_eq!(renamed.name, "doc2");
    assert_eq!(renamed.id(), doc1.id());
    assert_eq!(docs[0].name, "doc2");
}

#[test]
fn test_rename_to_name_used_by_another_document() {
    let app = TestApp::new();
    let doc1 = app.doc_with_flags("doc1", false, false);
    let doc2 = app.doc_with_flags("doc2", false, true);
    let mut docs = vec![doc1.clone(), doc2];

    let err = app
        .documents
        .rename_document(&mut docs, doc1.id(), "doc2")
        .unwrap_err();

    assert_eq!(err, DocumentError::NameAlreadyUsed);
    assert_eq!(err.to_string(), "The given name is already used");
    assert_eq!(docs[0].name, "doc1");
}

#[test]
fn test_rename_archived_or_signed_leaves_name() {
    let app = TestApp::new();
    let archived = app.doc_with_flags("archived", false, true);
    let signed = app.doc_with_flags("signed", true, false);
    let mut docs = vec![archived.clone(), signed.clone()];

    let err = app
        .documents
        .rename_document(&mut docs, archived.id(), "new")
        .unwrap_err();
    assert_eq!(err, DocumentError::DocumentArchived);
    assert_eq!(err.to_string(), "The given doc is archived");

    let err = app
        .documents
        .rename_document(&mut docs, signed.id(), "new")
        .unwrap_err();
    assert_eq!(err, DocumentError::DocumentSigned);
    assert_eq!(err.to_string(), "The given doc is signed");

    assert_eq!(names(&docs), vec!["archived", "signed"]);
}

#[test]
fn test_rename_empty_name() {
    let app = TestApp::new();
    let doc = app.doc("doc1");
    let mut docs = vec![doc.clone()];

    let err = app.documents.rename_document(&mut docs, doc.id(), "").unwrap_err();

    assert_eq!(err, DocumentError::InvalidName);
}

#[test]
fn test_duplicate_document() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");
    let doc2 = app.doc("doc2 (copy)");
    let doc3 = app.doc_with_flags("doc3", true, true);
    let doc4 = app.doc_with_flags("doc4", true, false);
    let mut docs = vec![doc1.clone(), doc2.clone(), doc3, doc4];

    let copy = app.documents.duplicate_document(&mut docs, doc1.id()).unwrap();
    assert_eq!(copy.name, "doc1 (copy)");
    assert_ne!(copy.id(), doc1.id());
    assert_eq!(copy.content, doc1.content);
    assert_eq!(copy.author, doc1.author);
    assert_eq!(docs.len(), 5);
    assert_eq!(docs.last(), Some(&copy));

    let copy = app.documents.duplicate_document(&mut docs, doc2.id()).unwrap();
    assert_eq!(copy.name, "doc2 (copy) (copy)");
    assert_eq!(docs.len(), 6);
}

#[test]
fn test_duplicate_archived_or_signed_fails() {
    let app = TestApp::new();
    let archived = app.doc_with_flags("doc3", true, true);
    let signed = app.doc_with_flags("doc4", true, false);
    let mut docs = vec![archived.clone(), signed.clone()];

    assert_eq!(
        app.documents.duplicate_document(&mut docs, archived.id()),
        Err(DocumentError::DocumentArchived)
    );
    assert_eq!(
        app.documents.duplicate_document(&mut docs, signed.id()),
        Err(DocumentError::DocumentSigned)
    );
    assert_eq!(docs.len(), 2);
}

#[test]
fn test_move_document() {
    let app = TestApp::new();
    let doc1 = app.doc("doc1");
    let doc2 = app.doc("doc2");
    let doc3 = app.doc_with_flags("doc3", true, true);
    let mut docs = vec![doc1.clone(), doc2.clone(), doc3.clone()];
    let mut folder1: Vec<Document> = Vec::new();

    let target = app
        .documents
        .move_document(&mut docs, doc1.id(), &mut folder1)
        .unwrap();
    assert_eq!(target, [doc1.clone()].as_slice());

    assert_eq!(folder1, vec![doc1]);
    assert_eq!(docs, vec![doc2, doc3]);
}

#[test]
fn test_move_archived_and_signed_document_keeps_id() {
    let app = TestApp::new();
    let locked = app.doc_with_flags("locked", true, true);
    let mut docs = vec![app.doc("other"), locked.clone()];
    let mut folder: Vec<Document> = vec![app.doc("existing")];

    app.documents
        .move_document(&mut docs, locked.id(), &mut folder)
        .unwrap();

    assert_eq!(names(&docs), vec!["other"]);
    assert_eq!(names(&folder), vec!["existing", "locked"]);
    assert_eq!(folder[1].id(), locked.id());
}
