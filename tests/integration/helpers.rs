//! Shared test helpers for integration tests.

use chrono::{DateTime, TimeZone, Utc};

use bonnenote_core::config::AppConfig;
use bonnenote_entity::document::Document;
use bonnenote_service::{DocumentService, DownloadService, SendService};

/// Test application context
pub struct TestApp {
    /// Collection operations
    pub documents: DocumentService,
    /// Download link generation
    pub download: DownloadService,
    /// Send validation
    pub send: SendService,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        let config = AppConfig::default();
        Self {
            documents: DocumentService::new(),
            download: DownloadService::new(&config.transfer),
            send: SendService::new(&config.transfer),
        }
    }

    /// Create a plain document dated today
    pub fn doc(&self, name: &str) -> Document {
        self.documents
            .create_document(name, "content1", Utc::now(), 100, false, "author1", false)
    }

    /// Create a document with explicit flags
    pub fn doc_with_flags(&self, name: &str, signed: bool, archived: bool) -> Document {
        self.documents
            .create_document(name, "content1", Utc::now(), 100, signed, "author1", archived)
    }

    /// Create a document with an explicit date, size and author
    pub fn dated_doc(&self, name: &str, date: DateTime<Utc>, size: u64, author: &str) -> Document {
        self.documents
            .create_document(name, "content", date, size, true, author, false)
    }
}

/// Build a UTC midnight timestamp.
pub fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("valid date")
}

/// Collect the names of a collection in order.
pub fn names<'a>(docs: impl IntoIterator<Item = &'a Document>) -> Vec<String> {
    docs.into_iter().map(|d| d.name.clone()).collect()
}
