//! # bonnenote-service
//!
//! Document operations for Bonne Note. Services work on caller-owned
//! collections (`Vec<Document>`) and guard every mutation with the
//! preconditions in [`validation`].
//!
//! All operations are synchronous and hold no shared state beyond the
//! collections passed in.

pub mod document;
pub mod transfer;
pub mod validation;

pub use document::DocumentService;
pub use transfer::{DownloadService, SendService};
