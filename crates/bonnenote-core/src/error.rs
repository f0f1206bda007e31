//! Unified application error types for Bonne Note.
//!
//! Document operations fail with a [`DocumentError`], whose variants carry
//! the exact messages surfaced to callers. At the application boundary every
//! error is mapped into [`AppError`] for consistent propagation through the
//! `?` operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// The requested resource was not found.
    NotFound,
    /// Input validation failed.
    Validation,
    /// A conflict occurred (name already used, etc.).
    Conflict,
    /// A snapshot or local file could not be read.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// A serialization/deserialization error occurred.
    Serialization,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "NOT_FOUND"),
            Self::Validation => write!(f, "VALIDATION"),
            Self::Conflict => write!(f, "CONFLICT"),
            Self::Storage => write!(f, "STORAGE"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Serialization => write!(f, "SERIALIZATION"),
        }
    }
}

/// A violated document precondition.
///
/// The `Display` output of each variant is the exact message callers see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum DocumentError {
    /// The collection is empty where a non-empty one is required.
    #[error("The given source is invalid")]
    InvalidSource,
    /// The name is empty, or no document matches a name lookup.
    #[error("The given name is invalid")]
    InvalidName,
    /// Another document in the collection already has the requested name.
    #[error("The given name is already used")]
    NameAlreadyUsed,
    /// The document reference is absent (for example, the id was not found).
    #[error("The given doc is invalid")]
    InvalidDocument,
    /// The document is archived.
    #[error("The given doc is archived")]
    DocumentArchived,
    /// The document is signed.
    #[error("The given doc is signed")]
    DocumentSigned,
    /// The send recipient is empty.
    #[error("Invalid recipient")]
    InvalidRecipient,
    /// The document to send has an empty name or empty content.
    #[error("Invalid document")]
    IncompleteDocument,
}

impl DocumentError {
    /// Return the application-level category for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NameAlreadyUsed => ErrorKind::Conflict,
            Self::InvalidDocument => ErrorKind::NotFound,
            Self::InvalidSource
            | Self::InvalidName
            | Self::DocumentArchived
            | Self::DocumentSigned
            | Self::InvalidRecipient
            | Self::IncompleteDocument => ErrorKind::Validation,
        }
    }
}

/// The unified application error used at the Bonne Note boundary.
///
/// Crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Return the underlying document error, if this error wraps one.
    pub fn document_error(&self) -> Option<&DocumentError> {
        self.source
            .as_deref()
            .and_then(|source| source.downcast_ref::<DocumentError>())
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<DocumentError> for AppError {
    fn from(err: DocumentError) -> Self {
        Self::with_source(err.kind(), err.to_string(), err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Serialization,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::with_source(ErrorKind::Storage, format!("I/O error: {err}"), err)
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}
