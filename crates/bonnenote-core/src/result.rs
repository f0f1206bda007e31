//! Convenience result type aliases for Bonne Note.

use crate::error::{AppError, DocumentError};

/// A specialized `Result` type for application-boundary operations
/// (configuration, I/O, command dispatch).
pub type AppResult<T> = Result<T, AppError>;

/// A specialized `Result` type for document operations.
///
/// Guards and collection operations fail with a [`DocumentError`] so callers
/// can match on the exact precondition that was violated.
pub type DocumentResult<T> = Result<T, DocumentError>;
