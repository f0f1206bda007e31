//! # bonnenote-core
//!
//! Core crate for Bonne Note. Contains configuration schemas, the typed
//! document identifier, sorting types, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Bonne Note crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, DocumentError};
pub use result::{AppResult, DocumentResult};
