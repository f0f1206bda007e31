//! Core type definitions used across the Bonne Note workspace.

pub mod id;
pub mod sorting;

pub use id::DocumentId;
pub use sorting::{DocumentSortField, SortDirection};
