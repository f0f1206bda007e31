//! # bonnenote-entity
//!
//! Domain entity models for Bonne Note. Entities serialize for output;
//! only creation payloads deserialize.

pub mod document;

pub use document::{CreateDocument, Document};
