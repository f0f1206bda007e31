//! Document domain entities.

pub mod model;

pub use model::{COPY_SUFFIX, CreateDocument, Document};
