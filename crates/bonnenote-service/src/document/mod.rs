//! Document management services: collection queries, sorting, and guarded
//! mutations (rename, duplicate, move).

pub mod service;
pub mod sort;

pub use service::DocumentService;
