//! Transfer services: download links and sending documents to recipients.

pub mod download;
pub mod send;

pub use download::DownloadService;
pub use send::SendService;
