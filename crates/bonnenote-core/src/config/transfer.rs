//! Download link and send configuration.

use serde::{Deserialize, Serialize};

/// Settings for the transfer operations (download links and sending).
///
/// The defaults reproduce the fixed link `https://bonne-note.fr/download/<id>/<name>`
/// and the fixed send indicator. Overriding either field produces values
/// outside that fixed contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferConfig {
    /// Base URL prepended to `/{id}/{name}` when building download links.
    ///
    /// Changing it moves every link off the `https://bonne-note.fr/download`
    /// host; keep the default where the exact link shape matters.
    #[serde(default = "default_download_base_url")]
    pub download_base_url: String,
    /// Indicator returned by a successful send.
    #[serde(default = "default_send_success_message")]
    pub send_success_message: String,
}

impl Default for TransferConfig {
    fn default() -> Self {
        Self {
            download_base_url: default_download_base_url(),
            send_success_message: default_send_success_message(),
        }
    }
}

fn default_download_base_url() -> String {
    "https://bonne-note.fr/download".to_string()
}

fn default_send_success_message() -> String {
    "Document sent successfully".to_string()
}
