//! CLI command definitions and dispatch.

pub mod edit;
pub mod query;
pub mod transfer;

use clap::{Parser, Subcommand};

use bonnenote_core::config::AppConfig;
use bonnenote_core::error::AppError;
use bonnenote_core::types::{DocumentId, DocumentSortField, SortDirection};
use bonnenote_service::{DocumentService, DownloadService, SendService};

use crate::output::OutputFormat;
use crate::snapshot;

/// Bonne Note: in-memory document manager
#[derive(Debug, Parser)]
#[command(name = "bonne-note", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and per-environment overlays
    #[arg(long, default_value = "config")]
    pub config_dir: String,

    /// JSON snapshot of the collection to operate on
    #[arg(short, long)]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List every document
    List,
    /// Find documents whose name contains a substring
    Find {
        /// Case-sensitive substring
        name: String,
    },
    /// Sort the collection
    Sort {
        /// Field: name, date, size, author
        #[arg(long, default_value = "name")]
        by: DocumentSortField,
        /// Direction: asc, desc
        #[arg(long, default_value = "asc")]
        order: SortDirection,
    },
    /// Rename a document
    Rename {
        /// Document ID
        id: DocumentId,
        /// New name
        name: String,
    },
    /// Duplicate a document into the same collection
    Duplicate {
        /// Document ID
        id: DocumentId,
    },
    /// Move a document to another collection
    Move {
        /// Document ID
        id: DocumentId,
        /// JSON snapshot of the target collection
        #[arg(short, long)]
        target: String,
    },
    /// Delete a document
    Delete {
        /// Document ID
        id: DocumentId,
    },
    /// Delete every document
    Clear,
    /// Print the download link of a document
    Download {
        /// Document ID
        id: DocumentId,
    },
    /// Send a document to a recipient
    Send {
        /// Document ID
        id: DocumentId,
        /// Recipient identifier
        #[arg(long)]
        to: String,
    },
}

/// Services shared by every command, built once from configuration.
#[derive(Debug, Clone)]
pub struct Services {
    /// Collection queries and guarded mutations.
    pub documents: DocumentService,
    /// Download link generation.
    pub download: DownloadService,
    /// Send validation.
    pub send: SendService,
}

impl Services {
    /// Build the services from the loaded configuration.
    pub fn new(config: &AppConfig) -> Self {
        Self {
            documents: DocumentService::new(),
            download: DownloadService::new(&config.transfer),
            send: SendService::new(&config.transfer),
        }
    }
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        let services = Services::new(config);
        let mut collection = snapshot::load(&self.input)?;
        let format = self.format;

        match &self.command {
            Commands::List => query::list(&services, &collection, format),
            Commands::Find { name } => query::find(&services, &collection, name, format),
            Commands::Sort { by, order } => {
                query::sort(&services, &mut collection, *by, *order, format)
            }
            Commands::Rename { id, name } => {
                edit::rename(&services, &mut collection, *id, name, format)
            }
            Commands::Duplicate { id } => edit::duplicate(&services, &mut collection, *id, format),
            Commands::Move { id, target } => {
                let mut target_collection = snapshot::load(target)?;
                edit::move_to(&services, &mut collection, *id, &mut target_collection, format)
            }
            Commands::Delete { id } => edit::delete(&services, &mut collection, *id, format),
            Commands::Clear => edit::clear(&services, &mut collection, format),
            Commands::Download { id } => transfer::download(&services, &collection, *id, format),
            Commands::Send { id, to } => transfer::send(&services, &collection, *id, to, format),
        }
    }
}
