//! Table and JSON output formatting for CLI commands.

use tabled::{Table, Tabled};

use bonnenote_entity::document::Document;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Document display row
#[derive(Debug, Tabled)]
pub struct DocumentRow {
    /// Document ID
    id: String,
    /// Name
    name: String,
    /// Author
    author: String,
    /// Date
    date: String,
    /// Size
    size: String,
    /// Signed
    signed: String,
    /// Archived
    archived: String,
}

impl From<&Document> for DocumentRow {
    fn from(doc: &Document) -> Self {
        Self {
            id: doc.id().to_string(),
            name: doc.name.clone(),
            author: doc.author.clone(),
            date: doc.date.format("%Y-%m-%d %H:%M").to_string(),
            size: doc.size.to_string(),
            signed: if doc.signed { "✓" } else { "" }.to_string(),
            archived: if doc.archived { "✓" } else { "" }.to_string(),
        }
    }
}

/// Print a list of documents in the selected format
pub fn print_documents<'a>(docs: impl IntoIterator<Item = &'a Document>, format: OutputFormat) {
    let docs: Vec<&Document> = docs.into_iter().collect();
    match format {
        OutputFormat::Table => {
            if docs.is_empty() {
                println!("No documents.");
            } else {
                let rows: Vec<DocumentRow> = docs.into_iter().map(DocumentRow::from).collect();
                println!("{}", Table::new(rows));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&docs).unwrap_or_else(|_| "[]".to_string());
            println!("{}", json);
        }
    }
}

/// Print a single document in the selected format
pub fn print_document(doc: &Document, format: OutputFormat) {
    print_documents(std::iter::once(doc), format);
}

/// Print a plain value (link, status message) in the selected format
pub fn print_value(value: &str, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", value),
        OutputFormat::Json => {
            let json = serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string());
            println!("{}", json);
        }
    }
}

/// Print a section header (table output only)
pub fn print_header(title: &str, format: OutputFormat) {
    if format == OutputFormat::Table {
        println!("{}:", title);
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {}", msg);
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {}", msg);
}
