/// DBC file loader
///
/// Reads a .dbc file from disk and hands it to the can-dbc parser. The
/// async wrapper runs the whole thing on a blocking thread so the UI
/// stays responsive even for large databases.

use std::path::{Path, PathBuf};
use tokio::task;

use super::model::Document;
use super::DbcError;

/// Load and parse a DBC file in the background
///
/// # Arguments
/// * `path` - Path to the .dbc file
///
/// # Returns
/// * `Ok(Document)` - Resolved view rows for the whole database
/// * `Err(DbcError)` - Read or parse failure
pub async fn load_document_async(path: PathBuf) -> Result<Document, DbcError> {
    task::spawn_blocking(move || load_document(&path))
        .await
        .map_err(|e| DbcError::Task(e.to_string()))?
}

/// Blocking implementation of DBC loading
pub fn load_document(path: &Path) -> Result<Document, DbcError> {
    let buffer = std::fs::read(path)
        .map_err(|e| DbcError::Read(format!("{}: {}", path.display(), e)))?;

    // can-dbc errors borrow the input buffer, so render them here
    let dbc = can_dbc::DBC::from_slice(&buffer)
        .map_err(|e| DbcError::Parse(format!("{:?}", e)))?;

    let document = Document::from_dbc(&dbc, path);

    println!(
        "📖 Loaded {}: {} nodes, {} messages",
        document.file_name,
        document.nodes.len(),
        document.messages.len()
    );

    Ok(document)
}
