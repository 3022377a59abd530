/// DBC database access
///
/// This module wraps the can-dbc parser and flattens the parsed object
/// graph into plain rows the UI can render directly:
/// - File loading and parsing (loader.rs)
/// - View rows for nodes, messages and signals (model.rs)

pub mod loader;
pub mod model;

use thiserror::Error;

/// Errors produced while loading a DBC file.
///
/// Both variants carry an already-rendered message so the error stays
/// `Clone` and can travel inside an application message.
#[derive(Debug, Clone, Error)]
pub enum DbcError {
    #[error("Could not read file: {0}")]
    Read(String),

    #[error("Could not parse DBC: {0}")]
    Parse(String),

    #[error("Background task failed: {0}")]
    Task(String),
}
