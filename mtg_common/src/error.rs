//! Error types shared by the MTG tools

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading decklists or parsing user input
#[derive(Debug, Error)]
pub enum Error {
    /// Condition label or short code not recognised
    #[error("Unknown condition: {0}")]
    UnknownCondition(String),

    /// Decklist or inventory file could not be opened or read
    #[error("Failed to open {}: {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for mtg_common operations
pub type Result<T> = std::result::Result<T, Error>;
